//! Core data models for the HR engine.
//!
//! This module contains all the domain models used by the store, the
//! report pipeline and the HTTP API.

mod attendance;
mod department;
mod employee;
mod export_options;
mod salary_record;

pub use attendance::{Attendance, AttendanceStatus, NewAttendance, TodayAttendance};
pub use department::{
    DEPARTMENT_HOURS_WINDOW_DAYS, Department, DepartmentHours, DepartmentStats,
};
pub use employee::{Employee, EmployeeFilter, EmployeeStatus, EmployeeUpdate, NewEmployee};
pub use export_options::{ExportOptions, ExportPeriod};
pub use salary_record::{
    SalaryRecord, SalaryStatus, SalarySummary, SalaryUpdate, compute_total_salary,
};
