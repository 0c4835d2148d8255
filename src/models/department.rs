//! Department reference data and per-department analytics.
//!
//! [`DepartmentStats`] describes one department's attendance on a single
//! day; [`DepartmentHours`] describes the hours its employees logged over
//! the seven days ending on that day. Both match employees to departments
//! by name.

use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Attendance, AttendanceStatus, Employee};
use crate::error::{EngineError, EngineResult};

/// Number of days, ending on the reference day, covered by [`DepartmentHours`].
pub const DEPARTMENT_HOURS_WINDOW_DAYS: u64 = 7;

/// A department of the organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// Display name; employees reference departments by this name.
    pub name: String,
    /// Name of the department manager.
    pub manager: String,
    /// Planned headcount.
    #[serde(default)]
    pub employee_count: u32,
}

/// Attendance of one department on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// Department name.
    pub name: String,
    /// Records marked present.
    pub present: usize,
    /// Records marked absent.
    pub absent: usize,
    /// Records marked late.
    pub late: usize,
    /// Employees who checked in on time.
    pub on_time: usize,
    /// Active employees in the department.
    pub total: usize,
    /// `present / total * 100`, two places, zero for an empty department.
    pub attendance_rate: Decimal,
}

impl DepartmentStats {
    /// Counts `day`'s attendance of the department's active employees.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_engine::models::DepartmentStats;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    /// let stats = DepartmentStats::for_day("Marketing", &[], &[], day);
    /// assert_eq!(stats.total, 0);
    /// assert_eq!(stats.attendance_rate, Decimal::ZERO);
    /// ```
    pub fn for_day(
        name: &str,
        employees: &[Employee],
        attendance: &[Attendance],
        day: NaiveDate,
    ) -> Self {
        let members: Vec<&str> = employees
            .iter()
            .filter(|e| e.department == name && e.is_active())
            .map(|e| e.id.as_str())
            .collect();

        let mut stats = DepartmentStats {
            name: name.to_string(),
            present: 0,
            absent: 0,
            late: 0,
            on_time: 0,
            total: members.len(),
            attendance_rate: Decimal::ZERO,
        };

        for record in attendance
            .iter()
            .filter(|a| a.date == day && members.contains(&a.employee_id.as_str()))
        {
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::HalfDay => {}
            }
        }

        // Late arrivals carry their own status, so every present record is on time.
        stats.on_time = stats.present;

        if stats.total > 0 {
            let rate = Decimal::from(stats.present) * Decimal::ONE_HUNDRED
                / Decimal::from(stats.total);
            stats.attendance_rate =
                rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        }
        stats
    }
}

/// Hours logged by one department over a seven-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentHours {
    /// Department name.
    pub name: String,
    /// Sum of hours worked, two places.
    pub total_hours: Decimal,
    /// Hours per attendance record, two places, zero without records.
    pub average_hours: Decimal,
    /// Number of attendance records in the window.
    pub record_count: usize,
    /// Employees in the department, whatever their status.
    pub employees: usize,
}

impl DepartmentHours {
    /// Sums the hours of the department's employees over the seven days
    /// ending on `day`, both ends included.
    ///
    /// Fails with [`EngineError::InvalidAttendance`], naming the record that
    /// pushed the sum out of range, when the total does not fit in a
    /// [`Decimal`].
    pub fn for_week(
        name: &str,
        employees: &[Employee],
        attendance: &[Attendance],
        day: NaiveDate,
    ) -> EngineResult<Self> {
        let members: Vec<&str> = employees
            .iter()
            .filter(|e| e.department == name)
            .map(|e| e.id.as_str())
            .collect();
        let start = day
            .checked_sub_days(Days::new(DEPARTMENT_HOURS_WINDOW_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);

        let mut total_hours = Decimal::ZERO;
        let mut record_count = 0;
        for record in attendance.iter().filter(|a| {
            a.date >= start && a.date <= day && members.contains(&a.employee_id.as_str())
        }) {
            total_hours = total_hours.checked_add(record.hours_worked).ok_or_else(|| {
                EngineError::InvalidAttendance {
                    employee_id: record.employee_id.clone(),
                    date: record.date.to_string(),
                    message: "department hours are out of range".to_string(),
                }
            })?;
            record_count += 1;
        }

        let average_hours = if record_count > 0 {
            total_hours / Decimal::from(record_count)
        } else {
            Decimal::ZERO
        };

        Ok(DepartmentHours {
            name: name.to_string(),
            total_hours: total_hours
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            average_hours: average_hours
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            record_count,
            employees: members.len(),
        })
    }
}
