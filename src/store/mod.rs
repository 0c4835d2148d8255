//! In-memory store for employees, attendance, salary records and
//! departments.
//!
//! The [`Store`] owns every record behind a single read-write lock. Each
//! mutation validates its input first and then applies the change inside
//! one write-lock critical section, so readers observe either the state
//! before a mutation or the state after it.
//!
//! All operations return [`EngineResult`]; unknown identifiers produce
//! [`EngineError::EmployeeNotFound`] or [`EngineError::SalaryRecordNotFound`].

mod seed;

pub use seed::StoreSeed;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Attendance, AttendanceStatus, Department, DepartmentHours, DepartmentStats, Employee,
    EmployeeFilter, EmployeeUpdate, NewAttendance, NewEmployee, SalaryRecord, SalarySummary,
    SalaryUpdate, TodayAttendance,
};

/// Numbering base for generated employee identifiers (`EMP-{n}`).
pub const EMPLOYEE_NUMBER_BASE: u32 = 1000;

#[derive(Debug, Default)]
struct StoreData {
    employees: Vec<Employee>,
    attendance: Vec<Attendance>,
    salary_records: Vec<SalaryRecord>,
    departments: Vec<Department>,
    next_employee_number: u32,
}

impl StoreData {
    fn employee_index(&self, id: &str) -> EngineResult<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    fn salary_index(&self, id: &str) -> EngineResult<usize> {
        self.salary_records
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::SalaryRecordNotFound { id: id.to_string() })
    }

    /// Seeded department names, or the distinct employee departments in
    /// order of first appearance when none were seeded.
    fn department_names(&self) -> Vec<String> {
        if !self.departments.is_empty() {
            return self.departments.iter().map(|d| d.name.clone()).collect();
        }
        let mut names: Vec<String> = Vec::new();
        for employee in &self.employees {
            if !names.contains(&employee.department) {
                names.push(employee.department.clone());
            }
        }
        names
    }

    fn next_employee_id(&mut self) -> String {
        loop {
            let id = format!("EMP-{}", self.next_employee_number);
            self.next_employee_number += 1;
            if !self.employees.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }
}

/// The HR record store.
///
/// # Example
///
/// ```
/// use hr_engine::models::{EmployeeStatus, NewEmployee};
/// use hr_engine::store::Store;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = Store::default();
/// let employee = store
///     .add_employee(NewEmployee {
///         name: "Alex Garcia".to_string(),
///         email: "alex.garcia@company.com".to_string(),
///         position: "Junior".to_string(),
///         department: "Operations".to_string(),
///         joining_date: NaiveDate::from_ymd_opt(2022, 9, 5).unwrap(),
///         salary: Decimal::new(45000, 0),
///         status: EmployeeStatus::Active,
///         contact_number: None,
///         address: None,
///     })
///     .await
///     .unwrap();
///
/// assert_eq!(employee.id, "EMP-1001");
/// assert_eq!(store.get_employee("EMP-1001").unwrap().name, "Alex Garcia");
/// # });
/// ```
#[derive(Debug)]
pub struct Store {
    data: RwLock<StoreData>,
    latency: Duration,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Store {
    /// Creates an empty store whose mutations wait `latency` first.
    pub fn new(latency: Duration) -> Self {
        Self {
            data: RwLock::new(StoreData {
                next_employee_number: EMPLOYEE_NUMBER_BASE + 1,
                ..StoreData::default()
            }),
            latency,
        }
    }

    /// Creates a store from seed data.
    ///
    /// Salary totals are recomputed from their components. Duplicate
    /// employee identifiers, attendance records that break the attendance
    /// invariants, and paid salary records without a payment date are
    /// rejected.
    pub fn from_seed(seed: StoreSeed, latency: Duration) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for employee in &seed.employees {
            if !seen.insert(employee.id.as_str()) {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
            validate_employee(employee)?;
        }
        for record in &seed.attendance {
            record.validate()?;
        }

        let mut salary_records = seed.salary_records;
        for record in &mut salary_records {
            record.recompute_total()?;
            record.validate()?;
        }

        let next_employee_number = EMPLOYEE_NUMBER_BASE + seed.employees.len() as u32 + 1;
        info!(
            employees = seed.employees.len(),
            attendance = seed.attendance.len(),
            salary_records = salary_records.len(),
            departments = seed.departments.len(),
            "Seeded store"
        );

        Ok(Self {
            data: RwLock::new(StoreData {
                employees: seed.employees,
                attendance: seed.attendance,
                salary_records,
                departments: seed.departments,
                next_employee_number,
            }),
            latency,
        })
    }

    /// Creates a store from configuration, loading the seed file if one is
    /// configured.
    pub fn from_config(config: &StoreConfig) -> EngineResult<Self> {
        match &config.seed_path {
            Some(path) => Self::from_seed(StoreSeed::load(path)?, config.latency()),
            None => Ok(Self::new(config.latency())),
        }
    }

    /// Returns the configured mutation latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // ---------------------------------------------------------------------
    // Employees
    // ---------------------------------------------------------------------

    /// Adds an employee and returns it with its assigned identifier.
    pub async fn add_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        self.simulate_latency().await;

        let mut employee = Employee::from_new(String::new(), new);
        validate_employee(&employee)?;

        let mut data = self.write();
        employee.id = data.next_employee_id();
        data.employees.push(employee.clone());
        drop(data);

        info!(employee_id = %employee.id, name = %employee.name, "Added employee");
        Ok(employee)
    }

    /// Updates an employee with the fields present in `update`.
    pub async fn update_employee(
        &self,
        id: &str,
        update: EmployeeUpdate,
    ) -> EngineResult<Employee> {
        self.simulate_latency().await;

        let mut data = self.write();
        let index = data.employee_index(id).inspect_err(|_| {
            warn!(employee_id = %id, "Employee not found");
        })?;

        let mut updated = data.employees[index].clone();
        updated.apply(update);
        validate_employee(&updated)?;
        data.employees[index] = updated.clone();
        drop(data);

        info!(employee_id = %id, name = %updated.name, "Updated employee");
        Ok(updated)
    }

    /// Removes an employee and returns the removed record.
    ///
    /// Attendance and salary records referring to the employee are kept.
    pub async fn delete_employee(&self, id: &str) -> EngineResult<Employee> {
        self.simulate_latency().await;

        let mut data = self.write();
        let index = data.employee_index(id).inspect_err(|_| {
            warn!(employee_id = %id, "Employee not found");
        })?;
        let removed = data.employees.remove(index);
        drop(data);

        info!(employee_id = %id, name = %removed.name, "Deleted employee");
        Ok(removed)
    }

    /// Returns the employee with the given identifier.
    pub fn get_employee(&self, id: &str) -> EngineResult<Employee> {
        let data = self.read();
        let index = data.employee_index(id)?;
        Ok(data.employees[index].clone())
    }

    /// Returns every employee, in insertion order.
    pub fn employees(&self) -> Vec<Employee> {
        self.read().employees.clone()
    }

    /// Returns employees matching `filter`.
    pub fn filter_employees(&self, filter: &EmployeeFilter) -> Vec<Employee> {
        self.read()
            .employees
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    // ---------------------------------------------------------------------
    // Attendance
    // ---------------------------------------------------------------------

    /// Records attendance for an existing employee.
    pub async fn record_attendance(&self, new: NewAttendance) -> EngineResult<Attendance> {
        self.simulate_latency().await;

        let record = Attendance::from_new(Uuid::new_v4().to_string(), new);
        record.validate()?;

        let mut data = self.write();
        data.employee_index(&record.employee_id)?;
        data.attendance.push(record.clone());
        drop(data);

        info!(
            employee_id = %record.employee_id,
            date = %record.date,
            status = %record.status,
            "Recorded attendance"
        );
        Ok(record)
    }

    /// Returns every attendance record, in insertion order.
    pub fn attendance(&self) -> Vec<Attendance> {
        self.read().attendance.clone()
    }

    /// Returns the attendance records of one employee.
    ///
    /// The employee must exist; an existing employee with no records yields
    /// an empty list.
    pub fn employee_attendance(&self, employee_id: &str) -> EngineResult<Vec<Attendance>> {
        let data = self.read();
        data.employee_index(employee_id)?;
        Ok(data
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    /// Returns every attendance record dated `date`.
    pub fn attendance_by_date(&self, date: NaiveDate) -> Vec<Attendance> {
        self.read()
            .attendance
            .iter()
            .filter(|a| a.date == date)
            .cloned()
            .collect()
    }

    /// Counts today's attendance by status against the active headcount.
    pub fn today_attendance(&self, today: NaiveDate) -> TodayAttendance {
        let data = self.read();
        let mut stats = TodayAttendance {
            total: data.employees.iter().filter(|e| e.is_active()).count(),
            ..TodayAttendance::default()
        };

        for record in data.attendance.iter().filter(|a| a.date == today) {
            match record.status {
                AttendanceStatus::Present => stats.present += 1,
                AttendanceStatus::Absent => stats.absent += 1,
                AttendanceStatus::Late => stats.late += 1,
                AttendanceStatus::HalfDay => {}
            }
        }
        stats
    }

    // ---------------------------------------------------------------------
    // Salary records
    // ---------------------------------------------------------------------

    /// Returns every salary record, in insertion order.
    pub fn salary_records(&self) -> Vec<SalaryRecord> {
        self.read().salary_records.clone()
    }

    /// Returns the salary records of one employee.
    pub fn employee_salary_records(&self, employee_id: &str) -> EngineResult<Vec<SalaryRecord>> {
        let data = self.read();
        data.employee_index(employee_id)?;
        Ok(data
            .salary_records
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .cloned()
            .collect())
    }

    /// Returns the salary record with the given identifier.
    pub fn get_salary_record(&self, id: &str) -> EngineResult<SalaryRecord> {
        let data = self.read();
        let index = data.salary_index(id)?;
        Ok(data.salary_records[index].clone())
    }

    /// Updates a salary record and recomputes its total.
    pub async fn update_salary_record(
        &self,
        id: &str,
        update: SalaryUpdate,
    ) -> EngineResult<SalaryRecord> {
        self.simulate_latency().await;

        let mut data = self.write();
        let index = data.salary_index(id).inspect_err(|_| {
            warn!(salary_record_id = %id, "Salary record not found");
        })?;
        data.salary_records[index].apply(update)?;
        let updated = data.salary_records[index].clone();
        drop(data);

        info!(
            salary_record_id = %id,
            total_salary = %updated.total_salary,
            "Salary record updated"
        );
        Ok(updated)
    }

    /// Summarizes every salary record in the store.
    pub fn salary_summary(&self) -> EngineResult<SalarySummary> {
        SalarySummary::from_records(&self.read().salary_records)
    }

    // ---------------------------------------------------------------------
    // Departments
    // ---------------------------------------------------------------------

    /// Returns the seeded departments.
    pub fn departments(&self) -> Vec<Department> {
        self.read().departments.clone()
    }

    /// Counts `today`'s attendance per department.
    ///
    /// Departments come from the seed; without seeded departments every
    /// distinct employee department is reported.
    pub fn department_stats(&self, today: NaiveDate) -> Vec<DepartmentStats> {
        let data = self.read();
        data.department_names()
            .iter()
            .map(|name| DepartmentStats::for_day(name, &data.employees, &data.attendance, today))
            .collect()
    }

    /// Sums each department's hours over the seven days ending `today`.
    pub fn department_hours(&self, today: NaiveDate) -> EngineResult<Vec<DepartmentHours>> {
        let data = self.read();
        data.department_names()
            .iter()
            .map(|name| DepartmentHours::for_week(name, &data.employees, &data.attendance, today))
            .collect()
    }
}

fn validate_employee(employee: &Employee) -> EngineResult<()> {
    let invalid = |field: &str, message: &str| EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    };

    if employee.name.trim().is_empty() {
        return Err(invalid("name", "cannot be empty"));
    }
    if employee.email.trim().is_empty() {
        return Err(invalid("email", "cannot be empty"));
    }
    if employee.salary < Decimal::ZERO {
        return Err(invalid("salary", "cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeStatus, SalaryStatus};
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_employee(name: &str, department: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            position: "Associate".to_string(),
            department: department.to_string(),
            joining_date: date(2021, 5, 3),
            salary: dec("52000"),
            status: EmployeeStatus::Active,
            contact_number: None,
            address: None,
        }
    }

    fn salary_record(id: &str, employee_id: &str) -> SalaryRecord {
        SalaryRecord {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            month: "March".to_string(),
            year: 2023,
            base_salary: dec("4333.33"),
            overtime_pay: dec("120"),
            deductions: dec("200"),
            bonus: dec("0"),
            // deliberately stale; the store recomputes it
            total_salary: dec("1"),
            status: SalaryStatus::Pending,
            payment_date: None,
        }
    }

    fn attendance(employee_id: &str, day: NaiveDate, status: AttendanceStatus) -> NewAttendance {
        let hours = if status == AttendanceStatus::Absent {
            Decimal::ZERO
        } else {
            dec("8")
        };
        NewAttendance {
            employee_id: employee_id.to_string(),
            date: day,
            check_in: "09:00".to_string(),
            check_out: "17:00".to_string(),
            status,
            hours_worked: hours,
            notes: None,
        }
    }

    async fn seeded_store() -> Store {
        let store = Store::default();
        store.add_employee(new_employee("John Smith", "Engineering")).await.unwrap();
        store.add_employee(new_employee("Jane Jones", "HR")).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_add_employee_assigns_sequential_ids() {
        let store = seeded_store().await;
        let ids: Vec<String> = store.employees().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["EMP-1001", "EMP-1002"]);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = seeded_store().await;
        store.delete_employee("EMP-1002").await.unwrap();
        let added = store.add_employee(new_employee("Mike Brown", "Finance")).await.unwrap();
        assert_eq!(added.id, "EMP-1003");
    }

    #[tokio::test]
    async fn test_add_employee_rejects_empty_name() {
        let store = Store::default();
        let result = store.add_employee(new_employee("  ", "HR")).await;
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee { ref field, .. }) if field == "name"
        ));
        assert!(store.employees().is_empty());

        let added = store.add_employee(new_employee("Lisa Anderson", "HR")).await.unwrap();
        assert_eq!(added.id, "EMP-1001");
    }

    #[tokio::test]
    async fn test_update_employee() {
        let store = seeded_store().await;
        let updated = store
            .update_employee(
                "EMP-1001",
                EmployeeUpdate {
                    status: Some(EmployeeStatus::OnLeave),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, EmployeeStatus::OnLeave);
        assert_eq!(updated.name, "John Smith");
        assert_eq!(store.get_employee("EMP-1001").unwrap().status, EmployeeStatus::OnLeave);
    }

    #[tokio::test]
    async fn test_update_missing_employee_is_not_found() {
        let store = seeded_store().await;
        let result = store.update_employee("EMP-4040", EmployeeUpdate::default()).await;
        match result {
            Err(EngineError::EmployeeNotFound { id }) => assert_eq!(id, "EMP-4040"),
            _ => panic!("Expected EmployeeNotFound error"),
        }
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_employee_unchanged() {
        let store = seeded_store().await;
        let before = store.get_employee("EMP-1001").unwrap();
        let result = store
            .update_employee(
                "EMP-1001",
                EmployeeUpdate {
                    department: Some("Finance".to_string()),
                    salary: Some(dec("-1")),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_err());
        assert_eq!(store.get_employee("EMP-1001").unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_employee_returns_removed_record() {
        let store = seeded_store().await;
        let removed = store.delete_employee("EMP-1001").await.unwrap();
        assert_eq!(removed.name, "John Smith");
        assert!(matches!(
            store.get_employee("EMP-1001"),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_employee_is_not_found() {
        let store = seeded_store().await;
        let result = store.delete_employee("EMP-4040").await;
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
        assert_eq!(store.employees().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_employees() {
        let store = seeded_store().await;
        let filter = EmployeeFilter {
            department: Some("engin".to_string()),
            ..Default::default()
        };
        let matched = store.filter_employees(&filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "John Smith");
    }

    #[tokio::test]
    async fn test_record_attendance_and_queries() {
        let store = seeded_store().await;
        let today = date(2024, 5, 20);
        store
            .record_attendance(attendance("EMP-1001", today, AttendanceStatus::Present))
            .await
            .unwrap();
        store
            .record_attendance(attendance("EMP-1002", today, AttendanceStatus::Late))
            .await
            .unwrap();
        store
            .record_attendance(attendance("EMP-1001", date(2024, 5, 19), AttendanceStatus::Absent))
            .await
            .unwrap();

        assert_eq!(store.attendance().len(), 3);
        assert_eq!(store.employee_attendance("EMP-1001").unwrap().len(), 2);
        assert_eq!(store.attendance_by_date(today).len(), 2);

        let stats = store.today_attendance(today);
        assert_eq!(stats.present, 1);
        assert_eq!(stats.late, 1);
        assert_eq!(stats.absent, 0);
        assert_eq!(stats.total, 2);
    }

    #[tokio::test]
    async fn test_record_attendance_for_unknown_employee() {
        let store = seeded_store().await;
        let result = store
            .record_attendance(attendance("EMP-4040", date(2024, 5, 20), AttendanceStatus::Present))
            .await;
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
        assert!(store.attendance().is_empty());
    }

    #[tokio::test]
    async fn test_record_absent_with_hours_is_rejected() {
        let store = seeded_store().await;
        let mut record = attendance("EMP-1001", date(2024, 5, 20), AttendanceStatus::Absent);
        record.hours_worked = dec("3");

        let result = store.record_attendance(record).await;
        assert!(matches!(result, Err(EngineError::InvalidAttendance { .. })));
    }

    #[test]
    fn test_employee_attendance_for_unknown_employee() {
        let store = Store::default();
        assert!(matches!(
            store.employee_attendance("EMP-4040"),
            Err(EngineError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_from_seed_recomputes_salary_totals() {
        let seed = StoreSeed {
            salary_records: vec![salary_record("sal_01", "EMP-1001")],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();
        let record = store.get_salary_record("sal_01").unwrap();
        assert_eq!(record.total_salary, dec("4253.33"));
    }

    #[test]
    fn test_from_seed_rejects_paid_without_date() {
        let mut record = salary_record("sal_01", "EMP-1001");
        record.status = SalaryStatus::Paid;
        let seed = StoreSeed {
            salary_records: vec![record],
            ..StoreSeed::default()
        };
        assert!(matches!(
            Store::from_seed(seed, Duration::ZERO),
            Err(EngineError::InvalidSalaryRecord { .. })
        ));
    }

    #[tokio::test]
    async fn test_from_seed_continues_numbering() {
        let employee = Employee::from_new("EMP-1002".to_string(), new_employee("Emma Davis", "HR"));
        let seed = StoreSeed {
            employees: vec![employee],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();

        // 1002 is taken, so the counter skips past it
        let added = store.add_employee(new_employee("Chris Brown", "HR")).await.unwrap();
        assert_eq!(added.id, "EMP-1003");
    }

    #[test]
    fn test_from_seed_rejects_duplicate_ids() {
        let employee = Employee::from_new("EMP-1001".to_string(), new_employee("Emma Davis", "HR"));
        let seed = StoreSeed {
            employees: vec![employee.clone(), employee],
            ..StoreSeed::default()
        };
        assert!(matches!(
            Store::from_seed(seed, Duration::ZERO),
            Err(EngineError::InvalidEmployee { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_salary_record_keeps_total_invariant() {
        let seed = StoreSeed {
            salary_records: vec![salary_record("sal_01", "EMP-1001")],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();

        let updated = store
            .update_salary_record(
                "sal_01",
                SalaryUpdate {
                    base_salary: Some(dec("5000.50")),
                    bonus: Some(dec("750.25")),
                    deductions: Some(dec("410.10")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.total_salary, dec("5460.65"));
        assert_eq!(store.get_salary_record("sal_01").unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_salary_record() {
        let store = Store::default();
        let result = store.update_salary_record("nope", SalaryUpdate::default()).await;
        match result {
            Err(EngineError::SalaryRecordNotFound { id }) => assert_eq!(id, "nope"),
            _ => panic!("Expected SalaryRecordNotFound error"),
        }
    }

    #[tokio::test]
    async fn test_update_salary_record_out_of_range_is_rejected() {
        let seed = StoreSeed {
            salary_records: vec![salary_record("sal_01", "EMP-1001")],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();
        let before = store.get_salary_record("sal_01").unwrap();

        let result = store
            .update_salary_record(
                "sal_01",
                SalaryUpdate {
                    base_salary: Some(Decimal::MAX),
                    overtime_pay: Some(Decimal::ONE),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(EngineError::InvalidSalaryRecord { .. })
        ));
        assert_eq!(store.get_salary_record("sal_01").unwrap(), before);
    }

    #[tokio::test]
    async fn test_salary_summary() {
        let mut paid = salary_record("sal_02", "EMP-1001");
        paid.status = SalaryStatus::Paid;
        paid.payment_date = Some(date(2023, 3, 15));
        let seed = StoreSeed {
            salary_records: vec![salary_record("sal_01", "EMP-1001"), paid],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();

        let summary = store.salary_summary().unwrap();
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.pending_count, 1);
        assert_eq!(summary.total_paid, dec("4253.33"));
    }

    #[tokio::test]
    async fn test_latency_is_applied_before_mutations() {
        let store = Store::new(Duration::from_millis(50));
        let started = std::time::Instant::now();
        store.add_employee(new_employee("Robert Wilson", "Finance")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_mutations_are_atomic() {
        let store = Arc::new(Store::default());
        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .add_employee(new_employee(&format!("Worker {i}"), "Operations"))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let employees = store.employees();
        assert_eq!(employees.len(), 20);
        let unique: HashSet<&str> = employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unique.len(), 20);
    }

    #[tokio::test]
    async fn test_department_stats_fall_back_to_employee_departments() {
        let store = seeded_store().await;
        let today = date(2024, 5, 20);
        store
            .record_attendance(attendance("EMP-1001", today, AttendanceStatus::Present))
            .await
            .unwrap();
        store
            .record_attendance(attendance("EMP-1002", today, AttendanceStatus::Late))
            .await
            .unwrap();

        let stats = store.department_stats(today);
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Engineering", "HR"]);
        assert_eq!(stats[0].present, 1);
        assert_eq!(stats[0].attendance_rate, dec("100"));
        assert_eq!(stats[1].late, 1);
        assert_eq!(stats[1].present, 0);
        assert_eq!(stats[1].attendance_rate, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_department_hours_use_seeded_departments() {
        let seed = StoreSeed {
            departments: vec![
                Department {
                    id: "dept-1".to_string(),
                    name: "Engineering".to_string(),
                    manager: "David Miller".to_string(),
                    employee_count: 12,
                },
                Department {
                    id: "dept-4".to_string(),
                    name: "Marketing".to_string(),
                    manager: "Emma Davis".to_string(),
                    employee_count: 7,
                },
            ],
            ..StoreSeed::default()
        };
        let store = Store::from_seed(seed, Duration::ZERO).unwrap();
        store.add_employee(new_employee("John Smith", "Engineering")).await.unwrap();
        // the 13th falls outside the window
        for day in [13, 14, 17, 20] {
            let record = attendance("EMP-1001", date(2024, 5, day), AttendanceStatus::Present);
            store.record_attendance(record).await.unwrap();
        }

        assert_eq!(store.departments().len(), 2);
        let hours = store.department_hours(date(2024, 5, 20)).unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].name, "Engineering");
        assert_eq!(hours[0].record_count, 3);
        assert_eq!(hours[0].total_hours, dec("24"));
        assert_eq!(hours[0].average_hours, dec("8"));
        assert_eq!(hours[1].name, "Marketing");
        assert_eq!(hours[1].record_count, 0);
        assert_eq!(hours[1].average_hours, Decimal::ZERO);
        assert_eq!(hours[1].employees, 0);

        let stats = store.department_stats(date(2024, 5, 20));
        assert_eq!(stats[1].total, 0);
        assert_eq!(stats[1].attendance_rate, Decimal::ZERO);
    }

    #[test]
    fn test_from_config_without_seed_is_empty() {
        let config = StoreConfig {
            latency_ms: 10,
            seed_path: None,
        };
        let store = Store::from_config(&config).unwrap();
        assert!(store.employees().is_empty());
        assert_eq!(store.latency(), Duration::from_millis(10));
    }

    #[test]
    fn test_from_config_with_seed() {
        let config = StoreConfig {
            latency_ms: 0,
            seed_path: Some("./config/seed.json".into()),
        };
        let store = Store::from_config(&config).unwrap();
        assert_eq!(store.employees().len(), 3);
    }
}
