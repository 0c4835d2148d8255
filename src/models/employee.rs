//! Employee model and related types.
//!
//! This module defines the [`Employee`] record together with the input
//! types used to create, update and search employees in the store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    /// Currently working.
    Active,
    /// No longer working; keeps historical records.
    Inactive,
    /// Temporarily away.
    OnLeave,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "active"),
            EmployeeStatus::Inactive => write!(f, "inactive"),
            EmployeeStatus::OnLeave => write!(f, "on-leave"),
        }
    }
}

/// Represents an employee tracked by the HR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, stable identifier (e.g., "EMP-1001").
    pub id: String,
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Base annual salary.
    pub salary: Decimal,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Optional contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Employee {
    /// Returns true if the employee is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_engine::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "EMP-1001".to_string(),
    ///     name: "Jane Smith".to_string(),
    ///     email: "jane.smith@company.com".to_string(),
    ///     position: "Senior".to_string(),
    ///     department: "Engineering".to_string(),
    ///     joining_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
    ///     salary: Decimal::new(85000, 0),
    ///     status: EmployeeStatus::Active,
    ///     contact_number: None,
    ///     address: None,
    /// };
    /// assert!(employee.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Builds an employee from creation input and an assigned identifier.
    pub fn from_new(id: String, new: NewEmployee) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            position: new.position,
            department: new.department,
            joining_date: new.joining_date,
            salary: new.salary,
            status: new.status,
            contact_number: new.contact_number,
            address: new.address,
        }
    }

    /// Overwrites every field present in `update`, keeping the rest.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(joining_date) = update.joining_date {
            self.joining_date = joining_date;
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.contact_number.is_some() {
            self.contact_number = update.contact_number;
        }
        if update.address.is_some() {
            self.address = update.address;
        }
    }
}

/// Input for creating an employee; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub position: String,
    /// Department name.
    pub department: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// Base annual salary.
    pub salary: Decimal,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Optional contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Optional postal address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Partial update for an employee. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New job title.
    #[serde(default)]
    pub position: Option<String>,
    /// New department.
    #[serde(default)]
    pub department: Option<String>,
    /// New joining date.
    #[serde(default)]
    pub joining_date: Option<NaiveDate>,
    /// New base annual salary.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// New status.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
    /// New contact number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// New address.
    #[serde(default)]
    pub address: Option<String>,
}

/// Search criteria for employees.
///
/// Text criteria match case-insensitively as substrings; empty strings are
/// ignored. The status criterion matches exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    /// Name fragment.
    #[serde(default)]
    pub name: Option<String>,
    /// Email fragment.
    #[serde(default)]
    pub email: Option<String>,
    /// Position fragment.
    #[serde(default)]
    pub position: Option<String>,
    /// Department fragment.
    #[serde(default)]
    pub department: Option<String>,
    /// Exact status.
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

impl EmployeeFilter {
    /// Returns true if the employee satisfies every present criterion.
    pub fn matches(&self, employee: &Employee) -> bool {
        fn contains(field: &str, needle: &Option<String>) -> bool {
            match needle.as_deref() {
                None | Some("") => true,
                Some(needle) => field.to_lowercase().contains(&needle.to_lowercase()),
            }
        }

        contains(&employee.name, &self.name)
            && contains(&employee.email, &self.email)
            && contains(&employee.position, &self.position)
            && contains(&employee.department, &self.department)
            && self.status.is_none_or(|status| status == employee.status)
    }
}
