//! Attendance model.
//!
//! An [`Attendance`] record is one observation of an employee's presence on
//! a calendar date. Records reference employees by identifier only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Presence status recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Worked a full day.
    Present,
    /// Did not attend.
    Absent,
    /// Attended but arrived late.
    Late,
    /// Worked half a day.
    HalfDay,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::HalfDay => write!(f, "half-day"),
        }
    }
}

/// Represents one attendance record.
///
/// # Example
///
/// ```
/// use hr_engine::models::{Attendance, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = Attendance {
///     id: "att_001".to_string(),
///     employee_id: "EMP-1001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     check_in: "09:02".to_string(),
///     check_out: "17:15".to_string(),
///     status: AttendanceStatus::Present,
///     hours_worked: Decimal::new(825, 2),
///     notes: None,
/// };
/// assert!(record.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Check-in time (`HH:MM`), empty when absent.
    #[serde(default)]
    pub check_in: String,
    /// Check-out time (`HH:MM`), empty when absent.
    #[serde(default)]
    pub check_out: String,
    /// Presence status.
    pub status: AttendanceStatus,
    /// Hours worked; zero when absent.
    pub hours_worked: Decimal,
    /// Optional free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Attendance {
    /// Builds a record from creation input and an assigned identifier.
    pub fn from_new(id: String, new: NewAttendance) -> Self {
        Self {
            id,
            employee_id: new.employee_id,
            date: new.date,
            check_in: new.check_in,
            check_out: new.check_out,
            status: new.status,
            hours_worked: new.hours_worked,
            notes: new.notes,
        }
    }

    /// Checks the attendance invariants.
    ///
    /// Hours worked must be non-negative, and exactly zero when the status
    /// is [`AttendanceStatus::Absent`].
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: &str| EngineError::InvalidAttendance {
            employee_id: self.employee_id.clone(),
            date: self.date.to_string(),
            message: message.to_string(),
        };

        if self.hours_worked < Decimal::ZERO {
            return Err(invalid("hours worked cannot be negative"));
        }
        if self.status == AttendanceStatus::Absent && !self.hours_worked.is_zero() {
            return Err(invalid("absent records must have zero hours worked"));
        }
        Ok(())
    }
}

/// Input for recording attendance; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// Check-in time.
    #[serde(default)]
    pub check_in: String,
    /// Check-out time.
    #[serde(default)]
    pub check_out: String,
    /// Presence status.
    pub status: AttendanceStatus,
    /// Hours worked.
    pub hours_worked: Decimal,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Attendance counts for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayAttendance {
    /// Records marked present today.
    pub present: usize,
    /// Records marked absent today.
    pub absent: usize,
    /// Records marked late today.
    pub late: usize,
    /// Number of active employees.
    pub total: usize,
}
