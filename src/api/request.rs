//! Request types for the HR engine API.
//!
//! Create and update bodies deserialize straight into the model input
//! types ([`NewEmployee`](crate::models::NewEmployee),
//! [`EmployeeUpdate`](crate::models::EmployeeUpdate), ...). This module
//! holds the shapes that exist only at the HTTP boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ExportOptions, ExportPeriod};

/// Query string for `GET /attendance`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceQuery {
    /// Only return records for this date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for `POST /exports/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The reporting period.
    pub period: ExportPeriod,
    /// Start of a custom period.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// End of a custom period.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Employees to include; empty or absent means everyone.
    #[serde(default)]
    pub employee_ids: Vec<String>,
    /// Detailed (one row per record) instead of summary output.
    #[serde(default)]
    pub include_details: bool,
}

impl From<ExportRequest> for ExportOptions {
    fn from(req: ExportRequest) -> Self {
        ExportOptions {
            period: req.period,
            start_date: req.start_date,
            end_date: req.end_date,
            employee_ids: (!req.employee_ids.is_empty()).then_some(req.employee_ids),
            include_details: req.include_details,
        }
    }
}
