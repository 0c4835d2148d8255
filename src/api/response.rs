//! Response types for the HR engine API.
//!
//! This module defines the error response structures, the mapping from
//! [`EngineError`] to HTTP status codes, and composite response bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DepartmentHours, DepartmentStats, SalaryRecord, SalarySummary};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::SeedLoadError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("SEED_ERROR", "Seed data error", message),
            ),
            EngineError::EmployeeNotFound { id } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    message,
                    format!("No employee exists with id '{}'", id),
                ),
            ),
            EngineError::SalaryRecordNotFound { id } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "SALARY_RECORD_NOT_FOUND",
                    message,
                    format!("No salary record exists with id '{}'", id),
                ),
            ),
            EngineError::InvalidEmployee { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
            EngineError::InvalidAttendance { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_ATTENDANCE",
                    message,
                    "The attendance data contains invalid information",
                ),
            ),
            EngineError::InvalidSalaryRecord { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_SALARY_RECORD",
                    message,
                    "The salary record update would leave the record inconsistent",
                ),
            ),
            EngineError::InvalidExportOptions { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_EXPORT_OPTIONS", message),
            ),
            EngineError::ExportFailed { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("EXPORT_FAILED", "Export failed", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Response body for `GET /salary-records`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecordsResponse {
    /// Every salary record.
    pub records: Vec<SalaryRecord>,
    /// Totals over `records`.
    pub summary: SalarySummary,
}

/// Response body for `GET /departments/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentStatsResponse {
    /// The reference day.
    pub date: NaiveDate,
    /// Attendance on `date`, one entry per department.
    pub attendance: Vec<DepartmentStats>,
    /// Hours over the seven days ending on `date`, one entry per department.
    pub working_hours: Vec<DepartmentHours>,
}
