//! HTTP API module for the HR engine.
//!
//! This module provides the REST API endpoints for managing employees,
//! attendance and salary records, for per-department analytics, and for
//! running attendance exports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceQuery, ExportRequest};
pub use response::{ApiError, ApiErrorResponse, DepartmentStatsResponse, SalaryRecordsResponse};
pub use state::AppState;
