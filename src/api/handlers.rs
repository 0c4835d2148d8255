//! HTTP request handlers for the HR engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    EmployeeFilter, EmployeeUpdate, ExportOptions, NewAttendance, NewEmployee, SalaryUpdate,
};
use crate::report::{build_attendance_report, write_report};

use super::request::{AttendanceQuery, ExportRequest};
use super::response::{
    ApiError, ApiErrorResponse, DepartmentStatsResponse, SalaryRecordsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler).post(add_employee_handler))
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/employees/:id/attendance", get(employee_attendance_handler))
        .route(
            "/employees/:id/salary-records",
            get(employee_salary_records_handler),
        )
        .route(
            "/attendance",
            get(list_attendance_handler).post(record_attendance_handler),
        )
        .route("/attendance/today", get(today_attendance_handler))
        .route("/salary-records", get(list_salary_records_handler))
        .route("/salary-records/:id", put(update_salary_record_handler))
        .route("/departments", get(list_departments_handler))
        .route("/departments/stats", get(department_stats_handler))
        .route("/exports/attendance", post(export_attendance_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn respond<T: Serialize>(
    correlation_id: Uuid,
    status: StatusCode,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(body) => json_response(status, body),
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string error"
    );
    json_response(StatusCode::BAD_REQUEST, ApiError::invalid_query(body_text))
}

/// Handler for GET /employees.
///
/// Query parameters (`name`, `email`, `position`, `department`, `status`)
/// narrow the list; with none, every employee is returned.
async fn list_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<EmployeeFilter>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let filter = match query {
        Ok(Query(filter)) => filter,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let employees = state.store().filter_employees(&filter);
    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Listed employees"
    );
    json_response(StatusCode::OK, employees)
}

/// Handler for POST /employees.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add employee request");

    let new = match payload {
        Ok(Json(new)) => new,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state.store().add_employee(new).await;
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, StatusCode::OK, state.store().get_employee(&id))
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing update employee request");

    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state.store().update_employee(&id, update).await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for DELETE /employees/:id.
///
/// Responds with the removed employee.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing delete employee request");

    let result = state.store().delete_employee(&id).await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /employees/:id/attendance.
async fn employee_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        StatusCode::OK,
        state.store().employee_attendance(&id),
    )
}

/// Handler for GET /employees/:id/salary-records.
async fn employee_salary_records_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        StatusCode::OK,
        state.store().employee_salary_records(&id),
    )
}

/// Handler for GET /attendance.
async fn list_attendance_handler(
    State(state): State<AppState>,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let records = match query.date {
        Some(date) => state.store().attendance_by_date(date),
        None => state.store().attendance(),
    };
    json_response(StatusCode::OK, records)
}

/// Handler for POST /attendance.
async fn record_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewAttendance>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record attendance request");

    let new = match payload {
        Ok(Json(new)) => new,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state.store().record_attendance(new).await;
    respond(correlation_id, StatusCode::CREATED, result)
}

/// Handler for GET /attendance/today.
async fn today_attendance_handler(State(state): State<AppState>) -> Response {
    let today = state.clock().today();
    json_response(StatusCode::OK, state.store().today_attendance(today))
}

/// Handler for GET /salary-records.
async fn list_salary_records_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let store = state.store();
    let result = store.salary_summary().map(|summary| SalaryRecordsResponse {
        records: store.salary_records(),
        summary,
    });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for GET /departments.
async fn list_departments_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.store().departments())
}

/// Handler for GET /departments/stats.
///
/// Reports today's attendance and the last seven days of hours per
/// department.
async fn department_stats_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.clock().today();
    let store = state.store();
    let result = store
        .department_hours(today)
        .map(|working_hours| DepartmentStatsResponse {
            date: today,
            attendance: store.department_stats(today),
            working_hours,
        });
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for PUT /salary-records/:id.
async fn update_salary_record_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SalaryUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, salary_record_id = %id, "Processing salary update request");

    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = state.store().update_salary_record(&id, update).await;
    respond(correlation_id, StatusCode::OK, result)
}

/// Handler for POST /exports/attendance.
///
/// Snapshots the store, then filters, aggregates and writes the report on
/// the blocking pool.
async fn export_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance export request");

    let options: ExportOptions = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let today = state.clock().today();
    let employees = state.store().employees();
    let attendance = state.store().attendance();
    let sheet_name = state.config().export().sheet_name.clone();
    let writer = state.writer();

    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || {
        let report =
            build_attendance_report(&employees, &attendance, &options, today, &sheet_name)?;
        write_report(&report, &*writer)
    })
    .await
    .unwrap_or_else(|err| {
        Err(EngineError::ExportFailed {
            filename: String::new(),
            message: err.to_string(),
        })
    });

    if let Ok(outcome) = &result {
        info!(
            correlation_id = %correlation_id,
            filename = %outcome.filename,
            rows = outcome.row_count,
            duration_us = start_time.elapsed().as_micros(),
            "Export completed successfully"
        );
    }
    respond(correlation_id, StatusCode::OK, result)
}
