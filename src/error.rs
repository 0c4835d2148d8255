//! Error types for the HR engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the store, the report pipeline and the
//! configuration loader can produce.

use thiserror::Error;

/// The main error type for the HR engine.
///
/// All fallible operations return this error type. Lookups of unknown
/// identifiers always surface as one of the `*NotFound` variants; no
/// operation signals failure through a sentinel value.
///
/// # Example
///
/// ```
/// use hr_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "EMP-1042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP-1042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A seed data file could not be read or parsed.
    #[error("Failed to load seed data '{path}': {message}")]
    SeedLoadError {
        /// The path of the seed file.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// No salary record exists with the given identifier.
    #[error("Salary record not found: {id}")]
    SalaryRecordNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An attendance record violated an attendance invariant.
    #[error("Invalid attendance record for employee '{employee_id}' on {date}: {message}")]
    InvalidAttendance {
        /// The employee the record refers to.
        employee_id: String,
        /// The date of the record.
        date: String,
        /// A description of the violation.
        message: String,
    },

    /// A salary record update would leave the record inconsistent.
    #[error("Invalid salary record '{id}': {message}")]
    InvalidSalaryRecord {
        /// The salary record identifier.
        id: String,
        /// A description of the violation.
        message: String,
    },

    /// Export options were incomplete or contradictory.
    #[error("Invalid export options: {message}")]
    InvalidExportOptions {
        /// A description of the problem.
        message: String,
    },

    /// The spreadsheet serializer failed to produce the export file.
    #[error("Failed to export '{filename}': {message}")]
    ExportFailed {
        /// The file that was being written.
        filename: String,
        /// The serializer's error message.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/hr-engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/hr-engine.yaml"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "EMP-1001".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP-1001");
    }

    #[test]
    fn test_salary_record_not_found_displays_id() {
        let error = EngineError::SalaryRecordNotFound {
            id: "sal_01".to_string(),
        };
        assert_eq!(error.to_string(), "Salary record not found: sal_01");
    }

    #[test]
    fn test_invalid_attendance_displays_context() {
        let error = EngineError::InvalidAttendance {
            employee_id: "EMP-1001".to_string(),
            date: "2024-01-10".to_string(),
            message: "absent records must have zero hours worked".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid attendance record for employee 'EMP-1001' on 2024-01-10: \
             absent records must have zero hours worked"
        );
    }

    #[test]
    fn test_invalid_export_options_displays_message() {
        let error = EngineError::InvalidExportOptions {
            message: "custom period requires start_date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid export options: custom period requires start_date"
        );
    }

    #[test]
    fn test_export_failed_displays_filename_and_message() {
        let error = EngineError::ExportFailed {
            filename: "Attendance_Summary_2024-01-10.xlsx".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to export 'Attendance_Summary_2024-01-10.xlsx': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
