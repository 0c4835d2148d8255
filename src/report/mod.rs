//! Attendance reporting and export.
//!
//! This module contains the export pipeline: period resolution, record
//! filtering, row aggregation in detailed or summary shape, export file
//! naming, and spreadsheet serialization.

mod aggregate;
mod clock;
mod filter;
mod period;
mod writer;

pub use aggregate::{
    ATTENDANCE_SHEET, Cell, DetailedRow, ReportRow, ReportTable, SummaryRow, UNKNOWN_EMPLOYEE,
    build_detailed_rows, build_report_table, build_summary_rows, format_two_places,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::filter_attendance;
pub use period::{
    DateRange, EXPORT_EXTENSION, WEEKLY_LOOKBACK_DAYS, export_filename, month_before,
    period_label, resolve_range, week_before,
};
pub use writer::{SpreadsheetWriter, XlsxFileWriter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{Attendance, Employee, ExportOptions};

/// An export that is ready to be written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// The generated file name.
    pub filename: String,
    /// The rows to write.
    pub table: ReportTable,
}

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOutcome {
    /// True when the file was written.
    pub success: bool,
    /// The generated file name.
    pub filename: String,
    /// Number of data rows written.
    pub row_count: usize,
}

/// Builds an attendance report without writing it.
///
/// Options are validated before any filtering, so a custom period without
/// both dates fails immediately. The employee and attendance collections
/// are only read.
pub fn build_attendance_report(
    employees: &[Employee],
    attendance: &[Attendance],
    options: &ExportOptions,
    today: NaiveDate,
    sheet_name: &str,
) -> EngineResult<AttendanceReport> {
    let filename = export_filename(options, today)?;
    let filtered = filter_attendance(attendance, options, today)?;
    let table = build_report_table(&filtered, employees, options.include_details, sheet_name)?;

    Ok(AttendanceReport { filename, table })
}

/// Runs the full attendance export: filter, aggregate and write.
///
/// Serializer failures propagate unchanged; nothing is retried.
///
/// # Example
///
/// ```no_run
/// use hr_engine::models::{ExportOptions, ExportPeriod};
/// use hr_engine::report::{XlsxFileWriter, export_attendance};
/// use chrono::NaiveDate;
///
/// let writer = XlsxFileWriter::new("./exports");
/// let options = ExportOptions::new(ExportPeriod::Weekly, false);
/// let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
///
/// let outcome = export_attendance(&[], &[], &options, today, &writer)?;
/// assert_eq!(outcome.filename, "Attendance_Summary_2024-05-13_to_2024-05-20.xlsx");
/// # Ok::<(), hr_engine::error::EngineError>(())
/// ```
pub fn export_attendance(
    employees: &[Employee],
    attendance: &[Attendance],
    options: &ExportOptions,
    today: NaiveDate,
    writer: &dyn SpreadsheetWriter,
) -> EngineResult<ExportOutcome> {
    let report = build_attendance_report(employees, attendance, options, today, ATTENDANCE_SHEET)?;
    write_report(&report, writer)
}

/// Writes a built report and reports the outcome.
pub fn write_report(
    report: &AttendanceReport,
    writer: &dyn SpreadsheetWriter,
) -> EngineResult<ExportOutcome> {
    match writer.write(&report.filename, &report.table) {
        Ok(path) => {
            info!(
                filename = %report.filename,
                path = %path.display(),
                rows = report.table.row_count(),
                "Successfully exported attendance data"
            );
            Ok(ExportOutcome {
                success: true,
                filename: report.filename.clone(),
                row_count: report.table.row_count(),
            })
        }
        Err(err) => {
            warn!(
                filename = %report.filename,
                error = %err,
                "Failed to export attendance data"
            );
            Err(err)
        }
    }
}
