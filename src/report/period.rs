//! Reporting period resolution and export file naming.
//!
//! This module turns an [`ExportPeriod`] plus a reference date into the
//! inclusive [`DateRange`] it covers, and derives the period label and the
//! file name embedded in an export.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ExportOptions, ExportPeriod};

/// Number of days covered by a weekly report, not counting today.
pub const WEEKLY_LOOKBACK_DAYS: u64 = 7;

/// File extension of exported reports.
pub const EXPORT_EXTENSION: &str = "xlsx";

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use hr_engine::report::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
/// };
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range (inclusive).
    pub start: NaiveDate,
    /// Last date in the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Checks if a date falls within the range, inclusive of both ends.
    ///
    /// A range whose start is after its end contains no dates.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Returns the date seven days before `today`.
pub fn week_before(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_days(Days::new(WEEKLY_LOOKBACK_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the date one calendar month before `today`.
///
/// The month number is decremented and the day is clamped to the length of
/// the target month, so the result never rolls forward into the current
/// month.
///
/// # Example
///
/// ```
/// use hr_engine::report::month_before;
/// use chrono::NaiveDate;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// assert_eq!(month_before(date(2024, 3, 31)), date(2024, 2, 29)); // leap year
/// assert_eq!(month_before(date(2023, 3, 31)), date(2023, 2, 28));
/// assert_eq!(month_before(date(2024, 1, 15)), date(2023, 12, 15));
/// ```
pub fn month_before(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN)
}

/// Resolves the inclusive date range an export covers.
///
/// # Errors
///
/// Returns [`EngineError::InvalidExportOptions`] when the period is
/// [`ExportPeriod::Custom`] and either bound is missing.
pub fn resolve_range(options: &ExportOptions, today: NaiveDate) -> EngineResult<DateRange> {
    match options.period {
        ExportPeriod::Daily => Ok(DateRange {
            start: today,
            end: today,
        }),
        ExportPeriod::Weekly => Ok(DateRange {
            start: week_before(today),
            end: today,
        }),
        ExportPeriod::Monthly => Ok(DateRange {
            start: month_before(today),
            end: today,
        }),
        ExportPeriod::Custom => {
            let (start, end) = custom_bounds(options)?;
            Ok(DateRange { start, end })
        }
    }
}

fn custom_bounds(options: &ExportOptions) -> EngineResult<(NaiveDate, NaiveDate)> {
    match (options.start_date, options.end_date) {
        (Some(start), Some(end)) => Ok((start, end)),
        (None, Some(_)) => Err(EngineError::InvalidExportOptions {
            message: "custom period requires start_date".to_string(),
        }),
        (Some(_), None) => Err(EngineError::InvalidExportOptions {
            message: "custom period requires end_date".to_string(),
        }),
        (None, None) => Err(EngineError::InvalidExportOptions {
            message: "custom period requires start_date and end_date".to_string(),
        }),
    }
}

/// Builds the human-readable period label embedded in export file names.
///
/// - daily: `YYYY-MM-DD`
/// - weekly: `{7 days ago}_to_{today}` as `YYYY-MM-DD`
/// - monthly: `{1 month ago}_to_{today}` as `YYYY-MM`
/// - custom: `{start}_to_{end}` as `YYYY-MM-DD`
pub fn period_label(options: &ExportOptions, today: NaiveDate) -> EngineResult<String> {
    const DAY: &str = "%Y-%m-%d";
    const MONTH: &str = "%Y-%m";

    let label = match options.period {
        ExportPeriod::Daily => today.format(DAY).to_string(),
        ExportPeriod::Weekly => format!(
            "{}_to_{}",
            week_before(today).format(DAY),
            today.format(DAY)
        ),
        ExportPeriod::Monthly => format!(
            "{}_to_{}",
            month_before(today).format(MONTH),
            today.format(MONTH)
        ),
        ExportPeriod::Custom => {
            let (start, end) = custom_bounds(options)?;
            format!("{}_to_{}", start.format(DAY), end.format(DAY))
        }
    };
    Ok(label)
}

/// Builds the export file name: `Attendance_{Detailed|Summary}_{label}.xlsx`.
///
/// # Example
///
/// ```
/// use hr_engine::models::ExportOptions;
/// use hr_engine::report::export_filename;
/// use chrono::NaiveDate;
///
/// let options = ExportOptions::custom(
///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
///     true,
/// );
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(
///     export_filename(&options, today).unwrap(),
///     "Attendance_Detailed_2024-02-01_to_2024-02-05.xlsx"
/// );
/// ```
pub fn export_filename(options: &ExportOptions, today: NaiveDate) -> EngineResult<String> {
    let kind = if options.include_details {
        "Detailed"
    } else {
        "Summary"
    };
    let label = period_label(options, today)?;
    Ok(format!("Attendance_{kind}_{label}.{EXPORT_EXTENSION}"))
}
