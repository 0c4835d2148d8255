//! Attendance record filtering.
//!
//! Selects the attendance records that belong to an export: those dated
//! inside the resolved reporting period and, when a non-empty employee list
//! is given, belonging to one of those employees.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Attendance, ExportOptions};

use super::period::resolve_range;

/// Filters attendance records for an export.
///
/// The result keeps the relative order of the input and never aliases it.
/// Filtering an already filtered sequence with the same options and
/// reference date returns the same sequence.
///
/// # Arguments
///
/// * `records` - The full attendance collection (not modified)
/// * `options` - Export options; only the period, custom dates and
///   employee list are read
/// * `today` - The reference date for daily, weekly and monthly periods
///
/// # Errors
///
/// Returns [`EngineError::InvalidExportOptions`](crate::error::EngineError::InvalidExportOptions)
/// for a custom period without both dates. A custom range whose start is
/// after its end is not an error and yields an empty result.
///
/// # Example
///
/// ```
/// use hr_engine::models::{Attendance, AttendanceStatus, ExportOptions};
/// use hr_engine::report::filter_attendance;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = |id: &str, day: u32| Attendance {
///     id: id.to_string(),
///     employee_id: "EMP-1001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
///     check_in: "09:00".to_string(),
///     check_out: "17:00".to_string(),
///     status: AttendanceStatus::Present,
///     hours_worked: Decimal::new(8, 0),
///     notes: None,
/// };
/// let records = vec![record("a", 9), record("b", 10), record("c", 12), record("d", 13)];
///
/// let options = ExportOptions::custom(
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
///     true,
/// );
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let filtered = filter_attendance(&records, &options, today).unwrap();
///
/// let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, vec!["b", "c"]);
/// ```
pub fn filter_attendance(
    records: &[Attendance],
    options: &ExportOptions,
    today: NaiveDate,
) -> EngineResult<Vec<Attendance>> {
    let range = resolve_range(options, today)?;
    let scope: Option<HashSet<&str>> = options
        .employee_scope()
        .map(|ids| ids.iter().map(String::as_str).collect());

    let filtered: Vec<Attendance> = records
        .iter()
        .filter(|record| range.contains(record.date))
        .filter(|record| {
            scope
                .as_ref()
                .is_none_or(|ids| ids.contains(record.employee_id.as_str()))
        })
        .cloned()
        .collect();

    debug!(
        period = ?options.period,
        start = %range.start,
        end = %range.end,
        input = records.len(),
        kept = filtered.len(),
        "Filtered attendance records"
    );

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{AttendanceStatus, ExportPeriod};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, employee_id: &str, date: NaiveDate) -> Attendance {
        Attendance {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            date,
            check_in: "09:00".to_string(),
            check_out: "17:00".to_string(),
            status: AttendanceStatus::Present,
            hours_worked: Decimal::new(8, 0),
            notes: None,
        }
    }

    fn ids(records: &[Attendance]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_daily_keeps_only_today_in_order() {
        let today = date(2024, 5, 20);
        let yesterday = date(2024, 5, 19);
        let records = vec![
            record("t1", "EMP-1001", today),
            record("y1", "EMP-1001", yesterday),
            record("t2", "EMP-1002", today),
            record("y2", "EMP-1002", yesterday),
            record("t3", "EMP-1003", today),
        ];

        let filtered =
            filter_attendance(&records, &ExportOptions::new(ExportPeriod::Daily, true), today)
                .unwrap();
        assert_eq!(ids(&filtered), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_weekly_bounds_are_inclusive() {
        let today = date(2024, 5, 20);
        let records = vec![
            record("too_old", "EMP-1001", date(2024, 5, 12)),
            record("first", "EMP-1001", date(2024, 5, 13)),
            record("middle", "EMP-1001", date(2024, 5, 16)),
            record("today", "EMP-1001", today),
            record("future", "EMP-1001", date(2024, 5, 21)),
        ];

        let filtered =
            filter_attendance(&records, &ExportOptions::new(ExportPeriod::Weekly, true), today)
                .unwrap();
        assert_eq!(ids(&filtered), vec!["first", "middle", "today"]);
    }

    #[test]
    fn test_monthly_uses_clamped_month_start() {
        let today = date(2024, 3, 31);
        let records = vec![
            record("feb28", "EMP-1001", date(2024, 2, 28)),
            record("feb29", "EMP-1001", date(2024, 2, 29)),
            record("mar31", "EMP-1001", today),
        ];

        let filtered =
            filter_attendance(&records, &ExportOptions::new(ExportPeriod::Monthly, true), today)
                .unwrap();
        assert_eq!(ids(&filtered), vec!["feb29", "mar31"]);
    }

    #[test]
    fn test_custom_inclusive_bounds() {
        let records = vec![
            record("d09", "EMP-1001", date(2024, 1, 9)),
            record("d10", "EMP-1001", date(2024, 1, 10)),
            record("d12", "EMP-1001", date(2024, 1, 12)),
            record("d13", "EMP-1001", date(2024, 1, 13)),
        ];
        let options = ExportOptions::custom(date(2024, 1, 10), date(2024, 1, 12), true);

        let filtered = filter_attendance(&records, &options, date(2024, 6, 1)).unwrap();
        assert_eq!(ids(&filtered), vec!["d10", "d12"]);
    }

    #[test]
    fn test_custom_inverted_range_is_empty() {
        let records = vec![record("d10", "EMP-1001", date(2024, 1, 10))];
        let options = ExportOptions::custom(date(2024, 1, 12), date(2024, 1, 9), true);

        let filtered = filter_attendance(&records, &options, date(2024, 6, 1)).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_custom_missing_dates_fails_fast() {
        let records = vec![record("d10", "EMP-1001", date(2024, 1, 10))];
        let options = ExportOptions::new(ExportPeriod::Custom, true);

        let result = filter_attendance(&records, &options, date(2024, 6, 1));
        assert!(matches!(
            result,
            Err(EngineError::InvalidExportOptions { .. })
        ));
    }

    #[test]
    fn test_employee_scope_restricts_records() {
        let today = date(2024, 5, 20);
        let records = vec![
            record("a", "EMP-1001", today),
            record("b", "EMP-1002", today),
            record("c", "EMP-1003", today),
        ];
        let options =
            ExportOptions::new(ExportPeriod::Daily, true).with_employees(["EMP-1003", "EMP-1001"]);

        let filtered = filter_attendance(&records, &options, today).unwrap();
        assert_eq!(ids(&filtered), vec!["a", "c"]);
    }

    #[test]
    fn test_empty_employee_scope_keeps_everyone() {
        let today = date(2024, 5, 20);
        let records = vec![record("a", "EMP-1001", today), record("b", "EMP-1002", today)];
        let options =
            ExportOptions::new(ExportPeriod::Daily, true).with_employees(Vec::<String>::new());

        let filtered = filter_attendance(&records, &options, today).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let today = date(2024, 5, 20);
        let records = vec![
            record("a", "EMP-1001", date(2024, 5, 10)),
            record("b", "EMP-1002", date(2024, 5, 15)),
            record("c", "EMP-1001", today),
        ];
        let options = ExportOptions::new(ExportPeriod::Weekly, false).with_employees(["EMP-1001"]);

        let once = filter_attendance(&records, &options, today).unwrap();
        let twice = filter_attendance(&once, &options, today).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_modified() {
        let today = date(2024, 5, 20);
        let records = vec![record("a", "EMP-1001", date(2024, 5, 10))];
        let snapshot = records.clone();

        let _ = filter_attendance(&records, &ExportOptions::new(ExportPeriod::Daily, true), today)
            .unwrap();
        assert_eq!(records, snapshot);
    }
}
