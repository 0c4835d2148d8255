//! Export options for attendance reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reporting period for an attendance export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportPeriod {
    /// Today only.
    Daily,
    /// The last seven days up to and including today.
    Weekly,
    /// One calendar month back up to and including today.
    Monthly,
    /// Caller-supplied inclusive range.
    Custom,
}

/// Options controlling an attendance export.
///
/// `start_date` and `end_date` are only read for [`ExportPeriod::Custom`].
/// An absent or empty `employee_ids` list means every employee.
///
/// # Example
///
/// ```
/// use hr_engine::models::{ExportOptions, ExportPeriod};
///
/// let options: ExportOptions = serde_json::from_str(r#"{
///     "period": "custom",
///     "start_date": "2024-02-01",
///     "end_date": "2024-02-05",
///     "include_details": true
/// }"#).unwrap();
/// assert_eq!(options.period, ExportPeriod::Custom);
/// assert!(options.employee_ids.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// The reporting period.
    pub period: ExportPeriod,
    /// Inclusive start of a custom period.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of a custom period.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Restrict the export to these employees.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    /// Detailed (one row per record) when true, summary otherwise.
    #[serde(default)]
    pub include_details: bool,
}

impl ExportOptions {
    /// Creates options for a period with no employee restriction.
    pub fn new(period: ExportPeriod, include_details: bool) -> Self {
        Self {
            period,
            start_date: None,
            end_date: None,
            employee_ids: None,
            include_details,
        }
    }

    /// Creates options for an inclusive custom range.
    pub fn custom(start_date: NaiveDate, end_date: NaiveDate, include_details: bool) -> Self {
        Self {
            period: ExportPeriod::Custom,
            start_date: Some(start_date),
            end_date: Some(end_date),
            employee_ids: None,
            include_details,
        }
    }

    /// Restricts the export to the given employees.
    pub fn with_employees<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.employee_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the employee restriction, or `None` when every employee is
    /// included.
    pub fn employee_scope(&self) -> Option<&[String]> {
        self.employee_ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
    }
}
