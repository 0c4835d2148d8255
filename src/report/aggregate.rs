//! Report row construction.
//!
//! Converts filtered attendance records into export rows, either one
//! [`DetailedRow`] per record or one [`SummaryRow`] per employee, and lays
//! them out as a [`ReportTable`] for the spreadsheet writer.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, AttendanceStatus, Employee};

/// Placeholder for employee fields when the employee cannot be found.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Default worksheet name for attendance exports.
pub const ATTENDANCE_SHEET: &str = "Attendance";

/// A single typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(Decimal),
    /// Whole-number count.
    Count(u32),
}

/// A row type that can be laid out as spreadsheet cells.
pub trait ReportRow {
    /// Column titles, in cell order.
    const HEADERS: &'static [&'static str];

    /// The row's cells, in the same order as [`Self::HEADERS`].
    fn cells(&self) -> Vec<Cell>;
}

/// One attendance record with its employee details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedRow {
    /// Record date, `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: String,
    /// Employee identifier from the record.
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    /// Employee name, or "Unknown".
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    /// Department, or "Unknown".
    #[serde(rename = "Department")]
    pub department: String,
    /// Position, or "Unknown".
    #[serde(rename = "Position")]
    pub position: String,
    /// Attendance status label.
    #[serde(rename = "Status")]
    pub status: String,
    /// Check-in time.
    #[serde(rename = "Check In")]
    pub check_in: String,
    /// Check-out time.
    #[serde(rename = "Check Out")]
    pub check_out: String,
    /// Hours worked.
    #[serde(rename = "Hours Worked")]
    pub hours_worked: Decimal,
    /// Notes, empty when absent.
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl ReportRow for DetailedRow {
    const HEADERS: &'static [&'static str] = &[
        "Date",
        "Employee ID",
        "Employee Name",
        "Department",
        "Position",
        "Status",
        "Check In",
        "Check Out",
        "Hours Worked",
        "Notes",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.date.clone()),
            Cell::Text(self.employee_id.clone()),
            Cell::Text(self.employee_name.clone()),
            Cell::Text(self.department.clone()),
            Cell::Text(self.position.clone()),
            Cell::Text(self.status.clone()),
            Cell::Text(self.check_in.clone()),
            Cell::Text(self.check_out.clone()),
            Cell::Number(self.hours_worked),
            Cell::Text(self.notes.clone()),
        ]
    }
}

/// Per-employee attendance totals for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Employee identifier.
    #[serde(rename = "Employee ID")]
    pub employee_id: String,
    /// Employee name.
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    /// Department.
    #[serde(rename = "Department")]
    pub department: String,
    /// Position.
    #[serde(rename = "Position")]
    pub position: String,
    /// Number of attendance entries.
    #[serde(rename = "Total Days")]
    pub total_days: u32,
    /// Entries marked present.
    #[serde(rename = "Present")]
    pub present: u32,
    /// Entries marked absent.
    #[serde(rename = "Absent")]
    pub absent: u32,
    /// Entries marked late.
    #[serde(rename = "Late")]
    pub late: u32,
    /// Entries marked half-day.
    #[serde(rename = "Half Day")]
    pub half_day: u32,
    /// Sum of hours worked, two decimals.
    #[serde(rename = "Total Hours")]
    pub total_hours: String,
    /// Hours per entry, two decimals.
    #[serde(rename = "Average Hours/Day")]
    pub average_hours: String,
}

impl ReportRow for SummaryRow {
    const HEADERS: &'static [&'static str] = &[
        "Employee ID",
        "Employee Name",
        "Department",
        "Position",
        "Total Days",
        "Present",
        "Absent",
        "Late",
        "Half Day",
        "Total Hours",
        "Average Hours/Day",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.employee_id.clone()),
            Cell::Text(self.employee_name.clone()),
            Cell::Text(self.department.clone()),
            Cell::Text(self.position.clone()),
            Cell::Count(self.total_days),
            Cell::Count(self.present),
            Cell::Count(self.absent),
            Cell::Count(self.late),
            Cell::Count(self.half_day),
            Cell::Text(self.total_hours.clone()),
            Cell::Text(self.average_hours.clone()),
        ]
    }
}

/// A worksheet's worth of export data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Worksheet name.
    pub sheet_name: String,
    /// Column titles.
    pub headers: Vec<String>,
    /// Data rows; each has one cell per header.
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    /// Lays out typed rows under their headers.
    pub fn from_rows<R: ReportRow>(sheet_name: impl Into<String>, rows: &[R]) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(R::cells).collect(),
        }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Formats a value with exactly two decimals, rounding half away from zero.
///
/// # Example
///
/// ```
/// use hr_engine::report::format_two_places;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_two_places(Decimal::new(125, 1)), "12.50");
/// assert_eq!(format_two_places(Decimal::new(41665, 4)), "4.17");
/// assert_eq!(format_two_places(Decimal::ZERO), "0.00");
/// ```
pub fn format_two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

fn index_employees(employees: &[Employee]) -> HashMap<&str, &Employee> {
    employees.iter().map(|e| (e.id.as_str(), e)).collect()
}

/// Builds one detailed row per record, in input order.
///
/// Records whose employee is missing are kept, with name, department and
/// position set to [`UNKNOWN_EMPLOYEE`].
pub fn build_detailed_rows(records: &[Attendance], employees: &[Employee]) -> Vec<DetailedRow> {
    let by_id = index_employees(employees);

    records
        .iter()
        .map(|record| {
            let (employee_name, department, position) = match by_id.get(record.employee_id.as_str())
            {
                Some(e) => (e.name.clone(), e.department.clone(), e.position.clone()),
                None => (
                    UNKNOWN_EMPLOYEE.to_string(),
                    UNKNOWN_EMPLOYEE.to_string(),
                    UNKNOWN_EMPLOYEE.to_string(),
                ),
            };

            DetailedRow {
                date: record.date.format("%Y-%m-%d").to_string(),
                employee_id: record.employee_id.clone(),
                employee_name,
                department,
                position,
                status: record.status.to_string(),
                check_in: record.check_in.clone(),
                check_out: record.check_out.clone(),
                hours_worked: record.hours_worked,
                notes: record.notes.clone().unwrap_or_default(),
            }
        })
        .collect()
}

#[derive(Default)]
struct Tally {
    total_days: u32,
    present: u32,
    absent: u32,
    late: u32,
    half_day: u32,
    total_hours: Decimal,
}

/// Builds one summary row per employee, in order of first appearance.
///
/// Records whose employee is missing are dropped. Average hours divide by
/// the number of entries, treating zero entries as one. Fails when an
/// employee's hour total leaves the representable range.
pub fn build_summary_rows(
    records: &[Attendance],
    employees: &[Employee],
) -> EngineResult<Vec<SummaryRow>> {
    let by_id = index_employees(employees);
    let mut order: Vec<&Employee> = Vec::new();
    let mut tallies: HashMap<&str, Tally> = HashMap::new();

    for record in records {
        let Some(&employee) = by_id.get(record.employee_id.as_str()) else {
            continue;
        };

        let tally = tallies.entry(employee.id.as_str()).or_insert_with(|| {
            order.push(employee);
            Tally::default()
        });

        tally.total_days += 1;
        match record.status {
            AttendanceStatus::Present => tally.present += 1,
            AttendanceStatus::Absent => tally.absent += 1,
            AttendanceStatus::Late => tally.late += 1,
            AttendanceStatus::HalfDay => tally.half_day += 1,
        }
        tally.total_hours = tally
            .total_hours
            .checked_add(record.hours_worked)
            .ok_or_else(|| EngineError::InvalidAttendance {
                employee_id: record.employee_id.clone(),
                date: record.date.to_string(),
                message: "total hours are out of range".to_string(),
            })?;
    }

    Ok(order
        .into_iter()
        .filter_map(|employee| {
            let tally = tallies.remove(employee.id.as_str())?;
            let days = Decimal::from(tally.total_days.max(1));

            Some(SummaryRow {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                department: employee.department.clone(),
                position: employee.position.clone(),
                total_days: tally.total_days,
                present: tally.present,
                absent: tally.absent,
                late: tally.late,
                half_day: tally.half_day,
                total_hours: format_two_places(tally.total_hours),
                average_hours: format_two_places(tally.total_hours / days),
            })
        })
        .collect())
}

/// Builds the export table in detailed or summary shape.
pub fn build_report_table(
    records: &[Attendance],
    employees: &[Employee],
    include_details: bool,
    sheet_name: &str,
) -> EngineResult<ReportTable> {
    if include_details {
        Ok(ReportTable::from_rows(
            sheet_name,
            &build_detailed_rows(records, employees),
        ))
    } else {
        Ok(ReportTable::from_rows(
            sheet_name,
            &build_summary_rows(records, employees)?,
        ))
    }
}
