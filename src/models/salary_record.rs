//! Monthly salary record model.
//!
//! A [`SalaryRecord`] carries its own computed total. Every constructor and
//! mutation in this module recomputes `total_salary` so that
//! `total_salary == base_salary + overtime_pay + bonus - deductions` holds
//! whenever a record leaves it.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Payment status of a salary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryStatus {
    /// Not yet paid.
    Pending,
    /// Paid on `payment_date`.
    Paid,
}

/// Represents one month of pay for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Month name (e.g., "January").
    pub month: String,
    /// Calendar year.
    pub year: i32,
    /// Base salary for the month.
    pub base_salary: Decimal,
    /// Overtime pay for the month.
    pub overtime_pay: Decimal,
    /// Deductions for the month.
    pub deductions: Decimal,
    /// Bonus for the month.
    pub bonus: Decimal,
    /// Computed total: base + overtime + bonus - deductions.
    pub total_salary: Decimal,
    /// Payment status.
    pub status: SalaryStatus,
    /// Date of payment; required when paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// Computes a salary total rounded to cents.
///
/// Returns `None` when the total does not fit in a [`Decimal`].
///
/// # Example
///
/// ```
/// use hr_engine::models::compute_total_salary;
/// use rust_decimal::Decimal;
///
/// let total = compute_total_salary(
///     Decimal::new(500000, 2), // base 5000.00
///     Decimal::new(25000, 2),  // overtime 250.00
///     Decimal::new(10000, 2),  // bonus 100.00
///     Decimal::new(32050, 2),  // deductions 320.50
/// );
/// assert_eq!(total, Some(Decimal::new(502950, 2)));
///
/// assert_eq!(compute_total_salary(Decimal::MAX, Decimal::ONE, Decimal::ZERO, Decimal::ZERO), None);
/// ```
pub fn compute_total_salary(
    base_salary: Decimal,
    overtime_pay: Decimal,
    bonus: Decimal,
    deductions: Decimal,
) -> Option<Decimal> {
    let total = base_salary
        .checked_add(overtime_pay)?
        .checked_add(bonus)?
        .checked_sub(deductions)?;
    Some(total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

impl SalaryRecord {
    /// Recomputes `total_salary` from the components.
    ///
    /// Fails with [`EngineError::InvalidSalaryRecord`] when the total is out
    /// of range; `total_salary` is left unchanged in that case.
    pub fn recompute_total(&mut self) -> EngineResult<()> {
        self.total_salary = compute_total_salary(
            self.base_salary,
            self.overtime_pay,
            self.bonus,
            self.deductions,
        )
        .ok_or_else(|| EngineError::InvalidSalaryRecord {
            id: self.id.clone(),
            message: "salary total is out of range".to_string(),
        })?;
        Ok(())
    }

    /// Checks that a paid record carries a payment date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.status == SalaryStatus::Paid && self.payment_date.is_none() {
            return Err(EngineError::InvalidSalaryRecord {
                id: self.id.clone(),
                message: "paid records require a payment date".to_string(),
            });
        }
        Ok(())
    }

    /// Applies a partial update and recomputes the total.
    ///
    /// Moving a record back to pending clears its payment date. The update
    /// is validated on a copy first, so a rejected update leaves `self`
    /// untouched.
    pub fn apply(&mut self, update: SalaryUpdate) -> EngineResult<()> {
        let mut next = self.clone();

        if let Some(base_salary) = update.base_salary {
            next.base_salary = base_salary;
        }
        if let Some(overtime_pay) = update.overtime_pay {
            next.overtime_pay = overtime_pay;
        }
        if let Some(deductions) = update.deductions {
            next.deductions = deductions;
        }
        if let Some(bonus) = update.bonus {
            next.bonus = bonus;
        }
        if let Some(payment_date) = update.payment_date {
            next.payment_date = Some(payment_date);
        }
        if let Some(status) = update.status {
            next.status = status;
        }
        if next.status == SalaryStatus::Pending {
            next.payment_date = None;
        }

        next.recompute_total()?;
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Partial update for a salary record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryUpdate {
    /// New base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// New overtime pay.
    #[serde(default)]
    pub overtime_pay: Option<Decimal>,
    /// New deductions.
    #[serde(default)]
    pub deductions: Option<Decimal>,
    /// New bonus.
    #[serde(default)]
    pub bonus: Option<Decimal>,
    /// New status.
    #[serde(default)]
    pub status: Option<SalaryStatus>,
    /// New payment date.
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
}

/// Totals over a set of salary records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    /// Sum of totals for paid records.
    pub total_paid: Decimal,
    /// Sum of totals for pending records.
    pub total_pending: Decimal,
    /// Mean total across all records, zero when there are none.
    pub average_salary: Decimal,
    /// Number of paid records.
    pub paid_count: usize,
    /// Number of pending records.
    pub pending_count: usize,
}

impl SalarySummary {
    /// Summarizes the given records.
    ///
    /// Fails with [`EngineError::InvalidSalaryRecord`], naming the record that
    /// pushed a sum out of range, when the totals do not fit in a
    /// [`Decimal`].
    pub fn from_records(records: &[SalaryRecord]) -> EngineResult<Self> {
        let mut summary = SalarySummary::default();
        let mut grand_total = Decimal::ZERO;

        for record in records {
            let out_of_range = || EngineError::InvalidSalaryRecord {
                id: record.id.clone(),
                message: "salary totals are out of range".to_string(),
            };

            let bucket = match record.status {
                SalaryStatus::Paid => {
                    summary.paid_count += 1;
                    &mut summary.total_paid
                }
                SalaryStatus::Pending => {
                    summary.pending_count += 1;
                    &mut summary.total_pending
                }
            };
            *bucket = bucket
                .checked_add(record.total_salary)
                .ok_or_else(out_of_range)?;
            grand_total = grand_total
                .checked_add(record.total_salary)
                .ok_or_else(out_of_range)?;
        }

        if !records.is_empty() {
            let count = Decimal::from(records.len());
            summary.average_salary = (grand_total / count)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        }
        Ok(summary)
    }
}
