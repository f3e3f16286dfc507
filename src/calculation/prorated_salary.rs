//! Prorated final-month salary calculation.
//!
//! Pays the days worked since the last salary anchor day through the
//! termination date, at one thirtieth of the gross salary per day, with the
//! full deduction stack.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FinancialPeriod;
use crate::error::EngineResult;
use crate::models::PayComponent;

use super::deductions::{DeductionOptions, build_component};

/// The prorated final-month salary with its day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProratedSalaryResult {
    /// The computed payment component.
    pub component: PayComponent,
    /// Days between the salary anchor and the termination date (capped at 30).
    pub days_worked: i64,
}

/// Returns the most recent salary anchor on or before `end`.
///
/// The anchor is the `salary_day_of_month` of `end`'s month, clamped to the
/// month's length (day 31 in a 30-day month anchors on the 30th); when that
/// falls after `end`, the anchor steps back one month.
fn last_salary_anchor(end: NaiveDate, salary_day_of_month: u32) -> NaiveDate {
    let clamped = |year: i32, month: u32| -> NaiveDate {
        let mut day = salary_day_of_month;
        loop {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return date;
            }
            day -= 1;
        }
    };

    let candidate = clamped(end.year(), end.month());
    if candidate <= end {
        candidate
    } else {
        // Step back a month, re-clamping against that month's length.
        let previous = candidate
            .checked_sub_months(Months::new(1))
            .unwrap_or(candidate);
        clamped(previous.year(), previous.month())
    }
}

/// Calculates the prorated salary for the final, partial month.
///
/// `salary_day_of_month` must already be validated to 1-31 by the caller.
/// An anchor equal to the termination date yields an all-zero component.
///
/// # Errors
///
/// Propagates errors from the deduction pipeline.
pub fn calculate_prorated_salary(
    end_date: NaiveDate,
    salary_day_of_month: u32,
    gross_salary: Decimal,
    period: &FinancialPeriod,
    prior_cumulative_base: Decimal,
) -> EngineResult<ProratedSalaryResult> {
    let anchor = last_salary_anchor(end_date, salary_day_of_month);
    let days_worked = (end_date - anchor).num_days().min(30);

    if days_worked == 0 {
        return Ok(ProratedSalaryResult {
            component: PayComponent::zero(),
            days_worked: 0,
        });
    }

    let gross = gross_salary / Decimal::from(30) * Decimal::from(days_worked);
    let component = build_component(
        gross,
        prior_cumulative_base,
        period,
        &DeductionOptions::full_stack(),
    )?;

    Ok(ProratedSalaryResult {
        component,
        days_worked,
    })
}
