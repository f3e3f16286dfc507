//! Orchestration of a full severance/notice calculation.
//!
//! Resolves the legal period once from the termination date, validates the
//! inputs, and computes the four payment components in chronological order,
//! threading the cumulative income-tax base through the taxed components.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PeriodRegistry;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CalculationWarning, SeveranceNoticeResult};

use super::deductions::{DeductionOptions, taxable_base};
use super::leave_payout::calculate_leave_payout;
use super::notice::{calculate_notice_pay, notice_weeks};
use super::prorated_salary::calculate_prorated_salary;
use super::severance::calculate_severance;
use super::tenure::duration_between;

/// Validates the calculation input fields.
fn validate(input: &CalculationInput) -> EngineResult<()> {
    if input.start_date > input.end_date {
        return Err(EngineError::InvalidRange {
            start: input.start_date,
            end: input.end_date,
            message: "start date must precede end date".to_string(),
        });
    }
    if input.start_date == input.end_date {
        return Err(EngineError::ZeroDuration {
            date: input.start_date,
        });
    }
    if input.gross_salary <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "gross_salary".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if input.benefits.total() < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "benefits".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if input.prior_cumulative_tax_base < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "prior_cumulative_tax_base".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if !(1..=31).contains(&input.salary_day_of_month) {
        return Err(EngineError::InvalidInput {
            field: "salary_day_of_month".to_string(),
            message: "must be between 1 and 31".to_string(),
        });
    }
    Ok(())
}

/// Runs a full severance/notice calculation.
///
/// The legal period is resolved once via `registry.lookup(end_date)` and
/// shared by all four components. Taxed components are computed in
/// chronological order — prorated final salary, then unused leave, then
/// notice pay — each advancing the cumulative income-tax base; severance is
/// income-tax free and does not advance it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] / [`EngineError::ZeroDuration`] for
/// bad date ranges and [`EngineError::InvalidInput`] for bad numeric fields;
/// propagates pipeline errors.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::calculate;
/// use entitlement_engine::config::PeriodRegistry;
/// use entitlement_engine::models::{Benefits, CalculationInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let registry = PeriodRegistry::builtin();
/// let input = CalculationInput {
///     start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     gross_salary: Decimal::from_str("45000").unwrap(),
///     benefits: Benefits::default(),
///     salary_day_of_month: 1,
///     unused_leave_days: 10,
///     prior_cumulative_tax_base: Decimal::ZERO,
/// };
///
/// let result = calculate(&input, &registry).unwrap();
/// assert!(result.severance_eligible);
/// assert_eq!(result.period_name, "2025-H2");
/// ```
pub fn calculate(
    input: &CalculationInput,
    registry: &PeriodRegistry,
) -> EngineResult<SeveranceNoticeResult> {
    validate(input)?;

    let period = registry.lookup(input.end_date);
    let tenure = duration_between(input.start_date, input.end_date)?;
    let benefits_total = input.benefits.total();

    debug!(
        period = %period.name,
        years = tenure.years,
        months = tenure.months,
        days = tenure.days,
        "starting severance/notice calculation"
    );

    let mut cumulative_base = input.prior_cumulative_tax_base;

    let final_salary = calculate_prorated_salary(
        input.end_date,
        input.salary_day_of_month,
        input.gross_salary,
        period,
        cumulative_base,
    )?;
    cumulative_base += taxable_base(
        final_salary.component.gross,
        period,
        &DeductionOptions::full_stack(),
    );

    let unused_leave = calculate_leave_payout(
        input.unused_leave_days,
        input.gross_salary,
        period,
        cumulative_base,
    )?;
    cumulative_base += taxable_base(unused_leave.gross, period, &DeductionOptions::full_stack());

    let notice = calculate_notice_pay(
        &tenure,
        input.gross_salary,
        benefits_total,
        period,
        cumulative_base,
    )?;

    let severance = calculate_severance(&tenure, input.gross_salary, benefits_total, period)?;

    let mut warnings = Vec::new();
    if !severance.eligible {
        warnings.push(CalculationWarning {
            code: "severance_ineligible".to_string(),
            message: "tenure is below one year; no severance accrues".to_string(),
            severity: "low".to_string(),
        });
    }
    if severance.ceiling_applied {
        warnings.push(CalculationWarning {
            code: "severance_ceiling_applied".to_string(),
            message: format!(
                "dressed wage exceeds the period severance ceiling {}",
                period.severance_ceiling
            ),
            severity: "low".to_string(),
        });
    }

    Ok(SeveranceNoticeResult {
        period_name: period.name.clone(),
        tenure,
        severance_eligible: severance.eligible,
        ceiling_applied: severance.ceiling_applied,
        notice_weeks: notice_weeks(&tenure),
        severance: severance.component,
        notice,
        unused_leave,
        final_salary: final_salary.component,
        warnings,
    })
}
