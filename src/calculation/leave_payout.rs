//! Unused annual-leave payout calculation.
//!
//! Each unused leave day pays out one bare daily wage (no benefits), with
//! the full deduction stack: social security, unemployment, income tax and
//! stamp tax, the latter two reduced by the minimum-wage exemption.

use rust_decimal::Decimal;

use crate::config::FinancialPeriod;
use crate::error::EngineResult;
use crate::models::PayComponent;

use super::deductions::{DeductionOptions, build_component};

/// Calculates the unused-leave payout.
///
/// Zero unused days yield an all-zero component. The income tax honours the
/// prior cumulative tax base.
///
/// # Errors
///
/// Propagates errors from the deduction pipeline.
pub fn calculate_leave_payout(
    unused_leave_days: u32,
    gross_salary: Decimal,
    period: &FinancialPeriod,
    prior_cumulative_base: Decimal,
) -> EngineResult<PayComponent> {
    if unused_leave_days == 0 {
        return Ok(PayComponent::zero());
    }

    let daily_wage = gross_salary / Decimal::from(30);
    let gross = daily_wage * Decimal::from(unused_leave_days);

    build_component(
        gross,
        prior_cumulative_base,
        period,
        &DeductionOptions::full_stack(),
    )
}
