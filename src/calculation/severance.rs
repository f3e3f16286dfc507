//! Severance pay (kıdem tazminatı) calculation.
//!
//! One month of dressed wage per full year of service, capped per year at
//! the period's severance ceiling, prorated linearly for the partial final
//! year. Withholding is stamp tax only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::FinancialPeriod;
use crate::error::EngineResult;
use crate::models::{PayComponent, TenureDuration};

use super::deductions::{DeductionOptions, build_component};

/// Days per month and per year used by the statutory proration convention.
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

/// The severance component plus its eligibility and ceiling flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceOutcome {
    /// The computed severance payment (zero when ineligible).
    pub component: PayComponent,
    /// Whether tenure reached the one-year threshold.
    pub eligible: bool,
    /// Whether the per-year base was capped at the period ceiling.
    pub ceiling_applied: bool,
}

/// Calculates the severance payment.
///
/// The per-year base is `min(dressed monthly wage, period ceiling)` where the
/// dressed wage is the gross salary plus regular monthly benefits. Tenure
/// below one year yields an ineligible, all-zero outcome (the ceiling flag
/// still reports whether the uncapped base would have exceeded the ceiling).
/// The partial final year accrues linearly as `(months × 30 + days) / 365`
/// of the per-year base, so an exact whole-year tenure accrues no fraction.
///
/// # Errors
///
/// Propagates errors from the deduction pipeline.
pub fn calculate_severance(
    tenure: &TenureDuration,
    gross_salary: Decimal,
    benefits_total: Decimal,
    period: &FinancialPeriod,
) -> EngineResult<SeveranceOutcome> {
    let dressed_monthly = gross_salary + benefits_total;
    let ceiling_applied = dressed_monthly > period.severance_ceiling;

    if !tenure.at_least_one_year() {
        return Ok(SeveranceOutcome {
            component: PayComponent::zero(),
            eligible: false,
            ceiling_applied,
        });
    }

    let per_year = dressed_monthly.min(period.severance_ceiling);

    let partial_days =
        Decimal::from(i64::from(tenure.months) * DAYS_PER_MONTH + i64::from(tenure.days));
    let gross = per_year * Decimal::from(tenure.years)
        + per_year * partial_days / Decimal::from(DAYS_PER_YEAR);

    let component = build_component(
        gross,
        Decimal::ZERO,
        period,
        &DeductionOptions::severance_pay(),
    )?;

    Ok(SeveranceOutcome {
        component,
        eligible: true,
        ceiling_applied,
    })
}
