//! Progressive income-tax evaluation.
//!
//! Walks a bracket schedule and taxes only the slice of each bracket that the
//! new amount actually occupies, given a tax base already consumed earlier in
//! the same fiscal year. This makes a mid-year lump payment taxable at the
//! marginal rate following prior salary rather than from bracket zero.

use rust_decimal::Decimal;

use crate::config::TaxBracketSchedule;
use crate::error::{EngineError, EngineResult};

/// Computes the income tax on `taxable_amount` given a prior cumulative base.
///
/// For each bracket, the taxed slice is the overlap of
/// `(prior_cumulative_base, prior_cumulative_base + taxable_amount]` with the
/// bracket's `(lower, upper]` span; the bracket contributes exactly
/// `rate × slice width`. The result is continuous and non-decreasing in
/// `taxable_amount`.
///
/// A zero taxable amount yields zero tax. A prior base already beyond every
/// finite threshold taxes the whole amount at the top marginal rate.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when either amount is negative.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::compute_income_tax;
/// use entitlement_engine::config::PeriodRegistry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let registry = PeriodRegistry::builtin();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let schedule = &registry.lookup(date).tax_brackets;
///
/// let tax = compute_income_tax(
///     Decimal::from_str("1000").unwrap(),
///     Decimal::ZERO,
///     schedule,
/// )
/// .unwrap();
/// assert_eq!(tax, Decimal::from_str("150").unwrap());
/// ```
pub fn compute_income_tax(
    taxable_amount: Decimal,
    prior_cumulative_base: Decimal,
    schedule: &TaxBracketSchedule,
) -> EngineResult<Decimal> {
    if taxable_amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "taxable_amount".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if prior_cumulative_base < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "prior_cumulative_base".to_string(),
            message: "must not be negative".to_string(),
        });
    }

    let upper_total = prior_cumulative_base + taxable_amount;
    let mut tax = Decimal::ZERO;
    let mut bracket_lower = Decimal::ZERO;

    for bracket in &schedule.brackets {
        let slice_upper = match bracket.upper_limit {
            Some(limit) => upper_total.min(limit),
            None => upper_total,
        };
        let slice_lower = prior_cumulative_base.max(bracket_lower);

        if slice_upper > slice_lower {
            tax += (slice_upper - slice_lower) * bracket.rate;
        }

        match bracket.upper_limit {
            Some(limit) if upper_total > limit => bracket_lower = limit,
            _ => break,
        }
    }

    Ok(tax)
}
