//! Net-to-gross salary inversion.
//!
//! Inverts the forward deduction pipeline (social security, unemployment,
//! progressive income tax, stamp tax, minimum-wage exemption, optional AGI
//! credit) to recover the gross salary that produces a target net. The
//! inversion is a damped fixed-point iteration: each step rescales the guess
//! by the ratio of the target net to the net the guess actually produces, so
//! the step size shrinks with the remaining error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::FinancialPeriod;
use crate::error::{EngineError, EngineResult};
use crate::models::PayComponent;

use super::deductions::{DeductionOptions, build_component};

/// Maximum number of fixed-point iterations before giving up.
pub const MAX_ITERATIONS: u32 = 50;

/// Absolute tolerance on the reproduced net amount (0.01 currency unit).
pub fn convergence_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

/// Configuration for a net-to-gross solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Income-tax base already consumed earlier in the fiscal year.
    pub prior_cumulative_base: Decimal,
    /// Optional minimum-living-allowance (AGI) rate to credit.
    pub agi_rate: Option<Decimal>,
    /// Whether to credit the minimum-wage exemption (the post-2022 regime).
    pub minimum_wage_exemption: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prior_cumulative_base: Decimal::ZERO,
            agi_rate: None,
            minimum_wage_exemption: true,
        }
    }
}

/// The outcome of a net-to-gross solve.
///
/// Convergence is an explicit part of the contract: when the iteration cap
/// is reached the best estimate is returned with `converged = false`, and
/// callers must treat the result as an approximation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSolveResult {
    /// The recovered gross salary.
    pub gross: Decimal,
    /// The forward deduction breakdown at the recovered gross.
    pub breakdown: PayComponent,
    /// Whether the reproduced net is within tolerance of the target.
    pub converged: bool,
    /// Number of iterations performed.
    pub iterations: u32,
}

/// Solves for the gross salary whose net equals `target_net`.
///
/// Seeds the guess at `target_net × 1.5` and iterates the forward pipeline,
/// rescaling the guess by `target_net / produced net` each round, until the
/// produced net is within [`convergence_tolerance`] of the target or
/// [`MAX_ITERATIONS`] is reached. Hitting the cap is not a hard error; the
/// best estimate seen is returned with `converged = false`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `target_net` is not strictly
/// positive.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::{SolverConfig, solve_gross_from_net};
/// use entitlement_engine::config::PeriodRegistry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let registry = PeriodRegistry::builtin();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let target = Decimal::from_str("50000").unwrap();
///
/// let result = solve_gross_from_net(target, registry.lookup(date), &SolverConfig::default())
///     .unwrap();
/// assert!(result.converged);
/// assert!((result.breakdown.net - target).abs() <= Decimal::from_str("0.01").unwrap());
/// ```
pub fn solve_gross_from_net(
    target_net: Decimal,
    period: &FinancialPeriod,
    config: &SolverConfig,
) -> EngineResult<GrossSolveResult> {
    if target_net <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "target_net".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    let options = DeductionOptions {
        social_security: true,
        income_tax: true,
        stamp_tax: true,
        minimum_wage_exemption: config.minimum_wage_exemption,
        agi_rate: config.agi_rate,
    };

    let tolerance = convergence_tolerance();
    let mut guess = target_net * Decimal::new(15, 1);
    let mut best: Option<(Decimal, PayComponent, Decimal)> = None;
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        iterations += 1;

        let breakdown = build_component(guess, config.prior_cumulative_base, period, &options)?;
        let error = (target_net - breakdown.net).abs();
        trace!(iteration = iterations, gross = %guess, net = %breakdown.net, "solver step");

        if best.as_ref().is_none_or(|(_, _, best_error)| error < *best_error) {
            best = Some((guess, breakdown.clone(), error));
        }

        if error <= tolerance {
            return Ok(GrossSolveResult {
                gross: guess,
                breakdown,
                converged: true,
                iterations,
            });
        }

        let next = if breakdown.net > Decimal::ZERO {
            guess * target_net / breakdown.net
        } else {
            guess * Decimal::TWO
        };
        if next == guess {
            // Decimal fixed point below tolerance cannot improve further.
            break;
        }
        guess = next;
    }

    // Cap reached (or stalled): report the best estimate, flagged.
    let (gross, breakdown, _) = match best {
        Some(found) => found,
        // The loop always records at least one candidate.
        None => (
            guess,
            build_component(guess, config.prior_cumulative_base, period, &options)?,
            Decimal::ZERO,
        ),
    };

    Ok(GrossSolveResult {
        gross,
        breakdown,
        converged: false,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PeriodRegistry;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn period_2025_h2() -> FinancialPeriod {
        PeriodRegistry::builtin()
            .lookup(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
            .clone()
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let result = solve_gross_from_net(Decimal::ZERO, &period_2025_h2(), &SolverConfig::default());
        assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "target_net"));
    }

    #[test]
    fn test_negative_target_is_rejected() {
        let result =
            solve_gross_from_net(dec("-100"), &period_2025_h2(), &SolverConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_mid_range_salary() {
        let period = period_2025_h2();
        let target = dec("50000");
        let result = solve_gross_from_net(target, &period, &SolverConfig::default()).unwrap();

        assert!(result.converged, "did not converge in {} iterations", result.iterations);
        assert!((result.breakdown.net - target).abs() <= convergence_tolerance());
        assert!(result.gross > target);
    }

    #[test]
    fn test_round_trip_minimum_wage_level() {
        let period = period_2025_h2();
        // Net minimum wage: gross minus the SGK shares (taxes fully exempt).
        let target = period.minimum_gross_wage * dec("0.85");
        let result = solve_gross_from_net(target, &period, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert!((result.breakdown.net - target).abs() <= convergence_tolerance());
    }

    #[test]
    fn test_round_trip_high_salary_crosses_brackets() {
        let period = period_2025_h2();
        let target = dec("400000");
        let result = solve_gross_from_net(target, &period, &SolverConfig::default()).unwrap();

        assert!(result.converged);
        assert!((result.breakdown.net - target).abs() <= convergence_tolerance());
    }

    #[test]
    fn test_prior_base_raises_required_gross() {
        let period = period_2025_h2();
        let target = dec("60000");

        let fresh = solve_gross_from_net(target, &period, &SolverConfig::default()).unwrap();
        let config = SolverConfig {
            prior_cumulative_base: dec("300000"),
            ..SolverConfig::default()
        };
        let late_year = solve_gross_from_net(target, &period, &config).unwrap();

        assert!(late_year.gross > fresh.gross);
    }

    #[test]
    fn test_agi_credit_lowers_required_gross() {
        let period = period_2025_h2();
        let target = dec("60000");

        let without = solve_gross_from_net(target, &period, &SolverConfig::default()).unwrap();
        let config = SolverConfig {
            agi_rate: Some(dec("0.60")),
            ..SolverConfig::default()
        };
        let with_agi = solve_gross_from_net(target, &period, &config).unwrap();

        assert!(with_agi.gross < without.gross);
    }

    #[test]
    fn test_iterations_reported_and_bounded() {
        let period = period_2025_h2();
        let result =
            solve_gross_from_net(dec("75000"), &period, &SolverConfig::default()).unwrap();
        assert!(result.iterations >= 1);
        assert!(result.iterations <= MAX_ITERATIONS);
    }
}
