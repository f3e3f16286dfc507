//! Minimum-wage tax exemption.
//!
//! Since 2022 the income tax and stamp tax that would fall on one month's
//! minimum wage are exempt: the nominal tax on a payment is reduced by the
//! tax an equivalent minimum-wage amount would attract, so only the excess
//! over minimum-wage-equivalent taxation is actually withheld. This recurs
//! across notice pay, leave payout, and prorated salary, so it is a single
//! named function rather than inline arithmetic at each call site.

use rust_decimal::Decimal;

use crate::config::FinancialPeriod;
use crate::error::EngineResult;

use super::income_tax::compute_income_tax;

/// The monthly exemption amounts derived from a period's minimum wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageExemption {
    /// Income tax on the minimum wage's taxable base.
    pub income_tax: Decimal,
    /// Stamp tax on the gross minimum wage.
    pub stamp_tax: Decimal,
}

/// Computes the minimum-wage exemption for a period.
///
/// The income-tax side taxes the minimum wage net of the employee
/// social-security and unemployment shares, from a zero prior base; the
/// stamp side applies the stamp rate to the gross minimum wage.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::minimum_wage_exemption;
/// use entitlement_engine::config::PeriodRegistry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let registry = PeriodRegistry::builtin();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let exemption = minimum_wage_exemption(registry.lookup(date)).unwrap();
/// // 26,005.50 × 0.00759
/// assert_eq!(exemption.stamp_tax.round_dp(2), Decimal::from_str("197.38").unwrap());
/// ```
pub fn minimum_wage_exemption(period: &FinancialPeriod) -> EngineResult<WageExemption> {
    let rates = &period.deductions;
    let taxable = period.minimum_gross_wage
        * (Decimal::ONE - rates.social_security - rates.unemployment);

    Ok(WageExemption {
        income_tax: compute_income_tax(taxable, Decimal::ZERO, &period.tax_brackets)?,
        stamp_tax: period.minimum_gross_wage * rates.stamp_tax,
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
        let registry = PeriodRegistry::builtin();
        registry
            .lookup(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
            .clone()
    }

    #[test]
    fn test_stamp_exemption_is_stamp_rate_on_minimum_wage() {
        let exemption = minimum_wage_exemption(&period_2025_h2()).unwrap();
        // 26,005.50 × 0.00759 = 197.381745
        assert_eq!(exemption.stamp_tax.round_dp(2), dec("197.38"));
    }

    #[test]
    fn test_income_exemption_taxes_net_of_social_security() {
        let exemption = minimum_wage_exemption(&period_2025_h2()).unwrap();
        // 26,005.50 × 0.85 = 22,104.675, entirely in the 15% bracket.
        assert_eq!(exemption.income_tax, dec("22104.675") * dec("0.15"));
    }

    #[test]
    fn test_exemption_scales_with_period_minimum_wage() {
        let registry = PeriodRegistry::builtin();
        let early = minimum_wage_exemption(
            registry.lookup(NaiveDate::from_ymd_opt(2022, 2, 1).unwrap()),
        )
        .unwrap();
        let late = minimum_wage_exemption(&period_2025_h2()).unwrap();
        assert!(late.income_tax > early.income_tax);
        assert!(late.stamp_tax > early.stamp_tax);
    }
}
