//! Notice pay (ihbar tazminatı) calculation.
//!
//! The statutory notice period is tiered by tenure (2 to 8 weeks); notice
//! pay in lieu is the dressed weekly wage times the tier. Withholding is
//! income tax and stamp tax, both reduced by the minimum-wage exemption; no
//! social-security shares are due.

use rust_decimal::Decimal;

use crate::config::FinancialPeriod;
use crate::error::EngineResult;
use crate::models::{PayComponent, TenureDuration};

use super::deductions::{DeductionOptions, build_component};

/// Returns the statutory notice period in weeks for the given tenure.
///
/// Tiers: under 6 months → 2 weeks; under 18 months → 4 weeks; under
/// 36 months → 6 weeks; 36 months or more → 8 weeks. Tiering uses whole
/// calendar months; leftover days do not promote a tier.
pub fn notice_weeks(tenure: &TenureDuration) -> u32 {
    let months = tenure.total_months();
    if months < 6 {
        2
    } else if months < 18 {
        4
    } else if months < 36 {
        6
    } else {
        8
    }
}

/// Calculates the notice payment.
///
/// Gross notice pay is `dressed daily wage × 7 × weeks`, with the dressed
/// daily wage being one thirtieth of the gross salary plus regular monthly
/// benefits. The income tax honours the prior cumulative tax base.
///
/// # Errors
///
/// Propagates errors from the deduction pipeline.
pub fn calculate_notice_pay(
    tenure: &TenureDuration,
    gross_salary: Decimal,
    benefits_total: Decimal,
    period: &FinancialPeriod,
    prior_cumulative_base: Decimal,
) -> EngineResult<PayComponent> {
    let weeks = notice_weeks(tenure);
    let dressed_daily = (gross_salary + benefits_total) / Decimal::from(30);
    let gross = dressed_daily * Decimal::from(7) * Decimal::from(weeks);

    build_component(
        gross,
        prior_cumulative_base,
        period,
        &DeductionOptions::notice_pay(),
    )
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

    fn tenure_of_months(months: u32) -> TenureDuration {
        TenureDuration {
            years: months / 12,
            months: months % 12,
            days: 0,
            total_days: i64::from(months) * 30,
            payable_months: months,
        }
    }

    #[test]
    fn test_notice_tiers() {
        assert_eq!(notice_weeks(&tenure_of_months(0)), 2);
        assert_eq!(notice_weeks(&tenure_of_months(5)), 2);
        assert_eq!(notice_weeks(&tenure_of_months(6)), 4);
        assert_eq!(notice_weeks(&tenure_of_months(17)), 4);
        assert_eq!(notice_weeks(&tenure_of_months(18)), 6);
        assert_eq!(notice_weeks(&tenure_of_months(20)), 6);
        assert_eq!(notice_weeks(&tenure_of_months(35)), 6);
        assert_eq!(notice_weeks(&tenure_of_months(36)), 8);
        assert_eq!(notice_weeks(&tenure_of_months(120)), 8);
    }

    #[test]
    fn test_leftover_days_do_not_promote_tier() {
        let tenure = TenureDuration {
            years: 0,
            months: 5,
            days: 20,
            total_days: 170,
            payable_months: 6,
        };
        assert_eq!(notice_weeks(&tenure), 2);
    }

    #[test]
    fn test_gross_is_weeks_of_dressed_wage() {
        let component = calculate_notice_pay(
            &tenure_of_months(20),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();

        // 6 weeks × 7 days × (30,000 / 30).
        assert_eq!(component.gross, dec("42000"));
    }

    #[test]
    fn test_benefits_increase_notice_pay() {
        let bare = calculate_notice_pay(
            &tenure_of_months(20),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();
        let dressed = calculate_notice_pay(
            &tenure_of_months(20),
            dec("30000"),
            dec("3000"),
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();

        assert!(dressed.gross > bare.gross);
        // 6 weeks × 7 × (33,000 / 30).
        assert_eq!(dressed.gross, dec("46200"));
    }

    #[test]
    fn test_no_social_security_withheld() {
        let component = calculate_notice_pay(
            &tenure_of_months(40),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();

        assert_eq!(component.social_security, Decimal::ZERO);
        assert_eq!(component.unemployment_insurance, Decimal::ZERO);
        assert!(component.income_tax > Decimal::ZERO);
        assert!(component.stamp_tax > Decimal::ZERO);
    }

    #[test]
    fn test_minimum_wage_exemption_applied() {
        let component = calculate_notice_pay(
            &tenure_of_months(40),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();

        assert!(component.income_tax_exemption > Decimal::ZERO);
        assert!(component.stamp_tax_exemption > Decimal::ZERO);
        assert!(component.income_tax_exemption <= component.income_tax);
    }

    #[test]
    fn test_prior_base_raises_income_tax() {
        let fresh = calculate_notice_pay(
            &tenure_of_months(40),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            Decimal::ZERO,
        )
        .unwrap();
        let late_year = calculate_notice_pay(
            &tenure_of_months(40),
            dec("30000"),
            Decimal::ZERO,
            &period_2025_h2(),
            dec("300000"),
        )
        .unwrap();

        assert!(late_year.income_tax > fresh.income_tax);
    }
}
