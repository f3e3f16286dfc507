//! The shared gross-to-net deduction pipeline.
//!
//! Every payment type runs through the same forward pipeline with different
//! toggles: severance withholds stamp tax only, notice pay skips social
//! security, leave payout and prorated salary carry the full stack. The
//! net⇄gross solver iterates this same pipeline.

use rust_decimal::Decimal;

use crate::config::FinancialPeriod;
use crate::error::EngineResult;
use crate::models::PayComponent;

use super::exemption::minimum_wage_exemption;
use super::income_tax::compute_income_tax;

/// Which deductions and credits apply to a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionOptions {
    /// Withhold the social-security and unemployment employee shares.
    pub social_security: bool,
    /// Withhold progressive income tax.
    pub income_tax: bool,
    /// Withhold stamp tax.
    pub stamp_tax: bool,
    /// Credit the minimum-wage exemption against income and stamp tax.
    pub minimum_wage_exemption: bool,
    /// Optional minimum-living-allowance (AGI) rate; the credit is folded
    /// into the income-tax exemption, capped at the remaining income tax.
    pub agi_rate: Option<Decimal>,
}

impl DeductionOptions {
    /// Full deduction stack: SGK, unemployment, income tax, stamp tax, with
    /// the minimum-wage exemption. Used by leave payout, prorated salary,
    /// and the net⇄gross solver.
    pub fn full_stack() -> Self {
        Self {
            social_security: true,
            income_tax: true,
            stamp_tax: true,
            minimum_wage_exemption: true,
            agi_rate: None,
        }
    }

    /// Notice pay: income tax and stamp tax with the minimum-wage exemption,
    /// no social-security withholding.
    pub fn notice_pay() -> Self {
        Self {
            social_security: false,
            income_tax: true,
            stamp_tax: true,
            minimum_wage_exemption: true,
            agi_rate: None,
        }
    }

    /// Severance pay: stamp tax only. The income-tax exemption of severance
    /// within the ceiling is a statutory rule, not an oversight.
    pub fn severance_pay() -> Self {
        Self {
            social_security: false,
            income_tax: false,
            stamp_tax: true,
            minimum_wage_exemption: false,
            agi_rate: None,
        }
    }
}

/// The income-tax base a gross amount contributes under the given options.
///
/// Social-security-bearing payments are taxed net of the employee shares;
/// payments without social security (notice pay) are taxed on the full gross.
/// Payments without income tax contribute nothing to the cumulative base.
pub fn taxable_base(gross: Decimal, period: &FinancialPeriod, options: &DeductionOptions) -> Decimal {
    if !options.income_tax {
        return Decimal::ZERO;
    }
    if options.social_security {
        let rates = &period.deductions;
        gross * (Decimal::ONE - rates.social_security - rates.unemployment)
    } else {
        gross
    }
}

/// Runs the forward deduction pipeline for one payment.
///
/// Deduction fields of the returned [`PayComponent`] hold the raw statutory
/// figures; the exemption fields hold the credits actually applied, each
/// capped at its raw figure so the net amount never exceeds the gross plus
/// this component's exemptions.
///
/// # Errors
///
/// Propagates [`crate::error::EngineError::InvalidInput`] from the tax
/// evaluation when an amount is negative.
pub fn build_component(
    gross: Decimal,
    prior_cumulative_base: Decimal,
    period: &FinancialPeriod,
    options: &DeductionOptions,
) -> EngineResult<PayComponent> {
    let rates = &period.deductions;

    let social_security = if options.social_security {
        gross * rates.social_security
    } else {
        Decimal::ZERO
    };
    let unemployment_insurance = if options.social_security {
        gross * rates.unemployment
    } else {
        Decimal::ZERO
    };

    let income_tax = if options.income_tax {
        let taxable = gross - social_security - unemployment_insurance;
        compute_income_tax(taxable, prior_cumulative_base, &period.tax_brackets)?
    } else {
        Decimal::ZERO
    };

    let stamp_tax = if options.stamp_tax {
        gross * rates.stamp_tax
    } else {
        Decimal::ZERO
    };

    let exemption = if options.minimum_wage_exemption {
        Some(minimum_wage_exemption(period)?)
    } else {
        None
    };

    let mut income_tax_exemption = match &exemption {
        Some(credit) if options.income_tax => income_tax.min(credit.income_tax),
        _ => Decimal::ZERO,
    };
    let stamp_tax_exemption = match &exemption {
        Some(credit) if options.stamp_tax => stamp_tax.min(credit.stamp_tax),
        _ => Decimal::ZERO,
    };

    if let Some(agi_rate) = options.agi_rate {
        // Monthly AGI credit: minimum wage × family rate × 15%, capped at
        // the income tax still due after the minimum-wage exemption.
        let agi_credit = period.minimum_gross_wage * agi_rate * Decimal::new(15, 2);
        let remaining = income_tax - income_tax_exemption;
        income_tax_exemption += agi_credit.min(remaining).max(Decimal::ZERO);
    }

    let net = gross - social_security - unemployment_insurance - income_tax - stamp_tax
        + income_tax_exemption
        + stamp_tax_exemption;

    Ok(PayComponent {
        gross,
        social_security,
        unemployment_insurance,
        income_tax,
        stamp_tax,
        income_tax_exemption,
        stamp_tax_exemption,
        net,
    })
}
