//! A single computed payment line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed payment line with its deductions and exemption credits.
///
/// Deductions carry the *raw* statutory figures; the exemption fields carry
/// the credits actually applied (each capped at its raw figure), so
/// `net = gross − deductions + exemptions` and the net amount never exceeds
/// the gross plus the exemptions attributable to this component.
///
/// # Example
///
/// ```
/// use entitlement_engine::models::PayComponent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let component = PayComponent {
///     gross: Decimal::from_str("30000").unwrap(),
///     social_security: Decimal::ZERO,
///     unemployment_insurance: Decimal::ZERO,
///     income_tax: Decimal::ZERO,
///     stamp_tax: Decimal::from_str("227.70").unwrap(),
///     income_tax_exemption: Decimal::ZERO,
///     stamp_tax_exemption: Decimal::ZERO,
///     net: Decimal::from_str("29772.30").unwrap(),
/// };
/// assert_eq!(component.total_deductions(), Decimal::from_str("227.70").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Gross amount of the payment.
    pub gross: Decimal,
    /// Social-security (SGK) employee withholding.
    pub social_security: Decimal,
    /// Unemployment-insurance employee withholding.
    pub unemployment_insurance: Decimal,
    /// Income tax computed on the taxable base (before exemption credits).
    pub income_tax: Decimal,
    /// Stamp tax computed on the gross amount (before exemption credits).
    pub stamp_tax: Decimal,
    /// Income-tax exemption credit applied to this component.
    pub income_tax_exemption: Decimal,
    /// Stamp-tax exemption credit applied to this component.
    pub stamp_tax_exemption: Decimal,
    /// Net amount: gross minus deductions plus exemption credits.
    pub net: Decimal,
}

impl PayComponent {
    /// An all-zero component, used when a payment does not apply.
    pub fn zero() -> Self {
        Self {
            gross: Decimal::ZERO,
            social_security: Decimal::ZERO,
            unemployment_insurance: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            stamp_tax: Decimal::ZERO,
            income_tax_exemption: Decimal::ZERO,
            stamp_tax_exemption: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }

    /// Sum of the raw deduction figures.
    pub fn total_deductions(&self) -> Decimal {
        self.social_security + self.unemployment_insurance + self.income_tax + self.stamp_tax
    }

    /// Sum of the exemption credits applied.
    pub fn total_exemptions(&self) -> Decimal {
        self.income_tax_exemption + self.stamp_tax_exemption
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> PayComponent {
        PayComponent {
            gross: dec("10000"),
            social_security: dec("1400"),
            unemployment_insurance: dec("100"),
            income_tax: dec("1275"),
            stamp_tax: dec("75.90"),
            income_tax_exemption: dec("500"),
            stamp_tax_exemption: dec("75.90"),
            net: dec("7725.00"),
        }
    }

    #[test]
    fn test_zero_component_is_all_zero() {
        let component = PayComponent::zero();
        assert_eq!(component.gross, Decimal::ZERO);
        assert_eq!(component.net, Decimal::ZERO);
        assert_eq!(component.total_deductions(), Decimal::ZERO);
        assert_eq!(component.total_exemptions(), Decimal::ZERO);
    }

    #[test]
    fn test_total_deductions_sums_all_four() {
        assert_eq!(sample().total_deductions(), dec("2850.90"));
    }

    #[test]
    fn test_total_exemptions_sums_both_credits() {
        assert_eq!(sample().total_exemptions(), dec("575.90"));
    }

    #[test]
    fn test_net_identity_holds_for_sample() {
        let component = sample();
        assert_eq!(
            component.net,
            component.gross - component.total_deductions() + component.total_exemptions()
        );
    }

    #[test]
    fn test_serializes_amounts_as_strings() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"gross\":\"10000\""));
        assert!(json.contains("\"stamp_tax\":\"75.90\""));
    }
}
