//! Calculation inputs supplied by the presentation layer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Regular monthly benefits folded into the dressed wage.
///
/// All amounts are monthly gross figures in the same currency unit as the
/// salary. Missing benefits default to zero when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefits {
    /// Monthly food allowance.
    #[serde(default)]
    pub food: Decimal,
    /// Monthly transport allowance.
    #[serde(default)]
    pub transport: Decimal,
    /// Monthly health allowance.
    #[serde(default)]
    pub health: Decimal,
    /// Monthly fuel allowance.
    #[serde(default)]
    pub fuel: Decimal,
    /// Monthly child allowance.
    #[serde(default)]
    pub child_allowance: Decimal,
    /// Any other regular monthly benefit.
    #[serde(default)]
    pub other: Decimal,
}

impl Benefits {
    /// Sum of all benefit lines.
    pub fn total(&self) -> Decimal {
        self.food + self.transport + self.health + self.fuel + self.child_allowance + self.other
    }
}

/// Input to a severance/notice calculation.
///
/// # Example
///
/// ```
/// use entitlement_engine::models::{Benefits, CalculationInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     gross_salary: Decimal::from_str("45000").unwrap(),
///     benefits: Benefits::default(),
///     salary_day_of_month: 1,
///     unused_leave_days: 10,
///     prior_cumulative_tax_base: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Termination date; also selects the legal period for the calculation.
    pub end_date: NaiveDate,
    /// Monthly gross salary, strictly positive.
    pub gross_salary: Decimal,
    /// Regular monthly benefits (dressed-wage components).
    #[serde(default)]
    pub benefits: Benefits,
    /// Day of month the salary is paid (1-31), the proration anchor.
    pub salary_day_of_month: u32,
    /// Unused annual-leave days to pay out.
    #[serde(default)]
    pub unused_leave_days: u32,
    /// Income-tax base already accumulated earlier in the fiscal year.
    #[serde(default)]
    pub prior_cumulative_tax_base: Decimal,
}
