//! Configuration types for the legal parameter tables.
//!
//! This module contains the strongly-typed structures that describe one
//! historical legal period (minimum wage, severance ceiling, tax brackets,
//! deduction rates) and the per-year military-evasion fine schedule. All of
//! them deserialize directly from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// One bracket of a progressive income-tax schedule.
///
/// `upper_limit` is the cumulative tax-base threshold at which the bracket
/// ends; `None` marks the final, unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Cumulative upper limit of this bracket, `None` for the last bracket.
    pub upper_limit: Option<Decimal>,
    /// Marginal rate applied to the slice of tax base inside this bracket.
    pub rate: Decimal,
}

/// An ordered progressive income-tax bracket schedule.
///
/// Invariants (checked by [`TaxBracketSchedule::validate`]): thresholds are
/// strictly increasing, rates are non-decreasing, and exactly the final
/// bracket is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketSchedule {
    /// The brackets, ordered by ascending upper limit.
    pub brackets: Vec<TaxBracket>,
}

impl TaxBracketSchedule {
    /// Checks the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriodTable`] when the schedule is empty,
    /// a non-final bracket is unbounded, thresholds fail to strictly increase,
    /// or rates decrease.
    pub fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidPeriodTable {
                message: "tax bracket schedule is empty".to_string(),
            });
        }

        let mut previous_limit: Option<Decimal> = None;
        let mut previous_rate: Option<Decimal> = None;

        for (index, bracket) in self.brackets.iter().enumerate() {
            let is_last = index == self.brackets.len() - 1;

            match bracket.upper_limit {
                Some(limit) => {
                    if is_last {
                        return Err(EngineError::InvalidPeriodTable {
                            message: format!(
                                "final tax bracket must be unbounded, found limit {limit}"
                            ),
                        });
                    }
                    if let Some(previous) = previous_limit {
                        if limit <= previous {
                            return Err(EngineError::InvalidPeriodTable {
                                message: format!(
                                    "tax bracket limits must strictly increase ({previous} then {limit})"
                                ),
                            });
                        }
                    }
                    previous_limit = Some(limit);
                }
                None => {
                    if !is_last {
                        return Err(EngineError::InvalidPeriodTable {
                            message: format!("tax bracket {index} is unbounded but not last"),
                        });
                    }
                }
            }

            if let Some(previous) = previous_rate {
                if bracket.rate < previous {
                    return Err(EngineError::InvalidPeriodTable {
                        message: format!(
                            "tax bracket rates must be non-decreasing ({previous} then {})",
                            bracket.rate
                        ),
                    });
                }
            }
            previous_rate = Some(bracket.rate);
        }

        Ok(())
    }

    /// Returns the top marginal rate (the rate of the unbounded bracket).
    pub fn top_rate(&self) -> Decimal {
        self.brackets
            .last()
            .map(|bracket| bracket.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Employee-side statutory deduction rates for one legal period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRates {
    /// Social-security (SGK) employee share rate.
    pub social_security: Decimal,
    /// Unemployment-insurance employee share rate.
    pub unemployment: Decimal,
    /// Stamp-tax rate applied to gross payment amounts.
    pub stamp_tax: Decimal,
}

/// An immutable snapshot of the legal parameters for one historical period.
///
/// Both `start_date` and `end_date` are inclusive. Periods in a
/// [`super::PeriodRegistry`] are contiguous and non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// A short identifying name for the period (e.g. "2025-H2").
    pub name: String,
    /// First calendar day the parameters apply to (inclusive).
    pub start_date: chrono::NaiveDate,
    /// Last calendar day the parameters apply to (inclusive).
    pub end_date: chrono::NaiveDate,
    /// Monthly gross minimum wage in effect during the period.
    pub minimum_gross_wage: Decimal,
    /// Maximum per-year-of-service severance amount for the period.
    pub severance_ceiling: Decimal,
    /// Progressive wage-income tax brackets for the period's fiscal year.
    pub tax_brackets: TaxBracketSchedule,
    /// Employee-side deduction rates in effect during the period.
    pub deductions: DeductionRates,
}

/// How a military-service evasion came to light.
///
/// Self-reported evasion attracts a lower daily fine rate than evasion
/// detected by the authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvasionDisclosure {
    /// The person reported themselves before being caught.
    SelfReported,
    /// The evasion was detected by the authorities.
    Captured,
}

/// Daily fine rates for one calendar year, per disclosure kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFineRate {
    /// Daily rate when the evasion was self-reported.
    pub self_reported: Decimal,
    /// Daily rate when the evasion was detected by the authorities.
    pub captured: Decimal,
}

/// Per-year military-evasion daily fine rates.
///
/// Rates change at calendar-year boundaries; years outside the known table
/// clamp to the nearest known year, mirroring the period registry's fallback
/// policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineSchedule {
    /// Daily rates keyed by calendar year.
    rates: BTreeMap<i32, DailyFineRate>,
}

impl FineSchedule {
    /// Creates a schedule from per-year rates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriodTable`] when the map is empty.
    pub fn new(rates: BTreeMap<i32, DailyFineRate>) -> EngineResult<Self> {
        if rates.is_empty() {
            return Err(EngineError::InvalidPeriodTable {
                message: "fine schedule has no years".to_string(),
            });
        }
        Ok(Self { rates })
    }

    /// Returns the daily rate for `year` under the given disclosure kind.
    ///
    /// Years before the earliest known year use the earliest year's rate;
    /// years after the latest use the latest. This is the "most recent known
    /// legal parameters" approximation, not an error.
    pub fn rate_for(&self, year: i32, disclosure: EvasionDisclosure) -> Decimal {
        let entry = self
            .rates
            .range(..=year)
            .next_back()
            .or_else(|| self.rates.iter().next())
            .map(|(_, rate)| rate);

        match entry {
            Some(rate) => match disclosure {
                EvasionDisclosure::SelfReported => rate.self_reported,
                EvasionDisclosure::Captured => rate.captured,
            },
            // new() rejects empty maps; unreachable in practice.
            None => Decimal::ZERO,
        }
    }

    /// Returns the known per-year rates, ordered by year.
    pub fn rates(&self) -> &BTreeMap<i32, DailyFineRate> {
        &self.rates
    }
}
