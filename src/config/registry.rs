//! The date-ordered registry of historical legal periods.
//!
//! This module provides [`PeriodRegistry`], the single integration point for
//! legal parameter history: appending a new [`FinancialPeriod`] entry is all
//! that is needed to support a new minimum wage, severance ceiling, or bracket
//! schedule — no calculation logic changes.

use chrono::{Days, NaiveDate};

use super::builtin::builtin_periods;
use super::types::FinancialPeriod;
use crate::error::{EngineError, EngineResult};

/// A validated, date-ordered table of [`FinancialPeriod`] snapshots.
///
/// The table is read-only after construction. Lookup is a linear scan over a
/// small (<100 entry) table and never fails: dates outside the known history
/// clamp to the nearest boundary period.
///
/// # Example
///
/// ```
/// use entitlement_engine::config::PeriodRegistry;
/// use chrono::NaiveDate;
///
/// let registry = PeriodRegistry::builtin();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let period = registry.lookup(date);
/// assert_eq!(period.name, "2025-H2");
/// ```
#[derive(Debug, Clone)]
pub struct PeriodRegistry {
    /// Periods sorted ascending by start date.
    periods: Vec<FinancialPeriod>,
}

impl PeriodRegistry {
    /// Creates a registry from a list of periods, validating the table.
    ///
    /// The periods are sorted by start date; the table must be non-empty,
    /// non-overlapping, and contiguous (each period starts the day after its
    /// predecessor ends), and every bracket schedule must be valid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriodTable`] when any invariant is
    /// violated.
    pub fn new(periods: Vec<FinancialPeriod>) -> EngineResult<Self> {
        if periods.is_empty() {
            return Err(EngineError::InvalidPeriodTable {
                message: "period table is empty".to_string(),
            });
        }

        let mut sorted = periods;
        sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        for period in &sorted {
            if period.end_date < period.start_date {
                return Err(EngineError::InvalidPeriodTable {
                    message: format!(
                        "period '{}' ends ({}) before it starts ({})",
                        period.name, period.end_date, period.start_date
                    ),
                });
            }
            period.tax_brackets.validate()?;
        }

        for pair in sorted.windows(2) {
            let expected_start = pair[0].end_date.checked_add_days(Days::new(1));
            if expected_start != Some(pair[1].start_date) {
                return Err(EngineError::InvalidPeriodTable {
                    message: format!(
                        "period '{}' must start the day after '{}' ends ({})",
                        pair[1].name, pair[0].name, pair[0].end_date
                    ),
                });
            }
        }

        Ok(Self { periods: sorted })
    }

    /// Returns the registry compiled into the crate: Turkish legal parameters
    /// for the half-year periods 2021-H1 through 2025-H2.
    pub fn builtin() -> Self {
        // The builtin table is maintained sorted and contiguous; validated by
        // the tests below rather than on every construction.
        Self {
            periods: builtin_periods(),
        }
    }

    /// Looks up the period containing `date`.
    ///
    /// Never fails: a date before the earliest known period returns the
    /// earliest period and a date after the latest returns the latest. Both
    /// cases are an explicit "most recent known legal parameters"
    /// approximation, not an error.
    pub fn lookup(&self, date: NaiveDate) -> &FinancialPeriod {
        self.periods
            .iter()
            .find(|period| period.start_date <= date && date <= period.end_date)
            .unwrap_or_else(|| {
                if date < self.earliest().start_date {
                    self.earliest()
                } else {
                    self.latest()
                }
            })
    }

    /// Returns the earliest known period.
    pub fn earliest(&self) -> &FinancialPeriod {
        // new() guarantees a non-empty, sorted table.
        &self.periods[0]
    }

    /// Returns the latest known period.
    pub fn latest(&self) -> &FinancialPeriod {
        &self.periods[self.periods.len() - 1]
    }

    /// Returns all periods, sorted ascending by start date.
    pub fn periods(&self) -> &[FinancialPeriod] {
        &self.periods
    }
}
