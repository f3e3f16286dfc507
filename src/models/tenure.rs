//! Calendar tenure duration.

use serde::{Deserialize, Serialize};

/// A calendar-aware duration between two dates.
///
/// `years`/`months`/`days` are the calendar decomposition (borrowing
/// correctly across month-end boundaries), `total_days` is the flat day
/// count, and `payable_months` applies the month-or-fraction rule: any
/// partial month beyond the whole elapsed months counts as one more month.
/// The month-or-fraction figure drives fine and extra-fee logic only, never
/// ordinary tenure display.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::duration_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 3, 25).unwrap();
/// let tenure = duration_between(start, end).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (2, 2, 15));
/// assert_eq!(tenure.payable_months, 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureDuration {
    /// Whole calendar years.
    pub years: u32,
    /// Whole calendar months beyond the whole years (0-11).
    pub months: u32,
    /// Leftover days beyond the whole months.
    pub days: u32,
    /// Flat day count between the two dates.
    pub total_days: i64,
    /// Whole months plus one for any leftover days (month-or-fraction rule).
    pub payable_months: u32,
}

impl TenureDuration {
    /// Total whole calendar months (years × 12 + months).
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// Whether the duration covers at least one full calendar year.
    pub fn at_least_one_year(&self) -> bool {
        self.years >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_months() {
        let tenure = TenureDuration {
            years: 2,
            months: 5,
            days: 12,
            total_days: 895,
            payable_months: 30,
        };
        assert_eq!(tenure.total_months(), 29);
    }

    #[test]
    fn test_at_least_one_year() {
        let mut tenure = TenureDuration {
            years: 0,
            months: 11,
            days: 29,
            total_days: 364,
            payable_months: 12,
        };
        assert!(!tenure.at_least_one_year());

        tenure.years = 1;
        assert!(tenure.at_least_one_year());
    }

    #[test]
    fn test_serialization_round_trip() {
        let tenure = TenureDuration {
            years: 1,
            months: 8,
            days: 3,
            total_days: 611,
            payable_months: 21,
        };
        let json = serde_json::to_string(&tenure).unwrap();
        let parsed: TenureDuration = serde_json::from_str(&json).unwrap();
        assert_eq!(tenure, parsed);
    }
}
