//! Per-year breakdown of a military-evasion fine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portion of an evasion interval falling inside one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineSegment {
    /// The calendar year this segment covers.
    pub year: i32,
    /// Day count of the segment.
    pub days: i64,
    /// Daily fine rate in effect for this year.
    pub daily_rate: Decimal,
    /// `days × daily_rate`.
    pub subtotal: Decimal,
}

/// An evasion fine apportioned across the calendar years it spans.
///
/// One [`FineSegment`] per calendar year the interval overlaps, plus the
/// month-or-fraction extra fee and optional base fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvasionFineBreakdown {
    /// Per-year segments, ordered by year.
    pub segments: Vec<FineSegment>,
    /// Elapsed months under the month-or-fraction rule.
    pub payable_months: u32,
    /// Base fee included in the total (zero when excluded).
    pub base_fee: Decimal,
    /// Extra fee: `payable_months × monthly extra fee`.
    pub extra_fee: Decimal,
    /// Sum of segment subtotals plus extra fee plus base fee.
    pub total: Decimal,
}

impl EvasionFineBreakdown {
    /// Sum of the per-year segment subtotals (excluding fees).
    pub fn segments_total(&self) -> Decimal {
        self.segments.iter().map(|segment| segment.subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample() -> EvasionFineBreakdown {
        EvasionFineBreakdown {
            segments: vec![
                FineSegment {
                    year: 2024,
                    days: 60,
                    daily_rate: dec("10"),
                    subtotal: dec("600"),
                },
                FineSegment {
                    year: 2025,
                    days: 31,
                    daily_rate: dec("12"),
                    subtotal: dec("372"),
                },
            ],
            payable_months: 3,
            base_fee: Decimal::ZERO,
            extra_fee: Decimal::ZERO,
            total: dec("972"),
        }
    }

    #[test]
    fn test_segments_total() {
        assert_eq!(sample().segments_total(), dec("972"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let breakdown = sample();
        let json = serde_json::to_string(&breakdown).unwrap();
        let parsed: EvasionFineBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, parsed);
    }
}
