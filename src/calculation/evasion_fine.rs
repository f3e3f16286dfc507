//! Military-evasion fine apportionment.
//!
//! The administrative fine accrues daily, at a rate that changes every
//! calendar year, from the day the obligation was missed until the day the
//! evasion surfaces. The total is the sum of the per-year segments plus a
//! fixed base fee and a per-month extra fee.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{EvasionDisclosure, FineSchedule};
use crate::error::{EngineError, EngineResult};
use crate::models::{EvasionFineBreakdown, FineSegment};

use super::tenure::duration_between;

/// Parameters for one evasion fine apportionment.
#[derive(Debug, Clone)]
pub struct FineConfig {
    /// Per-year daily fine rates.
    pub schedule: FineSchedule,
    /// How the evasion came to light; selects the daily rate column.
    pub disclosure: EvasionDisclosure,
    /// Fixed administrative fee charged once, independent of duration.
    pub base_fee: Decimal,
    /// Additional fee charged per payable month of evasion.
    pub monthly_extra_fee: Decimal,
    /// Whether the base fee applies to this case.
    pub include_base_fee: bool,
}

/// Apportions a military-evasion fine across calendar years.
///
/// The span `[start, today]` is split at year boundaries; each segment runs
/// from the later of `start` and January 1st to the earlier of `today` and
/// December 31st, and its day count is the date difference between those two
/// bounds. Every segment is charged at that year's daily rate. Payable months
/// follow the month-or-fraction rule: any leftover days beyond the whole
/// months count as one more month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `start` is after `today`.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::{apportion_evasion_fine, FineConfig};
/// use entitlement_engine::config::{DailyFineRate, EvasionDisclosure, FineSchedule};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
/// use std::str::FromStr;
///
/// let mut rates = BTreeMap::new();
/// rates.insert(2024, DailyFineRate {
///     self_reported: Decimal::from_str("10").unwrap(),
///     captured: Decimal::from_str("20").unwrap(),
/// });
/// rates.insert(2025, DailyFineRate {
///     self_reported: Decimal::from_str("12").unwrap(),
///     captured: Decimal::from_str("24").unwrap(),
/// });
/// let config = FineConfig {
///     schedule: FineSchedule::new(rates).unwrap(),
///     disclosure: EvasionDisclosure::SelfReported,
///     base_fee: Decimal::ZERO,
///     monthly_extra_fee: Decimal::ZERO,
///     include_base_fee: false,
/// };
///
/// let breakdown = apportion_evasion_fine(
///     NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
///     &config,
/// ).unwrap();
///
/// assert_eq!(breakdown.total, Decimal::from_str("972").unwrap());
/// ```
pub fn apportion_evasion_fine(
    start: NaiveDate,
    today: NaiveDate,
    config: &FineConfig,
) -> EngineResult<EvasionFineBreakdown> {
    if start > today {
        return Err(EngineError::InvalidRange {
            start,
            end: today,
            message: "evasion start must not be after the settlement date".to_string(),
        });
    }

    let mut segments = Vec::new();
    for year in start.year()..=today.year() {
        // from_ymd_opt cannot fail for Jan 1 / Dec 31 of a valid year.
        let year_start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(start);
        let year_end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);

        let segment_start = start.max(year_start);
        let segment_end = today.min(year_end);
        let days = (segment_end - segment_start).num_days();
        if days <= 0 {
            continue;
        }

        let daily_rate = config.schedule.rate_for(year, config.disclosure);
        segments.push(FineSegment {
            year,
            days,
            daily_rate,
            subtotal: daily_rate * Decimal::from(days),
        });
    }

    let tenure = duration_between(start, today)?;
    let payable_months = tenure.payable_months;

    let base_fee = if config.include_base_fee {
        config.base_fee
    } else {
        Decimal::ZERO
    };
    let extra_fee = config.monthly_extra_fee * Decimal::from(payable_months);
    let segments_total: Decimal = segments.iter().map(|segment| segment.subtotal).sum();
    let total = segments_total + base_fee + extra_fee;

    debug!(
        %start,
        %today,
        payable_months,
        segments = segments.len(),
        %total,
        "apportioned evasion fine"
    );

    Ok(EvasionFineBreakdown {
        segments,
        payable_months,
        base_fee,
        extra_fee,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DailyFineRate;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule() -> FineSchedule {
        let mut rates = BTreeMap::new();
        rates.insert(
            2024,
            DailyFineRate {
                self_reported: dec("10"),
                captured: dec("20"),
            },
        );
        rates.insert(
            2025,
            DailyFineRate {
                self_reported: dec("12"),
                captured: dec("24"),
            },
        );
        FineSchedule::new(rates).unwrap()
    }

    fn config(disclosure: EvasionDisclosure) -> FineConfig {
        FineConfig {
            schedule: schedule(),
            disclosure,
            base_fee: Decimal::ZERO,
            monthly_extra_fee: Decimal::ZERO,
            include_base_fee: false,
        }
    }

    #[test]
    fn test_cross_year_apportionment() {
        let breakdown = apportion_evasion_fine(
            date(2024, 11, 1),
            date(2025, 2, 1),
            &config(EvasionDisclosure::SelfReported),
        )
        .unwrap();

        assert_eq!(breakdown.segments.len(), 2);
        assert_eq!(breakdown.segments[0].year, 2024);
        assert_eq!(breakdown.segments[0].days, 60);
        assert_eq!(breakdown.segments[0].subtotal, dec("600"));
        assert_eq!(breakdown.segments[1].year, 2025);
        assert_eq!(breakdown.segments[1].days, 31);
        assert_eq!(breakdown.segments[1].subtotal, dec("372"));
        assert_eq!(breakdown.total, dec("972"));
        assert_eq!(breakdown.payable_months, 3);
    }

    #[test]
    fn test_captured_uses_higher_rate_column() {
        let self_reported = apportion_evasion_fine(
            date(2024, 11, 1),
            date(2025, 2, 1),
            &config(EvasionDisclosure::SelfReported),
        )
        .unwrap();
        let captured = apportion_evasion_fine(
            date(2024, 11, 1),
            date(2025, 2, 1),
            &config(EvasionDisclosure::Captured),
        )
        .unwrap();

        assert_eq!(captured.total, self_reported.total * dec("2"));
    }

    #[test]
    fn test_single_year_span() {
        let breakdown = apportion_evasion_fine(
            date(2025, 3, 1),
            date(2025, 3, 11),
            &config(EvasionDisclosure::SelfReported),
        )
        .unwrap();

        assert_eq!(breakdown.segments.len(), 1);
        assert_eq!(breakdown.segments[0].days, 10);
        assert_eq!(breakdown.total, dec("120"));
        assert_eq!(breakdown.payable_months, 1);
    }

    #[test]
    fn test_base_and_monthly_fees_are_added() {
        let mut config = config(EvasionDisclosure::SelfReported);
        config.base_fee = dec("500");
        config.monthly_extra_fee = dec("50");
        config.include_base_fee = true;

        let breakdown =
            apportion_evasion_fine(date(2024, 11, 1), date(2025, 2, 1), &config).unwrap();

        assert_eq!(breakdown.base_fee, dec("500"));
        // 3 payable months at 50 each.
        assert_eq!(breakdown.extra_fee, dec("150"));
        assert_eq!(breakdown.total, dec("972") + dec("650"));
    }

    #[test]
    fn test_base_fee_can_be_waived() {
        let mut config = config(EvasionDisclosure::SelfReported);
        config.base_fee = dec("500");
        config.include_base_fee = false;

        let breakdown =
            apportion_evasion_fine(date(2024, 11, 1), date(2025, 2, 1), &config).unwrap();

        assert_eq!(breakdown.base_fee, Decimal::ZERO);
        assert_eq!(breakdown.total, dec("972"));
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let result = apportion_evasion_fine(
            date(2025, 2, 1),
            date(2024, 11, 1),
            &config(EvasionDisclosure::SelfReported),
        );
        assert!(matches!(result, Err(EngineError::InvalidRange { .. })));
    }

    #[test]
    fn test_same_day_yields_zero_fine() {
        let breakdown = apportion_evasion_fine(
            date(2025, 3, 1),
            date(2025, 3, 1),
            &config(EvasionDisclosure::SelfReported),
        )
        .unwrap();

        assert!(breakdown.segments.is_empty());
        assert_eq!(breakdown.total, Decimal::ZERO);
        assert_eq!(breakdown.payable_months, 0);
    }

    #[test]
    fn test_rates_clamp_outside_known_years() {
        let breakdown = apportion_evasion_fine(
            date(2027, 1, 1),
            date(2027, 1, 11),
            &config(EvasionDisclosure::SelfReported),
        )
        .unwrap();

        // 2027 is unknown; the latest known year's rate applies.
        assert_eq!(breakdown.total, dec("120"));
    }
}
