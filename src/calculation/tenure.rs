//! Calendar tenure arithmetic.
//!
//! Computes the calendar decomposition (years/months/days) between two dates,
//! borrowing correctly across month-end boundaries, plus the flat day count
//! and the month-or-fraction figure used by fine and extra-fee logic.

use chrono::{Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::TenureDuration;

/// Computes the calendar duration between two dates.
///
/// Whole months are counted by stepping `start` forward month by month
/// (chrono clamps at month ends, so Jan 31 + 1 month = Feb 28/29) for as
/// long as the stepped date stays on or before `end`; the leftover days are
/// the exact date difference from the last whole-month anchor.
///
/// `start == end` is permitted and yields a zero duration; call sites that
/// require strictly positive tenure must reject equality themselves (see
/// [`EngineError::ZeroDuration`]).
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] when `start > end`.
///
/// # Example
///
/// ```
/// use entitlement_engine::calculation::duration_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let tenure = duration_between(start, end).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (1, 0, 0));
/// assert_eq!(tenure.total_days, 365);
/// assert_eq!(tenure.payable_months, 12);
/// ```
pub fn duration_between(start: NaiveDate, end: NaiveDate) -> EngineResult<TenureDuration> {
    if start > end {
        return Err(EngineError::InvalidRange {
            start,
            end,
            message: "start date must precede end date".to_string(),
        });
    }

    let total_days = (end - start).num_days();

    let mut whole_months: u32 = 0;
    loop {
        let next = start.checked_add_months(Months::new(whole_months + 1));
        match next {
            Some(stepped) if stepped <= end => whole_months += 1,
            _ => break,
        }
    }

    // Anchor is always reachable: stepping by whole_months succeeded above
    // (or whole_months is zero and the anchor is start itself).
    let anchor = start
        .checked_add_months(Months::new(whole_months))
        .unwrap_or(start);
    let leftover_days = (end - anchor).num_days();

    let payable_months = whole_months + u32::from(leftover_days > 0);

    Ok(TenureDuration {
        years: whole_months / 12,
        months: whole_months % 12,
        days: leftover_days as u32,
        total_days,
        payable_months,
    })
}
