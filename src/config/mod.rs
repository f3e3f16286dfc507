//! Legal parameter tables and their loading.
//!
//! The registry of historical legal periods is the single integration point
//! for parameter updates: a new minimum wage, severance ceiling, or bracket
//! schedule is supported by appending one [`FinancialPeriod`] entry.

mod builtin;
mod loader;
mod registry;
mod types;

pub use loader::{load_fine_schedule, load_period_registry};
pub use registry::PeriodRegistry;
pub use types::{
    DailyFineRate, DeductionRates, EvasionDisclosure, FineSchedule, FinancialPeriod, TaxBracket,
    TaxBracketSchedule,
};
