//! Core data models for the entitlement calculation engine.
//!
//! All of these are value objects: created at calculation time, returned to
//! the caller, and discarded. They serialize directly to JSON for the
//! presentation layer.

mod fine_breakdown;
mod input;
mod pay_component;
mod severance_result;
mod tenure;

pub use fine_breakdown::{EvasionFineBreakdown, FineSegment};
pub use input::{Benefits, CalculationInput};
pub use pay_component::PayComponent;
pub use severance_result::{CalculationWarning, SeveranceNoticeResult};
pub use tenure::TenureDuration;
