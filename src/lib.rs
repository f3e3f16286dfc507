//! Calculation engine for Turkish labour-law entitlements.
//!
//! This crate computes severance pay (kıdem tazminatı), notice pay (ihbar
//! tazminatı), unused-leave payout, prorated final-month salary, net⇄gross
//! salary conversion, and military-service evasion fines from user-supplied
//! dates and salary figures, applying historically-versioned legal parameters
//! (minimum wage, severance ceiling, progressive income-tax brackets).
//!
//! The engine is a pure function library: given inputs and a reference date it
//! returns a structured result. The only process-lifetime state is the
//! read-only [`config::PeriodRegistry`] table.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
