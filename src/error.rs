//! Error types for the entitlement calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the entitlement calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use entitlement_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "gross_salary".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for field 'gross_salary': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range was invalid (start date after end date).
    #[error("Invalid date range {start} - {end}: {message}")]
    InvalidRange {
        /// The start of the offending range.
        start: NaiveDate,
        /// The end of the offending range.
        end: NaiveDate,
        /// A description of what made the range invalid.
        message: String,
    },

    /// A date range had zero length where a strictly positive duration is
    /// required (start and end date must not be equal).
    #[error("Zero-length range at {date}: start and end date must not be equal")]
    ZeroDuration {
        /// The date supplied as both start and end.
        date: NaiveDate,
    },

    /// A numeric or enumerated input was invalid.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The name of the offending field.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The period table violated a registry invariant (empty, overlapping,
    /// non-contiguous, or carrying an invalid bracket schedule).
    #[error("Invalid period table: {message}")]
    InvalidPeriodTable {
        /// A description of the violated invariant.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
