//! Configuration loading functionality.
//!
//! This module loads period tables and fine schedules from YAML files, so a
//! deployment can extend the legal history without recompiling: appending a
//! new period entry to the YAML file is the whole integration.
//!
//! # File formats
//!
//! A period table file:
//! ```text
//! periods:
//!   - name: "2025-H2"
//!     start_date: 2025-07-01
//!     end_date: 2025-12-31
//!     minimum_gross_wage: "26005.50"
//!     severance_ceiling: "53919.68"
//!     tax_brackets:
//!       brackets:
//!         - { upper_limit: "158000", rate: "0.15" }
//!         - { upper_limit: ~, rate: "0.40" }
//!     deductions:
//!       social_security: "0.14"
//!       unemployment: "0.01"
//!       stamp_tax: "0.00759"
//! ```
//!
//! A fine schedule file:
//! ```text
//! rates:
//!   2024: { self_reported: "10.00", captured: "20.00" }
//!   2025: { self_reported: "12.00", captured: "24.00" }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::registry::PeriodRegistry;
use super::types::{FineSchedule, FinancialPeriod};
use crate::error::{EngineError, EngineResult};

/// Top-level structure of a period table YAML file.
#[derive(Debug, Deserialize)]
struct PeriodsFile {
    periods: Vec<FinancialPeriod>,
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Loads a period registry from a YAML file.
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file is missing,
/// [`EngineError::ConfigParseError`] on invalid YAML, and
/// [`EngineError::InvalidPeriodTable`] when the parsed table violates the
/// registry invariants (empty, overlapping, non-contiguous, bad brackets).
pub fn load_period_registry<P: AsRef<Path>>(path: P) -> EngineResult<PeriodRegistry> {
    let file: PeriodsFile = load_yaml(path.as_ref())?;
    let registry = PeriodRegistry::new(file.periods)?;
    tracing::debug!(
        periods = registry.periods().len(),
        path = %path.as_ref().display(),
        "loaded period registry"
    );
    Ok(registry)
}

/// Loads a military-evasion fine schedule from a YAML file.
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file is missing,
/// [`EngineError::ConfigParseError`] on invalid YAML, and
/// [`EngineError::InvalidPeriodTable`] when the schedule has no years.
pub fn load_fine_schedule<P: AsRef<Path>>(path: P) -> EngineResult<FineSchedule> {
    let schedule: FineSchedule = load_yaml(path.as_ref())?;
    if schedule.rates().is_empty() {
        return Err(EngineError::InvalidPeriodTable {
            message: "fine schedule has no years".to_string(),
        });
    }
    Ok(schedule)
}
