//! The aggregate result of a severance/notice calculation.

use serde::{Deserialize, Serialize};

use super::pay_component::PayComponent;
use super::tenure::TenureDuration;

/// A non-fatal signal generated during calculation.
///
/// Warnings indicate conditions that don't prevent the calculation but that
/// the presentation layer should surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g. "low", "medium", "high").
    pub severity: String,
}

/// The complete result of a severance/notice calculation.
///
/// Aggregates the four payment components plus the tenure and the flags
/// describing how the calculation went. Created fresh per call and never
/// mutated after construction; identical inputs yield identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceNoticeResult {
    /// Name of the legal period resolved from the termination date.
    pub period_name: String,
    /// Calendar tenure between start and termination date.
    pub tenure: TenureDuration,
    /// Whether tenure reached the one-year severance threshold.
    pub severance_eligible: bool,
    /// Whether the per-year severance base was capped at the period ceiling.
    pub ceiling_applied: bool,
    /// Statutory notice period in weeks (2-8, tiered by tenure).
    pub notice_weeks: u32,
    /// Severance pay component (stamp tax only).
    pub severance: PayComponent,
    /// Notice pay component (income tax and stamp tax, minimum-wage exempt).
    pub notice: PayComponent,
    /// Unused-leave payout component (full deduction stack).
    pub unused_leave: PayComponent,
    /// Prorated final-month salary component (full deduction stack).
    pub final_salary: PayComponent,
    /// Non-fatal signals generated during the calculation.
    pub warnings: Vec<CalculationWarning>,
}

impl SeveranceNoticeResult {
    /// Sum of the net amounts of all four components.
    pub fn total_net(&self) -> rust_decimal::Decimal {
        self.severance.net + self.notice.net + self.unused_leave.net + self.final_salary.net
    }

    /// Sum of the gross amounts of all four components.
    pub fn total_gross(&self) -> rust_decimal::Decimal {
        self.severance.gross + self.notice.gross + self.unused_leave.gross + self.final_salary.gross
    }
}
