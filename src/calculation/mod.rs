//! Calculation pipeline: tenure, progressive tax, payroll deductions, the
//! individual payment components, and the orchestrating entry points.

pub mod deductions;
pub mod engine;
pub mod evasion_fine;
pub mod exemption;
pub mod income_tax;
pub mod leave_payout;
pub mod net_to_gross;
pub mod notice;
pub mod prorated_salary;
pub mod severance;
pub mod tenure;

pub use deductions::{DeductionOptions, build_component, taxable_base};
pub use engine::calculate;
pub use evasion_fine::{FineConfig, apportion_evasion_fine};
pub use exemption::{WageExemption, minimum_wage_exemption};
pub use income_tax::compute_income_tax;
pub use leave_payout::calculate_leave_payout;
pub use net_to_gross::{
    GrossSolveResult, MAX_ITERATIONS, SolverConfig, convergence_tolerance, solve_gross_from_net,
};
pub use notice::{calculate_notice_pay, notice_weeks};
pub use prorated_salary::{ProratedSalaryResult, calculate_prorated_salary};
pub use severance::{SeveranceOutcome, calculate_severance};
pub use tenure::duration_between;
