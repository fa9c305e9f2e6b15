//! Calculation logic for the payroll engine.
//!
//! Salaries themselves are computed by each employee variant; this module
//! runs them over a roster and aggregates the results.

mod payroll;

pub use payroll::{ENGINE_VERSION, run_payroll, summarize};
