//! Core data models for the payroll engine.
//!
//! This module contains the employee capability, its three variants and
//! the payroll run result types.

mod employee;
mod manager;
mod payroll_run;
mod programmer;
mod salesman;

pub use employee::{Employee, EmployeeCategory, max_amount};
pub use manager::Manager;
pub use payroll_run::{AuditStep, AuditTrace, CategoryTotal, PayLine, PayTotals, PayrollRun};
pub use programmer::Programmer;
pub use salesman::Salesman;
