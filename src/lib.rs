//! Monthly payroll for managers, programmers and salesmen.
//!
//! Each employee category computes its monthly salary differently behind the
//! shared [`models::Employee`] trait. [`factory::EmployeeFactory`] builds the
//! right variant from a one-letter category code, and
//! [`calculation::run_payroll`] pays a whole roster with an audit trace.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod factory;
pub mod models;
