//! Pay scale configuration for the payroll engine.
//!
//! This module provides the constants behind the salary formulas and a
//! loader that reads them from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use monthly_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Manager salary: {}", config.monthly_salary());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, PAY_SCALE_FILE};
pub use types::{ManagerScale, PayScale, ProgrammerScale, SalesmanScale, max_scale_figure};
