//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay scales
//! from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayScale;

/// The file name read from a configuration directory.
pub const PAY_SCALE_FILE: &str = "pay_scale.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── pay_scale.yaml   # Manager, programmer and salesman figures
/// ```
///
/// # Example
///
/// ```no_run
/// use monthly_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Programmer rate: ${}", loader.hourly_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    scale: PayScale,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `pay_scale.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML, or a figure that is negative or above
    ///   [`max_scale_figure`](super::max_scale_figure) (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let scale_path = path.as_ref().join(PAY_SCALE_FILE);
        let scale = Self::load_yaml::<PayScale>(&scale_path)?;

        if let Some(message) = scale.out_of_range() {
            return Err(PayrollError::ConfigParseError {
                path: scale_path.display().to_string(),
                message,
            });
        }

        debug!(path = %scale_path.display(), "Loaded pay scale");
        Ok(Self { scale })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded pay scale.
    pub fn pay_scale(&self) -> &PayScale {
        &self.scale
    }

    /// Returns the manager's fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.scale.manager.monthly_salary
    }

    /// Returns the programmer's hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.scale.programmer.hourly_rate
    }

    /// Returns the salesman's base salary and commission rate.
    pub fn sales_terms(&self) -> (Decimal, Decimal) {
        (
            self.scale.salesman.base_salary,
            self.scale.salesman.commission_rate,
        )
    }
}

impl From<ConfigLoader> for PayScale {
    fn from(loader: ConfigLoader) -> Self {
        loader.scale
    }
}
