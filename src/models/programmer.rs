//! The programmer variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayScale;
use crate::error::PayrollResult;

use super::employee::{accumulate, checked_amount};
use super::{AuditStep, Employee, EmployeeCategory};

/// A programmer paid by the hour.
///
/// Hours accumulate over the month through [`Programmer::log_hours`].
///
/// # Example
///
/// ```
/// use monthly_payroll::models::{Employee, Programmer};
/// use rust_decimal::Decimal;
///
/// let mut programmer = Programmer::new("Bob");
/// programmer.log_hours(Decimal::new(6, 0)).unwrap();
/// programmer.log_hours(Decimal::new(4, 0)).unwrap();
/// assert_eq!(programmer.salary(), Decimal::new(2000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Programmer {
    name: String,
    working_hour: Decimal,
}

impl Programmer {
    /// Creates a programmer with no hours logged.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            working_hour: Decimal::ZERO,
        }
    }

    /// Creates a programmer with hours already worked.
    ///
    /// Returns `InvalidEmployee` if `working_hour` is negative or above
    /// [`max_amount`](crate::models::max_amount).
    pub fn with_hours(name: impl Into<String>, working_hour: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            name: name.into(),
            working_hour: checked_amount("working_hour", working_hour)?,
        })
    }

    /// Adds hours to the running total.
    ///
    /// Returns `InvalidEmployee` if `hours` is negative or the total would pass
    /// [`max_amount`](crate::models::max_amount); the total is left unchanged.
    pub fn log_hours(&mut self, hours: Decimal) -> PayrollResult<()> {
        self.working_hour = accumulate("working_hour", self.working_hour, hours)?;
        Ok(())
    }

    /// Returns the hours worked so far.
    pub fn working_hour(&self) -> Decimal {
        self.working_hour
    }
}

impl Employee for Programmer {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> EmployeeCategory {
        EmployeeCategory::Programmer
    }

    fn salary_with(&self, scale: &PayScale) -> Decimal {
        scale.programmer.hourly_rate * self.working_hour
    }

    fn audit_step(&self, scale: &PayScale, step_number: u32) -> AuditStep {
        let rate = scale.programmer.hourly_rate;
        let salary = self.salary_with(scale);

        AuditStep {
            step_number,
            rule_id: "programmer_hourly".to_string(),
            rule_name: "Programmer Hourly Pay".to_string(),
            employee_name: self.name.clone(),
            input: serde_json::json!({
                "hourly_rate": rate.normalize().to_string(),
                "working_hour": self.working_hour.normalize().to_string()
            }),
            output: serde_json::json!({
                "salary": salary.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} hours = ${}",
                rate.normalize(),
                self.working_hour.normalize(),
                salary.normalize()
            ),
        }
    }
}
