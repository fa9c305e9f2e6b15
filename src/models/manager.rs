//! The manager variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayScale;

use super::{AuditStep, Employee, EmployeeCategory};

/// A department manager paid a fixed monthly salary.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::{Employee, Manager};
/// use rust_decimal::Decimal;
///
/// let manager = Manager::new("Alice");
/// assert_eq!(manager.salary(), Decimal::new(15000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    name: String,
}

impl Manager {
    /// Creates a manager with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Employee for Manager {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> EmployeeCategory {
        EmployeeCategory::Manager
    }

    fn salary_with(&self, scale: &PayScale) -> Decimal {
        scale.manager.monthly_salary
    }

    fn audit_step(&self, scale: &PayScale, step_number: u32) -> AuditStep {
        let salary = self.salary_with(scale);

        AuditStep {
            step_number,
            rule_id: "manager_salary".to_string(),
            rule_name: "Manager Fixed Salary".to_string(),
            employee_name: self.name.clone(),
            input: serde_json::json!({
                "monthly_salary": scale.manager.monthly_salary.normalize().to_string()
            }),
            output: serde_json::json!({
                "salary": salary.normalize().to_string()
            }),
            reasoning: format!("Fixed monthly salary ${}", salary.normalize()),
        }
    }
}
