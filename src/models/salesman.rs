//! The salesman variant.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayScale;
use crate::error::PayrollResult;

use super::employee::{accumulate, checked_amount};
use super::{AuditStep, Employee, EmployeeCategory};

/// A salesman paid a base salary plus commission on sales.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::{Employee, Salesman};
/// use rust_decimal::Decimal;
///
/// let salesman = Salesman::with_sales("Carol", Decimal::new(10000, 0)).unwrap();
/// assert_eq!(salesman.salary(), Decimal::new(2300, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salesman {
    name: String,
    sales: Decimal,
}

impl Salesman {
    /// Creates a salesman with no sales recorded.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sales: Decimal::ZERO,
        }
    }

    /// Creates a salesman with sales already made.
    ///
    /// Returns `InvalidEmployee` if `sales` is negative or above
    /// [`max_amount`](crate::models::max_amount).
    pub fn with_sales(name: impl Into<String>, sales: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            name: name.into(),
            sales: checked_amount("sales", sales)?,
        })
    }

    /// Adds revenue from a sale to the running total.
    ///
    /// Returns `InvalidEmployee` if `amount` is negative or the total would pass
    /// [`max_amount`](crate::models::max_amount); the total is left unchanged.
    pub fn record_sale(&mut self, amount: Decimal) -> PayrollResult<()> {
        self.sales = accumulate("sales", self.sales, amount)?;
        Ok(())
    }

    /// Returns the revenue generated so far.
    pub fn sales(&self) -> Decimal {
        self.sales
    }

    fn commission(&self, scale: &PayScale) -> Decimal {
        self.sales * scale.salesman.commission_rate
    }
}

impl Employee for Salesman {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> EmployeeCategory {
        EmployeeCategory::Salesman
    }

    fn salary_with(&self, scale: &PayScale) -> Decimal {
        scale.salesman.base_salary + self.commission(scale)
    }

    fn audit_step(&self, scale: &PayScale, step_number: u32) -> AuditStep {
        let base = scale.salesman.base_salary;
        let rate = scale.salesman.commission_rate;
        let commission = self.commission(scale);
        let salary = base + commission;

        AuditStep {
            step_number,
            rule_id: "salesman_commission".to_string(),
            rule_name: "Salesman Base Plus Commission".to_string(),
            employee_name: self.name.clone(),
            input: serde_json::json!({
                "base_salary": base.normalize().to_string(),
                "commission_rate": rate.normalize().to_string(),
                "sales": self.sales.normalize().to_string()
            }),
            output: serde_json::json!({
                "commission": commission.normalize().to_string(),
                "salary": salary.normalize().to_string()
            }),
            reasoning: format!(
                "${} + ${} x {} = ${}",
                base.normalize(),
                self.sales.normalize(),
                rate.normalize(),
                salary.normalize()
            ),
        }
    }
}
