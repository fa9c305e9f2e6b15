//! The employee capability and category codes.
//!
//! This module defines the [`Employee`] trait shared by every variant and
//! the [`EmployeeCategory`] enum naming the variants.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayScale;
use crate::error::{PayrollError, PayrollResult};

use super::AuditStep;

/// The category an employee belongs to.
///
/// Each category has a single-character code used by the factory:
/// `M` for managers, `P` for programmers and `S` for salesmen.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::EmployeeCategory;
///
/// let category: EmployeeCategory = "p".parse().unwrap();
/// assert_eq!(category, EmployeeCategory::Programmer);
/// assert_eq!(category.code(), 'P');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// Department manager on a fixed monthly salary.
    Manager,
    /// Programmer paid by the hour.
    Programmer,
    /// Salesman paid a base salary plus commission.
    Salesman,
}

impl EmployeeCategory {
    /// All categories in reporting order.
    pub const ALL: [EmployeeCategory; 3] = [
        EmployeeCategory::Manager,
        EmployeeCategory::Programmer,
        EmployeeCategory::Salesman,
    ];

    /// Returns the upper-case code for this category.
    pub fn code(self) -> char {
        match self {
            EmployeeCategory::Manager => 'M',
            EmployeeCategory::Programmer => 'P',
            EmployeeCategory::Salesman => 'S',
        }
    }

    /// Looks up a category by code, ignoring case.
    ///
    /// Returns `None` when the code matches no category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "M" => Some(EmployeeCategory::Manager),
            "P" => Some(EmployeeCategory::Programmer),
            "S" => Some(EmployeeCategory::Salesman),
            _ => None,
        }
    }

    /// Returns the snake_case name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeCategory::Manager => "manager",
            EmployeeCategory::Programmer => "programmer",
            EmployeeCategory::Salesman => "salesman",
        }
    }
}

impl fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeCategory {
    type Err = PayrollError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| PayrollError::UnknownCategory {
            code: code.to_string(),
        })
    }
}

/// The capability every employee variant provides: computing monthly pay.
///
/// `Employee` is a trait, so it has no constructor of its own; only the
/// concrete variants can be built:
///
/// ```compile_fail
/// use monthly_payroll::models::Employee;
///
/// let employee = Employee::new("Alice");
/// ```
///
/// Callers normally obtain a `Box<dyn Employee>` from
/// [`EmployeeFactory`](crate::factory::EmployeeFactory) and use it
/// polymorphically.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::{Employee, Manager, Programmer};
/// use rust_decimal::Decimal;
///
/// let staff: Vec<Box<dyn Employee>> = vec![
///     Box::new(Manager::new("Alice")),
///     Box::new(Programmer::with_hours("Bob", Decimal::new(10, 0)).unwrap()),
/// ];
/// let total: Decimal = staff.iter().map(|e| e.salary()).sum();
/// assert_eq!(total, Decimal::new(17000, 0));
/// ```
pub trait Employee: fmt::Debug + Send + Sync {
    /// The employee's name.
    fn name(&self) -> &str;

    /// The category this employee belongs to.
    fn category(&self) -> EmployeeCategory;

    /// Computes the monthly salary under the given pay scale.
    ///
    /// # Panics
    ///
    /// Panics on overflow if a figure in `scale` exceeds
    /// [`max_scale_figure`](crate::config::max_scale_figure). Scales loaded
    /// through [`ConfigLoader`](crate::config::ConfigLoader) are always in range.
    fn salary_with(&self, scale: &PayScale) -> Decimal;

    /// Records how the salary was computed as an audit step.
    fn audit_step(&self, scale: &PayScale, step_number: u32) -> AuditStep;

    /// Computes the monthly salary under the standard pay scale.
    fn salary(&self) -> Decimal {
        self.salary_with(&PayScale::default())
    }
}

/// The largest hours or sales figure an employee may carry.
///
/// Multiplying it by any pay-scale figure up to
/// [`max_scale_figure`](crate::config::max_scale_figure) stays well inside
/// `Decimal` range.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Rejects negative amounts and amounts above [`max_amount`].
pub(crate) fn checked_amount(field: &str, value: Decimal) -> PayrollResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    if value > max_amount() {
        return Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", max_amount(), value),
        });
    }
    Ok(value)
}

/// Adds a checked amount to a running total, keeping the total in range.
pub(crate) fn accumulate(field: &str, total: Decimal, amount: Decimal) -> PayrollResult<Decimal> {
    let amount = checked_amount(field, amount)?;
    match total.checked_add(amount) {
        Some(sum) if sum <= max_amount() => Ok(sum),
        _ => Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("total overflows {}", max_amount()),
        }),
    }
}
