//! Employee construction by category code.
//!
//! [`EmployeeFactory`] is the only place that knows about the concrete
//! variants. Callers hand it a category code and an [`EmployeeArgs`] and get
//! back a `Box<dyn Employee>`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeCategory, Manager, Programmer, Salesman};

/// Construction arguments for an employee.
///
/// Only programmers accept `working_hour` and only salesmen accept `sales`;
/// both default to zero when omitted.
///
/// # Example
///
/// ```
/// use monthly_payroll::factory::EmployeeArgs;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"name": "Bob", "working_hour": "10"}"#;
/// let args: EmployeeArgs = serde_json::from_str(json).unwrap();
/// assert_eq!(args, EmployeeArgs::named("Bob").working_hour(Decimal::new(10, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeArgs {
    /// The employee's name.
    pub name: String,
    /// Hours already worked (programmers only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hour: Option<Decimal>,
    /// Revenue already generated (salesmen only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Decimal>,
}

impl EmployeeArgs {
    /// Creates arguments carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            working_hour: None,
            sales: None,
        }
    }

    /// Sets the hours already worked.
    pub fn working_hour(mut self, hours: Decimal) -> Self {
        self.working_hour = Some(hours);
        self
    }

    /// Sets the revenue already generated.
    pub fn sales(mut self, sales: Decimal) -> Self {
        self.sales = Some(sales);
        self
    }
}

impl From<&str> for EmployeeArgs {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for EmployeeArgs {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Builds employees from a category code.
///
/// # Example
///
/// ```
/// use monthly_payroll::factory::EmployeeFactory;
/// use monthly_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let manager = EmployeeFactory::create("m", "Alice").unwrap();
/// assert_eq!(manager.salary(), Decimal::new(15000, 0));
///
/// assert!(EmployeeFactory::create("x", "Bob").is_none());
/// ```
pub struct EmployeeFactory;

impl EmployeeFactory {
    /// Creates an employee, returning `None` when construction fails.
    ///
    /// The code must be exactly one letter; case is ignored but surrounding
    /// whitespace is not trimmed, so `" m "` yields `None`.
    /// An unknown code yields `None` without raising anything. Invalid
    /// arguments are treated the same way. Use [`EmployeeFactory::try_create`]
    /// to find out why construction failed.
    pub fn create(code: &str, args: impl Into<EmployeeArgs>) -> Option<Box<dyn Employee>> {
        match Self::try_create(code, args) {
            Ok(employee) => Some(employee),
            Err(error) => {
                warn!(code, %error, "Employee not created");
                None
            }
        }
    }

    /// Creates an employee, reporting why construction failed.
    ///
    /// # Errors
    ///
    /// - `UnknownCategory` if `code` matches no category
    /// - `InvalidEmployee` if an amount is negative or above
    ///   [`max_amount`](crate::models::max_amount), or the variant does not
    ///   accept one of the supplied arguments
    pub fn try_create(
        code: &str,
        args: impl Into<EmployeeArgs>,
    ) -> PayrollResult<Box<dyn Employee>> {
        let category = code.parse::<EmployeeCategory>()?;
        let args = args.into();
        debug!(code, %category, name = %args.name, "Creating employee");

        let employee: Box<dyn Employee> = match category {
            EmployeeCategory::Manager => {
                reject_unused(category, "working_hour", args.working_hour)?;
                reject_unused(category, "sales", args.sales)?;
                Box::new(Manager::new(args.name))
            }
            EmployeeCategory::Programmer => {
                reject_unused(category, "sales", args.sales)?;
                Box::new(Programmer::with_hours(
                    args.name,
                    args.working_hour.unwrap_or_default(),
                )?)
            }
            EmployeeCategory::Salesman => {
                reject_unused(category, "working_hour", args.working_hour)?;
                Box::new(Salesman::with_sales(
                    args.name,
                    args.sales.unwrap_or_default(),
                )?)
            }
        };

        Ok(employee)
    }

    /// Builds a roster from `(code, args)` pairs, stopping at the first failure.
    pub fn create_roster<I, C, A>(entries: I) -> PayrollResult<Vec<Box<dyn Employee>>>
    where
        I: IntoIterator<Item = (C, A)>,
        C: AsRef<str>,
        A: Into<EmployeeArgs>,
    {
        entries
            .into_iter()
            .map(|(code, args)| Self::try_create(code.as_ref(), args))
            .collect()
    }
}

fn reject_unused(
    category: EmployeeCategory,
    field: &str,
    value: Option<Decimal>,
) -> PayrollResult<()> {
    match value {
        Some(_) => Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("not accepted for a {}", category),
        }),
        None => Ok(()),
    }
}
