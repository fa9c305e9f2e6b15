//! Payroll run result models.
//!
//! This module contains the [`PayrollRun`] type and its associated structures
//! that capture all outputs from a payroll run, including pay lines, totals
//! and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeCategory;

/// A single employee's pay for the month.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::{EmployeeCategory, PayLine};
/// use rust_decimal::Decimal;
///
/// let line = PayLine {
///     employee_name: "Alice".to_string(),
///     category: EmployeeCategory::Manager,
///     amount: Decimal::new(15000, 0),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The employee's name.
    pub employee_name: String,
    /// The employee's category.
    pub category: EmployeeCategory,
    /// The monthly salary.
    pub amount: Decimal,
}

/// Headcount and pay for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category being summarised.
    pub category: EmployeeCategory,
    /// Number of employees in the category.
    pub headcount: usize,
    /// Sum of their salaries.
    pub amount: Decimal,
}

/// Aggregated totals for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// The sum of every pay line.
    pub gross_pay: Decimal,
    /// Number of employees paid.
    pub headcount: usize,
    /// Totals per category present in the run, in category order.
    pub by_category: Vec<CategoryTotal>,
}

/// A single step in the audit trace recording how one salary was computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the pay rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The employee the rule was applied to.
    pub employee_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use monthly_payroll::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 42,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// One pay line per employee, in roster order.
    pub pay_lines: Vec<PayLine>,
    /// Aggregated totals.
    pub totals: PayTotals,
    /// Audit trace of every salary computed.
    pub audit_trace: AuditTrace,
}

impl PayrollRun {
    /// Returns the pay line for the named employee, if present.
    pub fn line_for(&self, employee_name: &str) -> Option<&PayLine> {
        self.pay_lines
            .iter()
            .find(|line| line.employee_name == employee_name)
    }

    /// Returns the totals for a category, if any employee of it was paid.
    pub fn category_total(&self, category: EmployeeCategory) -> Option<&CategoryTotal> {
        self.totals
            .by_category
            .iter()
            .find(|total| total.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_run() -> PayrollRun {
        PayrollRun {
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            pay_lines: vec![
                PayLine {
                    employee_name: "Alice".to_string(),
                    category: EmployeeCategory::Manager,
                    amount: dec("15000"),
                },
                PayLine {
                    employee_name: "Bob".to_string(),
                    category: EmployeeCategory::Programmer,
                    amount: dec("2000"),
                },
            ],
            totals: PayTotals {
                gross_pay: dec("17000"),
                headcount: 2,
                by_category: vec![
                    CategoryTotal {
                        category: EmployeeCategory::Manager,
                        headcount: 1,
                        amount: dec("15000"),
                    },
                    CategoryTotal {
                        category: EmployeeCategory::Programmer,
                        headcount: 1,
                        amount: dec("2000"),
                    },
                ],
            },
            audit_trace: AuditTrace {
                steps: vec![],
                duration_us: 10,
            },
        }
    }

    #[test]
    fn test_line_for_finds_employee() {
        let run = create_sample_run();
        assert_eq!(run.line_for("Bob").unwrap().amount, dec("2000"));
        assert!(run.line_for("Nobody").is_none());
    }

    #[test]
    fn test_category_total_lookup() {
        let run = create_sample_run();
        assert_eq!(
            run.category_total(EmployeeCategory::Manager).unwrap().amount,
            dec("15000")
        );
        assert!(run.category_total(EmployeeCategory::Salesman).is_none());
    }

    #[test]
    fn test_pay_line_serializes_amount_as_string() {
        let run = create_sample_run();
        let json = serde_json::to_value(&run.pay_lines[0]).unwrap();

        assert_eq!(json["employee_name"], "Alice");
        assert_eq!(json["category"], "manager");
        assert_eq!(json["amount"], "15000");
    }

    #[test]
    fn test_run_serialization_round_trip() {
        let run = create_sample_run();
        let json = serde_json::to_string(&run).unwrap();
        let deserialized: PayrollRun = serde_json::from_str(&json).unwrap();
        assert_eq!(run, deserialized);
    }
}
