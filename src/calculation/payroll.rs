//! Payroll run over a roster of employees.
//!
//! This module computes every employee's salary polymorphically, totals the
//! results per category and records one audit step per employee.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::PayScale;
use crate::models::{
    AuditTrace, CategoryTotal, Employee, EmployeeCategory, PayLine, PayTotals, PayrollRun,
};

/// The engine version stamped on every run.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs payroll for every employee under the given pay scale.
///
/// Pay lines and audit steps follow roster order; audit step numbers start
/// at 1. An empty roster produces zero totals.
///
/// # Examples
///
/// ```
/// use monthly_payroll::calculation::run_payroll;
/// use monthly_payroll::config::PayScale;
/// use monthly_payroll::factory::{EmployeeArgs, EmployeeFactory};
/// use rust_decimal::Decimal;
///
/// let roster = EmployeeFactory::create_roster(vec![
///     ("M", EmployeeArgs::named("Alice")),
///     ("S", EmployeeArgs::named("Carol").sales(Decimal::new(10000, 0))),
/// ])
/// .unwrap();
///
/// let run = run_payroll(&roster, &PayScale::default());
/// assert_eq!(run.totals.gross_pay, Decimal::new(17300, 0));
/// assert_eq!(run.audit_trace.steps.len(), 2);
/// ```
pub fn run_payroll(employees: &[Box<dyn Employee>], scale: &PayScale) -> PayrollRun {
    let start = Instant::now();
    let run_id = Uuid::new_v4();

    let mut pay_lines = Vec::with_capacity(employees.len());
    let mut steps = Vec::with_capacity(employees.len());

    for (index, employee) in employees.iter().enumerate() {
        let amount = employee.salary_with(scale);
        debug!(
            run_id = %run_id,
            employee = employee.name(),
            category = %employee.category(),
            amount = %amount,
            "Computed salary"
        );

        steps.push(employee.audit_step(scale, index as u32 + 1));
        pay_lines.push(PayLine {
            employee_name: employee.name().to_string(),
            category: employee.category(),
            amount,
        });
    }

    let totals = summarize(&pay_lines);
    info!(
        run_id = %run_id,
        headcount = totals.headcount,
        gross_pay = %totals.gross_pay,
        "Payroll run complete"
    );

    PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        pay_lines,
        totals,
        audit_trace: AuditTrace {
            steps,
            duration_us: start.elapsed().as_micros() as u64,
        },
    }
}

/// Totals pay lines overall and per category.
pub fn summarize(pay_lines: &[PayLine]) -> PayTotals {
    let by_category = EmployeeCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let lines = pay_lines.iter().filter(|line| line.category == category);
            let (headcount, amount) = lines.fold((0, Decimal::ZERO), |(count, sum), line| {
                (count + 1, sum + line.amount)
            });
            (headcount > 0).then_some(CategoryTotal {
                category,
                headcount,
                amount,
            })
        })
        .collect();

    PayTotals {
        gross_pay: pay_lines.iter().map(|line| line.amount).sum(),
        headcount: pay_lines.len(),
        by_category,
    }
}
