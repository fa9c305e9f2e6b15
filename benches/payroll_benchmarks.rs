//! Performance benchmarks for the payroll engine.
//!
//! Measures factory construction and payroll runs over rosters of
//! increasing size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use monthly_payroll::calculation::run_payroll;
use monthly_payroll::config::PayScale;
use monthly_payroll::factory::{EmployeeArgs, EmployeeFactory};
use monthly_payroll::models::Employee;

/// Builds a roster cycling through all three categories.
fn create_roster(size: usize) -> Vec<Box<dyn Employee>> {
    let entries = (0..size).map(|i| match i % 3 {
        0 => ("M", EmployeeArgs::named(format!("manager_{}", i))),
        1 => (
            "P",
            EmployeeArgs::named(format!("programmer_{}", i)).working_hour(Decimal::new(160, 0)),
        ),
        _ => (
            "S",
            EmployeeArgs::named(format!("salesman_{}", i)).sales(Decimal::new(1_234_567, 2)),
        ),
    });

    EmployeeFactory::create_roster(entries).expect("Failed to build roster")
}

fn bench_factory(c: &mut Criterion) {
    c.bench_function("factory_create_programmer", |b| {
        b.iter(|| {
            EmployeeFactory::create(
                black_box("p"),
                EmployeeArgs::named("Bob").working_hour(Decimal::new(10, 0)),
            )
        })
    });
}

fn bench_payroll_run(c: &mut Criterion) {
    let scale = PayScale::default();
    let mut group = c.benchmark_group("payroll_run");

    for size in [10usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| run_payroll(black_box(roster), &scale))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factory, bench_payroll_run);
criterion_main!(benches);
