//! Benchmarks for present value, risk metrics and the yield solver.
//!
//! Run with: cargo bench -p immunize-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use immunize_analytics::prelude::*;
use immunize_math::solvers::RootMethod;

fn bench_present_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("present_value");
    for periods in [6_usize, 30, 120] {
        let flows = bond_cash_flow(0.05, periods, 1.0, 1).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(periods), &flows, |b, flows| {
            b.iter(|| present_value(black_box(flows), black_box(0.06), 1));
        });
    }
    group.finish();
}

fn bench_risk(c: &mut Criterion) {
    let flows = bond_cash_flow(0.05, 30, 1.0, 2).unwrap();
    c.bench_function("duration_30_periods", |b| {
        b.iter(|| duration(black_box(&flows), black_box(0.06), 2));
    });
    c.bench_function("convexity_30_periods", |b| {
        b.iter(|| convexity(black_box(&flows), black_box(0.06), 2));
    });
}

fn bench_yield(c: &mut Criterion) {
    let flows = bond_cash_flow(0.07, 20, 1.0, 1).unwrap();
    let price = present_value(&flows, 0.09, 1).unwrap();

    let mut group = c.benchmark_group("yield_to_maturity");
    for method in [RootMethod::Newton, RootMethod::Hybrid] {
        let solver = YieldSolver::new().with_method(method).with_bounds(-0.5, 1.0);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{method:?}")),
            &solver,
            |b, solver| b.iter(|| solver.solve(black_box(price), black_box(&flows))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_present_value, bench_risk, bench_yield);
criterion_main!(benches);
