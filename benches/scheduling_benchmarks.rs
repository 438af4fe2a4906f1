//! Performance benchmarks for the shift engine.
//!
//! Covers the hot paths of the scheduler:
//! - Overlap detection against a day's existing shifts
//! - Payroll aggregation over a fortnight of shifts
//! - The payroll endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;
use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tower::ServiceExt;

use shift_engine::api::{AppState, create_router};
use shift_engine::calculation::{ShiftInterval, has_overlap, summarize_payroll};
use shift_engine::config::{OverlapConfig, SchedulingConfig};
use shift_engine::models::{ClockTime, PayPeriod, Shift, ShiftDraft};
use shift_engine::store::InMemoryStore;

fn period_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
}

/// Builds `count` non-overlapping one-hour shifts on one day.
fn create_day_of_shifts(count: usize) -> Vec<Shift> {
    (0..count)
        .map(|i| {
            let hour = (i % 24) as u16;
            Shift {
                id: format!("shift_{:04}", i),
                employee_id: "emp_bench_001".to_string(),
                schedule_id: "sched_bench".to_string(),
                date: period_start(),
                start_time: ClockTime::from_hm(hour, 0).unwrap(),
                end_time: ClockTime::from_hm((hour + 1) % 24, 0).unwrap(),
                actual_hours: None,
                notes: None,
            }
        })
        .collect()
}

/// Builds a fortnight of day shifts for `employees` employees.
fn create_fortnight(employees: usize) -> Vec<Shift> {
    (0..employees)
        .flat_map(|e| {
            (0..14u64).map(move |day| Shift {
                id: format!("shift_{}_{}", e, day),
                employee_id: format!("emp_{:03}", e),
                schedule_id: "sched_bench".to_string(),
                date: period_start() + Days::new(day),
                start_time: ClockTime::parse("09:00").unwrap(),
                end_time: ClockTime::parse("17:30").unwrap(),
                actual_hours: None,
                notes: None,
            })
        })
        .collect()
}

/// Benchmark: overlap check against a growing number of shifts.
fn bench_has_overlap(c: &mut Criterion) {
    let candidate = ShiftInterval::from_times(
        ClockTime::parse("23:30").unwrap(),
        ClockTime::parse("23:45").unwrap(),
    );

    let mut group = c.benchmark_group("has_overlap");
    for count in [1usize, 8, 23] {
        let existing = create_day_of_shifts(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &existing, |b, existing| {
            b.iter(|| has_overlap(black_box(&candidate), black_box(existing)))
        });
    }
    group.finish();
}

/// Benchmark: payroll aggregation for 50 employees over 14 days.
fn bench_summarize_payroll(c: &mut Criterion) {
    let shifts = create_fortnight(50);
    let names: HashMap<String, String> = (0..50)
        .map(|e| (format!("emp_{:03}", e), format!("Employee {}", e)))
        .collect();
    let period = PayPeriod::new(period_start(), period_start() + Days::new(13));

    let mut group = c.benchmark_group("payroll");
    group.throughput(Throughput::Elements(shifts.len() as u64));
    group.bench_function("summarize_700_shifts", |b| {
        b.iter(|| summarize_payroll(black_box(&shifts), black_box(&period), &names))
    });
    group.finish();
}

/// Benchmark: GET /payroll through the router.
fn bench_payroll_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = Arc::new(InMemoryStore::new());
    let schedule_id = store.create_schedule(period_start()).unwrap().value.id;

    for shift in create_fortnight(20) {
        let draft = ShiftDraft {
            schedule_id: Some(schedule_id.clone()),
            employee_id: Some(shift.employee_id),
            date: Some(shift.date.to_string()),
            start_time: Some(shift.start_time.to_string()),
            end_time: Some(shift.end_time.to_string()),
            notes: None,
        };
        store.create_shift(&draft, &OverlapConfig::default()).unwrap();
    }

    let router = create_router(AppState::with_store(store, SchedulingConfig::default()));

    c.bench_function("payroll_endpoint_280_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/payroll?start_date=2026-01-12&end_date=2026-01-25")
                        .header("X-Principal-Id", "mgr_bench")
                        .header("X-Principal-Role", "manager")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_has_overlap,
    bench_summarize_payroll,
    bench_payroll_endpoint
);
criterion_main!(benches);
