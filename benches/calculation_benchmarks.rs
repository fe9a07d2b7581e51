//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that the calculation pipeline meets its
//! performance targets:
//! - Single daily summary: < 10μs mean
//! - Full month (31 days) of daily summaries: < 1ms mean
//! - Monthly aggregation of 31 days: < 100μs mean
//! - Batch of 100 employee-months: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use attendance_engine::calculation::{compute_daily_summary, compute_monthly_summary};
use attendance_engine::config::WorkPolicy;
use attendance_engine::models::{AttendanceType, HolidayType, SummarizedDay, WorkDayRecord};

/// Creates a plain 9:00-18:00 record with a one-hour break.
fn standard_record() -> WorkDayRecord {
    WorkDayRecord {
        start_time: Some("9:00".to_string()),
        end_time: Some("18:00".to_string()),
        break_time: Some("1:00".to_string()),
        ..Default::default()
    }
}

/// Creates an 18:00-05:00 midnight-crossing record with a night break.
fn night_record() -> WorkDayRecord {
    WorkDayRecord {
        start_time: Some("18:00".to_string()),
        end_time: Some("5:00".to_string()),
        night_break_time: Some("1:00".to_string()),
        ..Default::default()
    }
}

/// Builds a realistic month: weekdays worked, weekends off, one overtime
/// day, one night shift, one paid leave day.
fn build_month(policy: &WorkPolicy) -> Vec<SummarizedDay> {
    (0..31)
        .map(|day| {
            let (record, attendance, holiday) = match day % 7 {
                5 | 6 => (WorkDayRecord::default(), None, Some(HolidayType::Scheduled)),
                3 => (night_record(), None, None),
                2 => (
                    WorkDayRecord::default(),
                    Some(AttendanceType::PaidLeave),
                    None,
                ),
                _ => (standard_record(), None, None),
            };
            SummarizedDay {
                attendance_type: attendance,
                holiday_type: holiday,
                summary: compute_daily_summary(&record, policy),
            }
        })
        .collect()
}

fn bench_daily_summary(c: &mut Criterion) {
    let policy = WorkPolicy::default();
    let standard = standard_record();
    let night = night_record();

    let mut group = c.benchmark_group("daily_summary");
    group.bench_function("standard_day", |b| {
        b.iter(|| compute_daily_summary(black_box(&standard), black_box(&policy)))
    });
    group.bench_function("midnight_crossing", |b| {
        b.iter(|| compute_daily_summary(black_box(&night), black_box(&policy)))
    });
    group.finish();
}

fn bench_monthly_summary(c: &mut Criterion) {
    let policy = WorkPolicy::default();
    let month = build_month(&policy);

    let mut group = c.benchmark_group("monthly_summary");
    group.throughput(Throughput::Elements(month.len() as u64));
    group.bench_function("aggregate_31_days", |b| {
        b.iter(|| compute_monthly_summary(black_box(&month)))
    });
    group.finish();
}

fn bench_employee_month_batches(c: &mut Criterion) {
    let policy = WorkPolicy::default();
    let records: Vec<WorkDayRecord> = (0..31)
        .map(|day| if day % 7 == 3 { night_record() } else { standard_record() })
        .collect();

    let mut group = c.benchmark_group("employee_month_batches");
    for batch_size in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    for _ in 0..batch_size {
                        let days: Vec<SummarizedDay> = records
                            .iter()
                            .map(|record| SummarizedDay {
                                attendance_type: None,
                                holiday_type: None,
                                summary: compute_daily_summary(black_box(record), &policy),
                            })
                            .collect();
                        black_box(compute_monthly_summary(&days));
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_daily_summary,
    bench_monthly_summary,
    bench_employee_month_batches
);
criterion_main!(benches);
