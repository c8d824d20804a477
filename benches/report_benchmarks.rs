//! Performance benchmarks for the payroll engine.
//!
//! Measures the two heaviest paths over growing data sets:
//! - A full processing run (wage computation plus upserts)
//! - The variance and summary reports over a month of data
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tokio::runtime::Runtime;

use payroll_engine::config::EngineConfig;
use payroll_engine::models::{
    AttendanceRecord, AttendanceStatus, Employee, EmploymentType, IntakeRecord, JobRate, PayPeriod,
    PeriodStatus, ProductionRecord, QualityGrade,
};
use payroll_engine::payroll::PayrollProcessor;
use payroll_engine::reports::ReportEngine;
use payroll_engine::store::{DateRange, MemoryStore};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

/// Seeds a store with `employee_count` employees, each attending (or
/// producing) every day of January.
async fn seeded_store(employee_count: i64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store
        .add_pay_period(PayPeriod {
            id: 1,
            name: "Jan 2026".to_string(),
            start_date: date(1),
            end_date: date(31),
            status: PeriodStatus::Draft,
        })
        .await;
    store
        .add_job_rate(JobRate {
            id: 1,
            job_type: "shelling".to_string(),
            rate_per_unit: Decimal::from(3_000),
            unit: "kg".to_string(),
            is_active: true,
        })
        .await;

    let mut next_id: i64 = 1;
    for employee_id in 1..=employee_count {
        let contract = employee_id % 2 == 0;
        store
            .add_employee(Employee {
                id: employee_id,
                code: format!("EMP-{:03}", employee_id),
                name: format!("Employee {}", employee_id),
                employment_type: if contract {
                    EmploymentType::Contract
                } else {
                    EmploymentType::Daily
                },
                daily_rate: (!contract).then(|| Decimal::from(80_000)),
                is_active: true,
            })
            .await;

        for day in 1..=31 {
            if contract {
                store
                    .add_production(ProductionRecord {
                        id: next_id,
                        employee_id,
                        date: date(day),
                        production_type: "shelling".to_string(),
                        quantity: Decimal::from(40),
                        unit: "kg".to_string(),
                    })
                    .await;
            } else {
                store
                    .add_attendance(AttendanceRecord {
                        id: next_id,
                        employee_id,
                        date: date(day),
                        check_in: None,
                        check_out: None,
                        status: AttendanceStatus::Present,
                        hours_worked: Some(Decimal::from(8)),
                        meal_allowance: day % 4 == 0,
                    })
                    .await;
            }
            next_id += 1;
        }
    }

    for day in 1..=31 {
        store
            .add_intake(IntakeRecord {
                id: day as i64,
                date: date(day),
                distributor_id: None,
                weight: Decimal::from(1_000),
                grade: QualityGrade::Standard,
            })
            .await;
    }

    store
}

fn bench_process(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("payroll_process");

    for employee_count in [10, 50, 200] {
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employee_count,
            |b, &count| {
                b.to_async(&rt).iter(|| async {
                    let store = seeded_store(count).await;
                    let processor = PayrollProcessor::new(store, EngineConfig::default());
                    processor.process(1).await.unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = rt.block_on(seeded_store(200));
    let engine = ReportEngine::new(store, EngineConfig::default());
    let range = DateRange::new(date(1), date(31)).unwrap();

    let mut group = c.benchmark_group("reports");
    group.bench_function("variance_month", |b| {
        b.to_async(&rt)
            .iter(|| async { engine.variance_report(range).await.unwrap() });
    });
    group.bench_function("summary_month", |b| {
        b.to_async(&rt)
            .iter(|| async { engine.overall_summary(range).await.unwrap() });
    });
    group.bench_function("production_month", |b| {
        b.to_async(&rt)
            .iter(|| async { engine.production_report(range).await.unwrap() });
    });
    group.finish();
}

criterion_group!(benches, bench_process, bench_reports);
criterion_main!(benches);
