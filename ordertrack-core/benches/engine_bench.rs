//! Criterion benchmark for the full compute pipeline.
//!
//! Builds a deterministic table mixing chained suffix families, plain
//! date-fallback rows, and excluded rows, then measures `compute_orders`
//! end to end at a few sizes.

use chrono::{NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ordertrack_core::config::EngineConfig;
use ordertrack_core::domain::RawOrderRecord;
use ordertrack_core::engine::compute_orders;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn build_records(n: usize) -> Vec<RawOrderRecord> {
    (0..n)
        .map(|i| {
            let (order_number, customer) = match i % 5 {
                0 => (format!("{}-{:02}", 1000 + i / 5, i % 4), "COLINA".to_string()),
                1 => (format!("{}", 1000 + i / 5), "COLINA".to_string()),
                4 => (format!("{}", 5000 + i), "PRIME".to_string()),
                _ => (format!("{}", 9000 + i), "ACME".to_string()),
            };
            RawOrderRecord {
                order_number,
                customer,
                unit_price: format!("{}.50", 10 + i % 90),
                quantity: format!("{}", 1 + i % 12),
                unit_of_measure: if i % 11 == 0 { "KG" } else { "UN" }.to_string(),
                order_date: "01/03/2024".into(),
                invoiced_date: if i % 3 == 0 {
                    "05/03/2024".into()
                } else {
                    String::new()
                },
                expected_delivery: if i % 2 == 0 {
                    "10/03/2024".into()
                } else {
                    "20/03/2024".into()
                },
                extra: vec![],
            }
        })
        .collect()
}

fn bench_compute_orders(c: &mut Criterion) {
    let config = EngineConfig::default();
    let mut group = c.benchmark_group("compute_orders");
    for size in [1_000usize, 10_000] {
        let records = build_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| compute_orders(records, reference(), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_orders);
criterion_main!(benches);
