//! Performance benchmarks for search sessions.
//!
//! These benchmarks contrast the one-time engine-binding cost paid at session
//! construction against the per-query cost on an already-bound session, and
//! measure how query cost moves with dataset size and threshold strictness.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use siftview::{MatchConfig, SearchSession};
use std::time::Duration;

/// Build a deterministic synthetic dataset of the given size.
fn synthetic_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "fullName": format!("Person Number{} Example", i),
                "company": format!("Company {}", i % 97),
            })
        })
        .collect()
}

/// Benchmark session construction, where the engine binding is built.
fn bench_session_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_bind");

    for size in [100, 1_000, 10_000] {
        let records = synthetic_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                SearchSession::<Value>::new(
                    records.clone(),
                    MatchConfig::new(["fullName", "id"]),
                )
                .expect("session should bind")
            });
        });
    }

    group.finish();
}

/// Benchmark repeated searches on an already-bound session.
fn bench_search_on_bound_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_bound");

    for size in [100, 1_000, 10_000] {
        let mut session =
            SearchSession::<Value>::new(synthetic_records(size), MatchConfig::new(["fullName", "id"]))
                .expect("session should bind");

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                session.search("number42");
                session.result().len()
            });
        });
    }

    group.finish();
}

/// Benchmark search cost across threshold strictness levels.
fn bench_search_thresholds(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_thresholds");

    for threshold in [0.0, 0.2, 0.4] {
        let mut session = SearchSession::<Value>::new(
            synthetic_records(1_000),
            MatchConfig::new(["fullName", "id"]).with_threshold(threshold),
        )
        .expect("session should bind");

        group.bench_with_input(
            BenchmarkId::from_parameter(threshold),
            &threshold,
            |b, _| {
                b.iter(|| {
                    session.search("person number");
                    session.result().len()
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_session_bind,
        bench_search_on_bound_session,
        bench_search_thresholds
}

criterion_main!(benches);
