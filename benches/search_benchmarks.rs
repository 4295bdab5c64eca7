//! Performance benchmarks for proximity search.
//!
//! These benchmarks measure the cost of the three scans a search is built
//! from — similarity scoring, radius filtering, record reconciliation —
//! and the end-to-end pipeline at different dataset sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nefesh_mcp_server::domain::{Coordinate, TherapistId};
use nefesh_mcp_server::matching::token_sort_ratio;
use nefesh_mcp_server::models::Therapist;
use nefesh_mcp_server::{Gazetteer, ProximitySearch};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Build a synthetic gazetteer of `n` cities on a deterministic grid
/// around Tel Aviv.
fn synthetic_gazetteer(n: usize) -> Gazetteer {
    let mut cities = HashMap::with_capacity(n);
    for i in 0..n {
        let lat = 32.0 + (i % 100) as f64 * 0.01;
        let lon = 34.5 + (i / 100) as f64 * 0.01;
        cities.insert(
            format!("City {} Heights", i),
            Coordinate::new(lat, lon).unwrap(),
        );
    }
    Gazetteer::new(cities)
}

/// Build `n` records spread over the synthetic cities, with noisy spellings.
fn synthetic_records(n: usize, cities: usize) -> Vec<Therapist> {
    (0..n)
        .map(|i| Therapist {
            id: TherapistId::new(i as u64 + 1).unwrap(),
            region: String::new(),
            name: format!("Therapist {}", i),
            // Word order scrambled on purpose; the matcher has to work for it
            city: format!("Heights City-{}", i % cities),
            profession: String::new(),
            notes: String::new(),
            languages: String::new(),
            phone: String::new(),
            address: String::new(),
            gender: String::new(),
        })
        .collect()
}

/// Benchmark the raw token-sort similarity scorer.
fn bench_token_sort_ratio(c: &mut Criterion) {
    c.bench_function("token_sort_ratio", |b| {
        b.iter(|| token_sort_ratio("Tel-Aviv Yafo ", "yafo tel aviv"));
    });
}

/// Benchmark the radius scan over gazetteers of different sizes.
fn bench_cities_within(c: &mut Criterion) {
    let mut group = c.benchmark_group("cities_within");

    for size in [100, 1000, 5000].iter() {
        let gazetteer = synthetic_gazetteer(*size);
        let origin = Coordinate::new(32.05, 34.75).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| gazetteer.cities_within(&origin, 25.0));
        });
    }

    group.finish();
}

/// Benchmark the full search pipeline at different roster sizes.
fn bench_end_to_end_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("proximity_search");

    let gazetteer = Arc::new(synthetic_gazetteer(500));
    let search = ProximitySearch::new(gazetteer, 70, 80);

    for size in [100, 500, 2000].iter() {
        let records = synthetic_records(*size, 500);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| search.search("City 0 Heights", 25, records.clone()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(50);
    targets = bench_token_sort_ratio,
        bench_cities_within,
        bench_end_to_end_search
}

criterion_main!(benches);
