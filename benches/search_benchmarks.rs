//! Performance benchmarks for search functionality.
//!
//! These benchmarks measure the two costs that matter for the serving
//! path: one-time index construction at startup, and per-request query
//! latency against a built index at various dataset sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use switchboard::search::{IndexHandle, SearchIndex, TokenIndex};
use switchboard::services::{DirectoryService, DirectoryServiceImpl};
use switchboard::Department;
use tokio::runtime::Runtime;

/// Generate a synthetic directory of the given size.
fn synthetic_departments(count: usize) -> Vec<Department> {
    let kinds = [
        "Fire", "Police", "Parks", "Water", "Sewer", "Records", "Permits", "Transit",
    ];
    let mut departments: Vec<Department> = (0..count)
        .map(|i| {
            let kind = kinds[i % kinds.len()];
            let mut dept = Department::new(format!("{} Department {}", kind, i));
            dept.email = format!("{}{}@example.gov", kind.to_lowercase(), i);
            dept
        })
        .collect();
    departments.sort_by(|a, b| a.name.cmp(&b.name));
    switchboard::assign_slugs(&mut departments);
    departments
}

/// Benchmark index construction at startup.
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [50, 500, 5000].iter() {
        let departments = synthetic_departments(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| TokenIndex::build(departments.clone()));
        });
    }

    group.finish();
}

/// Benchmark query latency against a built index.
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [50, 500, 5000].iter() {
        let index = TokenIndex::build(synthetic_departments(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| index.query("fire department").unwrap());
        });
    }

    group.finish();
}

/// Benchmark slug lookup against a built index.
fn bench_slug_lookup(c: &mut Criterion) {
    let index = TokenIndex::build(synthetic_departments(5000));
    let slug = index.departments()[0].slug.clone();

    c.bench_function("slug_lookup", |b| {
        b.iter(|| index.lookup_slug(&slug).unwrap());
    });
}

/// Benchmark the full service path, as the HTTP layer drives it.
fn bench_service_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let handle = IndexHandle::new(Arc::new(TokenIndex::build(synthetic_departments(500))));
    let service = DirectoryServiceImpl::new(handle);

    c.bench_function("service_search", |b| {
        b.to_async(&rt)
            .iter(|| async { service.search("fire department").await.unwrap() });
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_query,
    bench_slug_lookup,
    bench_service_search
);
criterion_main!(benches);
