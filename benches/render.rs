use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shapefmt::to_string;
use std::collections::BTreeMap;

fn benchmark_render_scalar(c: &mut Criterion) {
    c.bench_function("render_scalar", |b| b.iter(|| to_string(black_box(&42i64))));
}

fn benchmark_render_text(c: &mut Criterion) {
    let text = "a reasonably sized diagnostic message".to_string();

    c.bench_function("render_text", |b| b.iter(|| to_string(black_box(&text))));
}

fn benchmark_render_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sequence");

    for size in [10, 100, 1000, 10000].iter() {
        let values: Vec<i32> = (0..*size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&values)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_nested");

    for size in [10, 50, 100].iter() {
        // vector<map<int, vector<double>>> with `size` maps of 4 entries
        let complex: Vec<BTreeMap<i32, Vec<f64>>> = (0..*size)
            .map(|i| {
                (0..4)
                    .map(|k| (k, vec![f64::from(i) + 0.1, f64::from(i) + 0.2]))
                    .collect()
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&complex)))
        });
    }
    group.finish();
}

fn benchmark_render_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_mapping");

    for size in [10, 100, 1000].iter() {
        let map: BTreeMap<i32, String> = (0..*size).map(|i| (i, format!("value{i}"))).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&map)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_scalar,
    benchmark_render_text,
    benchmark_render_sequence,
    benchmark_render_nested,
    benchmark_render_mapping
);
criterion_main!(benches);
