//! Benchmarks for the derivation and achievement paths

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stridelog::achievements::evaluate;
use stridelog::progression::Progression;
use stridelog::run::Run;
use stridelog::stats::{average_pace, total_distance, total_duration};

fn sample_runs(count: u64) -> Vec<Run> {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (1..=count)
        .map(|id| {
            let distance = 3.0 + (id % 20) as f64 * 0.5;
            let duration = distance * (4.5 + (id % 4) as f64 * 0.5);
            Run::new(id, distance, duration, date)
        })
        .collect()
}

fn bench_derivations(c: &mut Criterion) {
    let runs = sample_runs(1000);

    c.bench_function("total_distance 1k runs", |b| {
        b.iter(|| total_distance(black_box(&runs)))
    });
    c.bench_function("total_duration 1k runs", |b| {
        b.iter(|| total_duration(black_box(&runs)))
    });
    c.bench_function("average_pace 1k runs", |b| {
        b.iter(|| average_pace(black_box(&runs)))
    });
}

fn bench_achievements(c: &mut Criterion) {
    let runs = sample_runs(1000);
    let mut progression = Progression::new();
    for _ in 0..runs.len() {
        progression.record_run(50);
    }

    c.bench_function("evaluate achievements 1k runs", |b| {
        b.iter(|| evaluate(black_box(&runs), black_box(&progression)))
    });
}

criterion_group!(benches, bench_derivations, bench_achievements);
criterion_main!(benches);
