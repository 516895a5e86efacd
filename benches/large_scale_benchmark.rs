use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use keysort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Numeric Keys");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    let rows: Vec<(u64, f64)> = (0..count).map(|_| (rng.random(), rng.random())).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("uint::sort", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| uint::sort(black_box(&mut data), |r| r.0),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("float::sort", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| float::sort(black_box(&mut data), |r| r.1),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable_by_key", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| data.sort_unstable_by_key(|r| r.0),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_numbers);
criterion_main!(benches);
