use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use keysort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn random_rows(count: usize) -> Vec<(String, i64)> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(5..20);
            let name: String = (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect();
            (name, rng.random_range(-1000..1000))
        })
        .collect()
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Key");
    group.sample_size(10);

    let rows = random_rows(10_000);

    group.bench_function("string::sort", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| string::sort(black_box(&mut data), |r| r.0.as_str()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("string::sort_stable", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| string::sort_stable(black_box(&mut data), |r| r.0.as_str()),
            BatchSize::SmallInput,
        )
    });

    // Hand-written comparator for reference
    group.bench_function("slice::sort_unstable_by", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| data.sort_unstable_by(|a, b| a.0.cmp(&b.0)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_tuples(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tuple Key");
    group.sample_size(10);

    let rows = random_rows(10_000);

    group.bench_function("tuple::sort", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| {
                tuple::sort(black_box(&mut data), |r| {
                    vec![r.1.into(), r.0.as_str().into()]
                })
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("argsort + apply_permutation", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| {
                let order = argsort(&by_position(data.len(), |i| {
                    vec![Component::from(data[i].1), Component::from(data[i].0.as_str())]
                }));
                apply_permutation(black_box(&mut data), order);
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable_by", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| data.sort_unstable_by(|a, b| (a.1, &a.0).cmp(&(b.1, &b.0))),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_strings, bench_tuples);
criterion_main!(benches);
