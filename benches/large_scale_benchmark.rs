use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use keyspan::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

type Row = (u32, u32, u64);

fn bench_build_1m(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Rows");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30)); // Sorting dominates setup

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    let rows: Vec<Row> = (0..count)
        .map(|_| {
            (
                rng.random_range(0..1_000),
                rng.random_range(0..1_000),
                rng.random(),
            )
        })
        .collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("SortedList::new (exact size)", |b| {
        b.iter_batched(
            || rows.clone(),
            |data| {
                SortedList::new(
                    black_box(data),
                    (
                        key(|r: &Row| &r.0),
                        key(|r: &Row| &r.1),
                        key(|r: &Row| &r.2),
                    ),
                )
                .map(|list| list.len())
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("SortedList::new (unknown size)", |b| {
        b.iter_batched(
            || rows.clone(),
            |data| {
                SortedList::new(
                    black_box(data).into_iter().filter(|r| r.2 != 0),
                    (
                        key(|r: &Row| &r.0),
                        key(|r: &Row| &r.1),
                        key(|r: &Row| &r.2),
                    ),
                )
                .map(|list| list.len())
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || rows.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_build_1m);
criterion_main!(benches);
