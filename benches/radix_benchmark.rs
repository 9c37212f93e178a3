use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use radix_rs::radix;

fn generate_values(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| rng.gen_range(-1_000_000..1_000_000))
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    for base in [2, 10, 16, 256] {
        let mut group = c.benchmark_group(format!("radix_base_{}", base));
        for len in [1_000, 10_000, 100_000] {
            let data = generate_values(len);
            group.bench_with_input(BenchmarkId::new("partitioned", len), &data, |b, data| {
                b.iter(|| radix::sort_partitioned(black_box(data), base))
            });
            group.bench_with_input(BenchmarkId::new("sign_flip", len), &data, |b, data| {
                b.iter(|| radix::sort_sign_flip(black_box(data), base))
            });
        }
        group.finish();
    }
}

fn bench_worker_counts(c: &mut Criterion) {
    let data = generate_values(1_000_000);
    let mut group = c.benchmark_group("sign_flip_workers_1M");
    let mut counts = vec![1, 2, 4, radix::available_workers()];
    counts.sort_unstable();
    counts.dedup();
    for workers in counts {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &data, |b, data| {
            b.iter(|| radix::sort_sign_flip_with_workers(black_box(data), 256, workers))
        });
    }
    group.finish();
}

fn bench_baseline(c: &mut Criterion) {
    let data = generate_values(100_000);
    c.bench_function("sort_unstable_100k", |b| {
        b.iter(|| {
            let mut v = black_box(&data).clone();
            v.sort_unstable();
            v
        })
    });
}

criterion_group!(benches, bench_strategies, bench_worker_counts, bench_baseline);
criterion_main!(benches);
