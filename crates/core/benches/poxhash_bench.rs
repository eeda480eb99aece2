//! Benchmark for PoxHash algorithm

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use poxhash_core::{PoxHash, Version};

fn bench_hash(c: &mut Criterion) {
    let hasher = PoxHash::new();
    let input = b"benchmark input data for testing PoxHash performance";

    c.bench_function("poxhash_single", |b| {
        b.iter(|| hasher.hash(black_box(input)))
    });
}

fn bench_hash_varying_input(c: &mut Criterion) {
    let hasher = PoxHash::new();

    c.bench_function("poxhash_varying", |b| {
        let mut counter: u64 = 0;
        b.iter(|| {
            let mut input = Vec::with_capacity(64);
            input.extend_from_slice(b"seed");
            input.extend_from_slice(&counter.to_le_bytes());
            counter = counter.wrapping_add(1);
            hasher.hash_words(black_box(&input))
        })
    });
}

fn bench_versions(c: &mut Criterion) {
    let input = vec![0x5au8; 1024];
    let mut group = c.benchmark_group("poxhash_1kib");
    group.throughput(Throughput::Bytes(input.len() as u64));

    for version in Version::ALL {
        let hasher = PoxHash::with_version(version);
        group.bench_with_input(BenchmarkId::from_parameter(version), &input, |b, input| {
            b.iter(|| hasher.hash_words(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_hash_varying_input,
    bench_versions
);
criterion_main!(benches);
