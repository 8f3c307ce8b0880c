use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use quizforge::ratelimit::{LimitProfiles, RateLimitStore};

/// Benchmark admission checks on a hot identifier and across many
fn bench_check_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_limiting");
    group.throughput(Throughput::Elements(1000));

    let profiles = LimitProfiles::default();

    group.bench_function("check_single_identifier", |b| {
        let mut store = RateLimitStore::new();
        b.iter(|| {
            for _ in 0..1000 {
                black_box(store.check(black_box("bench:one"), &profiles.api));
            }
        })
    });

    group.bench_function("check_many_identifiers", |b| {
        let mut store = RateLimitStore::new();
        let keys: Vec<String> = (0..1000).map(|i| format!("bench:{}", i)).collect();
        b.iter(|| {
            for key in &keys {
                black_box(store.check(black_box(key), &profiles.api));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_check_throughput);
criterion_main!(benches);
