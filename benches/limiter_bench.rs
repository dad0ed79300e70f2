use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use crpt_client::limiter::PermitPool;

fn bench_probe(c: &mut Criterion) {
    let pool = PermitPool::new(1024);

    c.bench_function("try_acquire", |b| {
        b.iter(|| {
            let granted = black_box(&pool).try_acquire().unwrap();
            if !granted {
                pool.replenish();
            }
            granted
        })
    });
}

fn bench_replenish_full_pool(c: &mut Criterion) {
    let pool = PermitPool::new(1024);

    c.bench_function("replenish_full_pool", |b| {
        b.iter(|| black_box(&pool).replenish())
    });
}

criterion_group!(benches, bench_probe, bench_replenish_full_pool);
criterion_main!(benches);
