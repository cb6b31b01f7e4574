//! Criterion micro-benchmarks for arena construction, contests, and snapshots.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ouro_arena::Arena;
use ouro_bench::{reference_profile, stress_profile};

/// Benchmark: validate a config and allocate the 50x50 grid.
fn bench_arena_build(c: &mut Criterion) {
    c.bench_function("arena_build_50x50", |b| {
        b.iter(|| {
            let arena = Arena::new(reference_profile(42)).unwrap();
            black_box(arena);
        });
    });
}

/// Benchmark: refill all 2500 cells with random breeds.
fn bench_arena_init(c: &mut Criterion) {
    let arena = Arena::new(reference_profile(42)).unwrap();
    c.bench_function("arena_init_50x50", |b| {
        b.iter(|| arena.init());
    });
}

/// Benchmark: 10K contests, each taking and releasing the lock once.
fn bench_arena_advance_10k(c: &mut Criterion) {
    let arena = Arena::new(reference_profile(42)).unwrap();
    arena.init();
    c.bench_function("arena_advance_10k", |b| {
        b.iter(|| arena.advance(10_000));
    });
}

/// Benchmark: copy the 50x50 grid out under the lock.
fn bench_arena_snapshot(c: &mut Criterion) {
    let arena = Arena::new(reference_profile(42)).unwrap();
    arena.init();
    arena.advance(10_000);
    c.bench_function("arena_snapshot_50x50", |b| {
        b.iter(|| black_box(arena.snapshot()));
    });
}

/// Benchmark: snapshot cost at 16x the reference cell count.
fn bench_arena_snapshot_stress(c: &mut Criterion) {
    let arena = Arena::new(stress_profile(42)).unwrap();
    arena.init();
    c.bench_function("arena_snapshot_200x200", |b| {
        b.iter(|| black_box(arena.snapshot()));
    });
}

criterion_group!(
    benches,
    bench_arena_build,
    bench_arena_init,
    bench_arena_advance_10k,
    bench_arena_snapshot,
    bench_arena_snapshot_stress
);
criterion_main!(benches);
