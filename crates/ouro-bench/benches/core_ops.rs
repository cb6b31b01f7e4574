//! Criterion micro-benchmarks for the pure rules: dominance and torus math.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ouro_core::dominance::resolve;
use ouro_core::{torus, Breed, Direction};

/// Benchmark: resolve every ordered pair on a five-breed circle.
fn bench_resolve_all_pairs(c: &mut Criterion) {
    c.bench_function("resolve_all_pairs_n5", |b| {
        b.iter(|| {
            for challenger in 0..5u8 {
                for defender in 0..5u8 {
                    black_box(resolve(Breed(challenger), Breed(defender), 5));
                }
            }
        });
    });
}

/// Benchmark: step a full lap around a 50-cell axis in each direction.
fn bench_neighbour_laps(c: &mut Criterion) {
    c.bench_function("neighbour_laps_50", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                let mut pos = (25u32, 25u32);
                for _ in 0..50 {
                    pos = torus::neighbour(pos.0, pos.1, direction, 50);
                }
                black_box(pos);
            }
        });
    });
}

criterion_group!(benches, bench_resolve_all_pairs, bench_neighbour_laps);
criterion_main!(benches);
