//! Benchmarks for the top-K query path.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use geo::Coord;
use rand::{Rng, SeedableRng, rngs::StdRng};

use nearstay_core::{Hotel, NO_WEBSITE, RankRequest, Ranker, Weights};

fn synthetic_corpus(size: u64, seed: u64) -> Vec<Hotel> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|id| {
            Hotel::new(
                id,
                Coord {
                    x: rng.gen_range(-0.5..0.5),
                    y: rng.gen_range(-0.5..0.5),
                },
                rng.gen_range(0.0..=5.0),
                rng.gen_range(0..2000),
                format!("hotel-{id}"),
                String::from(NO_WEBSITE),
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let hotels = synthetic_corpus(10_000, 42);
    c.bench_function("ranker_build_10k", |b| {
        b.iter(|| Ranker::new(black_box(hotels.clone())));
    });
}

fn bench_top_k(c: &mut Criterion) {
    let ranker = Ranker::new(synthetic_corpus(10_000, 42));
    let request = RankRequest::new(Coord { x: 0.0, y: 0.0 }, 10, Weights::new(0.5, 0.3, 0.2));
    c.bench_function("top_k_10_of_10k", |b| {
        b.iter(|| {
            ranker
                .top_k(black_box(&request))
                .expect("benchmark query is valid")
        });
    });
}

criterion_group!(benches, bench_build, bench_top_k);
criterion_main!(benches);
