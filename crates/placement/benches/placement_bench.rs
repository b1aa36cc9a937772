//! Criterion benchmarks for square aggregates and segment crossing.
//! Layout sizes: n in {1, 10, 100, 1000}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use placement::line::cross_by_line;
use placement::square::{cross_square, outline, square_lines};
use placement::Square;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_layout(n: usize, seed: u64) -> Vec<Square> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Square::from_size(
                (rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)),
                rng.gen_range(1.0..100.0),
                rng.gen_range(1.0..100.0),
            )
        })
        .collect()
}

fn bench_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("square");
    for &n in &[1usize, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("outline", n), &n, |b, &n| {
            b.iter_batched(
                || random_layout(n, 43),
                |items| {
                    let _bbox = outline(&items);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("cross_square_pairs", n), &n, |b, &n| {
            let items = random_layout(n.min(100), 44);
            b.iter(|| {
                let mut hits = 0usize;
                for a in &items {
                    for other in &items {
                        hits += cross_square(a, other) as usize;
                    }
                }
                hits
            })
        });
    }
    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let items = random_layout(32, 45);
    let lines: Vec<_> = items
        .iter()
        .flat_map(|s| square_lines(s).iter().copied().collect::<Vec<_>>())
        .collect();
    c.bench_function("cross_by_line_all_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for a in &lines {
                for other in &lines {
                    hits += cross_by_line(a, other) as usize;
                }
            }
            hits
        })
    });
}

criterion_group!(benches, bench_squares, bench_lines);
criterion_main!(benches);
