use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orf_finder::{OrfFinder, ALPHABET};

/// Generate a synthetic genome over the fixed alphabet.
fn generate_genome(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_construction");

    for n in [128, 512, 1024] {
        let genome = generate_genome(n, 42);
        group.bench_with_input(BenchmarkId::new("build", n), &genome, |b, genome| {
            b.iter(|| OrfFinder::new(black_box(genome.as_str())).unwrap());
        });
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let genome = generate_genome(1024, 42);
    let finder = OrfFinder::new(genome).unwrap();

    for (start, end) in [("A", "B"), ("AB", "CD"), ("ABC", "D")] {
        group.bench_with_input(
            BenchmarkId::new("find", format!("{start}_{end}")),
            &(start, end),
            |b, &(start, end)| {
                b.iter(|| finder.find(black_box(start), black_box(end)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_query);
criterion_main!(benches);
