use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixelgen::{
    breeding::PairwiseBreeding,
    color::{Palette, Rgb},
    evolution::{EvolutionOptions, LogLevel, Population},
    genome::{sort_by_fitness, Genome},
    grid::PixelGrid,
    rng::{RandomNumberGenerator, SeedSequence},
};

fn target(side: u32) -> Arc<PixelGrid> {
    let pixels = (0..side * side)
        .map(|i| Rgb::new((i % 256) as u8, (i / 3 % 256) as u8, 128))
        .collect();
    Arc::new(PixelGrid::new(side, side, pixels).unwrap())
}

fn parents(target: &Arc<PixelGrid>, count: usize) -> Vec<Genome> {
    let mut rng = RandomNumberGenerator::from_seed(1);
    let mut genomes: Vec<Genome> = (0..count)
        .map(|_| Genome::random(target, &Palette::default(), &mut rng))
        .collect();
    sort_by_fitness(&mut genomes);
    genomes
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    for side in [16u32, 64, 256].iter() {
        let target = target(*side);
        let mut rng = RandomNumberGenerator::from_seed(2);
        let genome = Genome::random(&target, &Palette::default(), &mut rng);

        group.bench_with_input(BenchmarkId::new("mutate", side), side, |b, _| {
            b.iter(|| {
                let mut child = genome.clone();
                child.mutate(black_box(0.01), &mut rng);
                child
            })
        });
    }
    group.finish();
}

fn bench_breeding(c: &mut Criterion) {
    let target = target(64);
    let mut group = c.benchmark_group("pairwise_breeding");

    for k in [2usize, 4, 8, 16].iter() {
        let pool = parents(&target, *k);

        group.bench_with_input(BenchmarkId::new("sequential", k), k, |b, _| {
            let strategy = PairwiseBreeding::new(0.01, usize::MAX);
            let mut seeds = SeedSequence::new(3);
            b.iter(|| strategy.breed(black_box(&pool), &mut seeds).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel", k), k, |b, _| {
            let strategy = PairwiseBreeding::new(0.01, 0);
            let mut seeds = SeedSequence::new(3);
            b.iter(|| strategy.breed(black_box(&pool), &mut seeds).unwrap())
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let options = EvolutionOptions::builder()
        .parent_pool_size(8)
        .log_level(LogLevel::None)
        .seed(4)
        .build();
    let mut population = Population::new(target(64), options).unwrap();

    c.bench_function("population_step_k8_64x64", |b| {
        b.iter(|| population.step().unwrap())
    });
}

criterion_group!(benches, bench_fitness, bench_breeding, bench_generation);
criterion_main!(benches);
