use std::sync::Arc;

use pixelgen::{
    color::{Palette, Rgb},
    genome::{loss, Genome},
    grid::PixelGrid,
    rng::{RandomNumberGenerator, SeedSequence},
};

fn gradient(width: u32, height: u32) -> PixelGrid {
    let pixels = (0..width * height)
        .map(|i| Rgb::new((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i * 29 % 256) as u8))
        .collect();
    PixelGrid::new(width, height, pixels).unwrap()
}

#[test]
fn test_genome_against_itself_scores_zero() {
    let target = Arc::new(gradient(5, 4));
    let genome = Genome::from_grid(gradient(5, 4), &target).unwrap();
    assert_eq!(genome.fitness(), 0.0);
}

#[test]
fn test_loss_is_non_negative_and_deterministic() {
    let target = Arc::new(gradient(6, 6));
    let mut rng = RandomNumberGenerator::from_seed(123);

    for _ in 0..20 {
        let genome = Genome::random(&target, &Palette::default(), &mut rng);
        assert!(genome.fitness() >= 0.0);
        assert_eq!(genome.fitness(), loss(genome.grid(), &target).unwrap());
    }
}

#[test]
fn test_loss_increases_in_each_channel() {
    let target = Arc::new(PixelGrid::filled(2, 1, Rgb::new(100, 100, 100)).unwrap());
    let score = |color: Rgb| {
        let grid = PixelGrid::new(2, 1, vec![Rgb::new(100, 100, 100), color]).unwrap();
        Genome::from_grid(grid, &target).unwrap().fitness()
    };

    for delta in 1..100u8 {
        assert!(score(Rgb::new(100 + delta, 100, 100)) > score(Rgb::new(99 + delta, 100, 100)));
        assert!(score(Rgb::new(100, 100 - delta, 100)) > score(Rgb::new(100, 101 - delta, 100)));
        assert!(score(Rgb::new(100, 100, 100 + delta)) > score(Rgb::new(100, 100, 99 + delta)));
    }
}

#[test]
fn test_self_mating_without_mutation_reproduces_parent() {
    let target = Arc::new(gradient(4, 4));
    let mut rng = RandomNumberGenerator::from_seed(9);
    let parent = Genome::random(&target, &Palette::default(), &mut rng);

    let child = parent.mate_with(&parent, 0.0, &mut rng).unwrap();
    assert_eq!(child.grid(), parent.grid());
    assert_eq!(child.fitness(), parent.fitness());
}

#[test]
fn test_crossover_mixes_both_parents() {
    let target = Arc::new(PixelGrid::filled(32, 32, Rgb::BLACK).unwrap());
    let father =
        Genome::from_grid(PixelGrid::filled(32, 32, Rgb::RED).unwrap(), &target).unwrap();
    let mother =
        Genome::from_grid(PixelGrid::filled(32, 32, Rgb::BLUE).unwrap(), &target).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let child = father.mate_with(&mother, 0.0, &mut rng).unwrap();
    let from_father = child
        .grid()
        .pixels()
        .iter()
        .filter(|p| **p == Rgb::RED)
        .count();
    let from_mother = child.grid().len() - from_father;

    // 1024 fair coin flips; both sides land far from zero.
    assert!(from_father > 300);
    assert!(from_mother > 300);
}

#[test]
fn test_children_from_sibling_tasks_differ() {
    let target = Arc::new(PixelGrid::filled(16, 16, Rgb::BLACK).unwrap());
    let father =
        Genome::from_grid(PixelGrid::filled(16, 16, Rgb::RED).unwrap(), &target).unwrap();
    let mother =
        Genome::from_grid(PixelGrid::filled(16, 16, Rgb::BLUE).unwrap(), &target).unwrap();
    let mut seeds = SeedSequence::new(0);
    let block = seeds.reserve(2);

    let first = father.mate_with(&mother, 0.0, &mut block.rng(0)).unwrap();
    let second = father.mate_with(&mother, 0.0, &mut block.rng(1)).unwrap();
    assert_ne!(first.grid(), second.grid());
}
