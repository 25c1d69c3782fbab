//! # Genome
//!
//! A `Genome` is a candidate image: a `PixelGrid` plus its loss against a shared target.
//! The loss is cached and recomputed by every operation that changes pixels, so
//! `fitness()` always describes the current pixel contents.
//!
//! Genetic operators never touch an existing genome's pixels through a shared reference:
//! `mate_with` allocates the child's grid before any crossover or mutation write, and
//! `mutate` requires exclusive ownership.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pixelgen::color::{Palette, Rgb};
//! use pixelgen::genome::Genome;
//! use pixelgen::grid::PixelGrid;
//! use pixelgen::rng::RandomNumberGenerator;
//!
//! let target = Arc::new(PixelGrid::filled(4, 4, Rgb::RED).unwrap());
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let father = Genome::random(&target, &Palette::default(), &mut rng);
//! let mother = Genome::random(&target, &Palette::default(), &mut rng);
//! let child = father.mate_with(&mother, 0.01, &mut rng).unwrap();
//!
//! assert_eq!(child.grid().dimensions(), (4, 4));
//! assert!(child.fitness() >= 0.0);
//! ```

use std::sync::Arc;

use crate::color::Palette;
use crate::error::Result;
use crate::grid::PixelGrid;
use crate::rng::RandomNumberGenerator;

/// Number of decimal digits the loss is rounded to.
pub const LOSS_PRECISION: i32 = 4;

/// A candidate image scored against a fixed target.
#[derive(Debug, Clone)]
pub struct Genome {
    grid: PixelGrid,
    fitness: f64,
    target: Arc<PixelGrid>,
}

impl Genome {
    /// Creates a genome whose pixels are drawn uniformly from `palette`.
    pub fn random(
        target: &Arc<PixelGrid>,
        palette: &Palette,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let colors = palette.colors();
        let mut grid = target.as_ref().clone();
        for pixel in grid.pixels_mut() {
            *pixel = colors[rng.gen_index(colors.len())];
        }
        Self::scored(grid, target)
    }

    /// Creates a genome from explicit pixels.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if `grid` and `target` differ in size.
    pub fn from_grid(grid: PixelGrid, target: &Arc<PixelGrid>) -> Result<Self> {
        target.check_dimensions(&grid)?;
        Ok(Self::scored(grid, target))
    }

    fn scored(grid: PixelGrid, target: &Arc<PixelGrid>) -> Self {
        let fitness = summed_loss(&grid, target);
        Self {
            grid,
            fitness,
            target: Arc::clone(target),
        }
    }

    /// Loss against the target; lower is better and `0.0` is an exact match.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn target(&self) -> &Arc<PixelGrid> {
        &self.target
    }

    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    /// Replaces each pixel with a uniformly random color with probability `rate`, then
    /// rescores.
    pub fn mutate(&mut self, rate: f64, rng: &mut RandomNumberGenerator) {
        if rate > 0.0 {
            for pixel in self.grid.pixels_mut() {
                if rng.gen_unit() < rate {
                    *pixel = rng.gen_rgb();
                }
            }
        }
        self.refresh_fitness();
    }

    /// Uniform crossover followed by mutation.
    ///
    /// Each pixel of the child comes from `self` or `partner` with equal probability. The
    /// result is then mutated with `mutation_rate`. Neither parent is modified.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if `partner` has a different size.
    pub fn mate_with(
        &self,
        partner: &Genome,
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Genome> {
        self.grid.check_dimensions(&partner.grid)?;

        let mut child = self.clone();
        for (pixel, theirs) in child
            .grid
            .pixels_mut()
            .iter_mut()
            .zip(partner.grid.pixels())
        {
            if !rng.gen_bool(0.5) {
                *pixel = *theirs;
            }
        }
        child.mutate(mutation_rate, rng);
        Ok(child)
    }

    fn refresh_fitness(&mut self) {
        self.fitness = summed_loss(&self.grid, &self.target);
    }
}

/// Sum of per-pixel Euclidean RGB distances, rounded to `LOSS_PRECISION` digits.
///
/// # Errors
///
/// Returns `GeneticError::DimensionMismatch` if the grids differ in size.
pub fn loss(grid: &PixelGrid, target: &PixelGrid) -> Result<f64> {
    target.check_dimensions(grid)?;
    Ok(summed_loss(grid, target))
}

/// Callers guarantee equal dimensions.
fn summed_loss(grid: &PixelGrid, target: &PixelGrid) -> f64 {
    let total: f64 = grid
        .pixels()
        .iter()
        .zip(target.pixels())
        .map(|(ours, theirs)| ours.distance(theirs))
        .sum();
    round_loss(total)
}

/// Sorts genomes ascending by fitness, fittest first. Ties keep their relative order.
pub fn sort_by_fitness(genomes: &mut [Genome]) {
    genomes.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
}

pub fn round_loss(value: f64) -> f64 {
    let scale = 10f64.powi(LOSS_PRECISION);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::error::GeneticError;

    fn target() -> Arc<PixelGrid> {
        Arc::new(
            PixelGrid::from_rows(&[vec![Rgb::RED, Rgb::RED], vec![Rgb::BLUE, Rgb::BLUE]])
                .unwrap(),
        )
    }

    #[test]
    fn test_identical_grid_has_zero_loss() {
        let target = target();
        let genome = Genome::from_grid(target.as_ref().clone(), &target).unwrap();
        assert_eq!(genome.fitness(), 0.0);
    }

    #[test]
    fn test_loss_grows_with_channel_difference() {
        let target = Arc::new(PixelGrid::filled(1, 1, Rgb::BLACK).unwrap());
        let mut previous = 0.0;
        for r in 1..=255u8 {
            let grid = PixelGrid::filled(1, 1, Rgb::new(r, 0, 0)).unwrap();
            let genome = Genome::from_grid(grid, &target).unwrap();
            assert!(genome.fitness() > previous);
            previous = genome.fitness();
        }
    }

    #[test]
    fn test_loss_is_rounded() {
        let target = Arc::new(PixelGrid::filled(1, 1, Rgb::BLACK).unwrap());
        let grid = PixelGrid::filled(1, 1, Rgb::new(1, 1, 0)).unwrap();
        let genome = Genome::from_grid(grid, &target).unwrap();
        // sqrt(2) = 1.41421356...
        assert_eq!(genome.fitness(), 1.4142);
    }

    #[test]
    fn test_from_grid_rejects_wrong_size() {
        let target = target();
        let grid = PixelGrid::filled(3, 1, Rgb::RED).unwrap();
        assert!(matches!(
            Genome::from_grid(grid, &target),
            Err(GeneticError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_random_uses_palette_only() {
        let target = target();
        let palette = Palette::new(vec![Rgb::WHITE, Rgb::BLACK]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let genome = Genome::random(&target, &palette, &mut rng);

        assert_eq!(genome.grid().dimensions(), target.dimensions());
        assert!(genome
            .grid()
            .pixels()
            .iter()
            .all(|p| palette.colors().contains(p)));
        assert_eq!(genome.fitness(), loss(genome.grid(), &target).unwrap());
    }

    #[test]
    fn test_mutate_rate_zero_keeps_pixels() {
        let target = target();
        let mut rng = RandomNumberGenerator::from_seed(11);
        let mut genome = Genome::random(&target, &Palette::default(), &mut rng);
        let before = genome.grid().clone();

        genome.mutate(0.0, &mut rng);
        assert_eq!(genome.grid(), &before);
    }

    #[test]
    fn test_mutate_rate_one_rescores() {
        let target = Arc::new(PixelGrid::filled(16, 16, Rgb::BLACK).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut genome = Genome::from_grid(target.as_ref().clone(), &target).unwrap();

        genome.mutate(1.0, &mut rng);
        assert_eq!(genome.fitness(), loss(genome.grid(), &target).unwrap());
        assert!(genome.fitness() > 0.0);
    }

    #[test]
    fn test_mate_leaves_parents_untouched() {
        let target = target();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let father = Genome::random(&target, &Palette::default(), &mut rng);
        let mother = Genome::random(&target, &Palette::default(), &mut rng);
        let father_before = father.grid().clone();
        let mother_before = mother.grid().clone();

        let child = father.mate_with(&mother, 1.0, &mut rng).unwrap();

        assert_eq!(father.grid(), &father_before);
        assert_eq!(mother.grid(), &mother_before);
        assert_eq!(child.grid().dimensions(), father.grid().dimensions());
    }

    #[test]
    fn test_mate_without_mutation_only_inherits() {
        let target = Arc::new(PixelGrid::filled(8, 8, Rgb::BLACK).unwrap());
        let mut rng = RandomNumberGenerator::from_seed(21);
        let father = Genome::from_grid(PixelGrid::filled(8, 8, Rgb::RED).unwrap(), &target)
            .unwrap();
        let mother = Genome::from_grid(PixelGrid::filled(8, 8, Rgb::BLUE).unwrap(), &target)
            .unwrap();

        let child = father.mate_with(&mother, 0.0, &mut rng).unwrap();

        for (i, pixel) in child.grid().pixels().iter().enumerate() {
            assert!(
                *pixel == father.grid().pixels()[i] || *pixel == mother.grid().pixels()[i]
            );
        }
        assert_eq!(child.fitness(), loss(child.grid(), &target).unwrap());
    }

    #[test]
    fn test_loss_rejects_mismatched_grids() {
        let target = PixelGrid::filled(2, 2, Rgb::BLACK).unwrap();
        let smaller = PixelGrid::filled(1, 2, Rgb::WHITE).unwrap();
        assert!(matches!(
            loss(&smaller, &target),
            Err(GeneticError::DimensionMismatch {
                expected: (2, 2),
                actual: (1, 2)
            })
        ));
    }

    #[test]
    fn test_mate_rejects_partner_of_other_size() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let square = Arc::new(PixelGrid::filled(2, 2, Rgb::BLACK).unwrap());
        let wide = Arc::new(PixelGrid::filled(4, 1, Rgb::BLACK).unwrap());
        let father = Genome::random(&square, &Palette::default(), &mut rng);
        let mother = Genome::random(&wide, &Palette::default(), &mut rng);

        assert!(matches!(
            father.mate_with(&mother, 0.0, &mut rng),
            Err(GeneticError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_round_loss() {
        assert_eq!(round_loss(1.23456), 1.2346);
        assert_eq!(round_loss(0.0), 0.0);
    }
}
