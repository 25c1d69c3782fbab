//! # PairwiseBreeding
//!
//! Full pairwise mating among the selected parents. The `(father, mother)` task list is
//! built eagerly and handed to rayon as one flat parallel iterator, so the fan-out runs on
//! whatever worker pool the caller installed instead of nesting parallel loops.
use rayon::prelude::*;

use crate::{
    error::{GeneticError, Result},
    genome::{sort_by_fitness, Genome},
    rng::SeedSequence,
};

#[derive(Debug, Clone)]
pub struct PairwiseBreeding {
    mutation_rate: f64,
    parallel_threshold: usize,
}

impl PairwiseBreeding {
    /// Creates a breeding step that mutates children at `mutation_rate` and runs in
    /// parallel once there are at least `parallel_threshold` pairs.
    pub fn new(mutation_rate: f64, parallel_threshold: usize) -> Self {
        Self {
            mutation_rate,
            parallel_threshold,
        }
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Mates every ordered pair of `parents` and returns the children sorted ascending by
    /// fitness.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The parent pool.
    /// - `seeds`: Source of per-task generators. One stream is reserved per pair.
    ///
    /// ## Returns
    ///
    /// `parents.len()²` children, fittest first.
    ///
    /// ## Errors
    ///
    /// This method will return an error if:
    /// - The parents slice is empty
    /// - Two parents differ in size
    pub fn breed(&self, parents: &[Genome], seeds: &mut SeedSequence) -> Result<Vec<Genome>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let pairs: Vec<(usize, usize)> = (0..parents.len())
            .flat_map(|father| (0..parents.len()).map(move |mother| (father, mother)))
            .collect();
        let block = seeds.reserve(pairs.len());

        let mate = |(task, &(father, mother)): (usize, &(usize, usize))| {
            let mut rng = block.rng(task);
            parents[father].mate_with(&parents[mother], self.mutation_rate, &mut rng)
        };

        let mut children: Vec<Genome> = if pairs.len() >= self.parallel_threshold {
            pairs.par_iter().enumerate().map(mate).collect::<Result<_>>()?
        } else {
            pairs.iter().enumerate().map(mate).collect::<Result<_>>()?
        };

        sort_by_fitness(&mut children);
        Ok(children)
    }
}
