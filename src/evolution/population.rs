//! # Population
//!
//! Owns the current generation and runs the generational loop:
//!
//! 1. select the `K` fittest genomes as parents,
//! 2. mate every ordered pair of parents into `K²` offspring on the worker pool,
//! 3. replace the current generation with the offspring only if the acceptance statistic
//!    strictly improves.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pixelgen::color::Rgb;
//! use pixelgen::evolution::{EvolutionOptions, LogLevel, NoopObserver, Population};
//! use pixelgen::grid::PixelGrid;
//!
//! let target = Arc::new(PixelGrid::filled(4, 4, Rgb::GREEN).unwrap());
//! let options = EvolutionOptions::builder()
//!     .parent_pool_size(3)
//!     .num_generations(10)
//!     .log_level(LogLevel::None)
//!     .seed(1)
//!     .build();
//!
//! let mut population = Population::new(target, options).unwrap();
//! let initial = population.best().fitness();
//! let best = population.evolve(&mut NoopObserver).unwrap();
//! assert!(best.fitness() <= initial);
//! ```

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    observer::{Decision, GenerationObserver, GenerationReport},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::PairwiseBreeding,
    error::Result,
    genome::{sort_by_fitness, Genome},
    grid::PixelGrid,
    rng::SeedSequence,
    selection::select_parents,
};

pub struct Population {
    target: Arc<PixelGrid>,
    options: EvolutionOptions,
    breeding: PairwiseBreeding,
    current: Vec<Genome>,
    generation: usize,
    seeds: SeedSequence,
    pool: rayon::ThreadPool,
}

impl Population {
    /// Validates `options`, starts the worker pool and seeds `K²` random genomes.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The worker pool cannot be built
    pub fn new(target: Arc<PixelGrid>, options: EvolutionOptions) -> Result<Self> {
        options.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.get_num_threads())
            .thread_name(|index| format!("pixelgen-worker-{}", index))
            .build()?;

        let mut seeds = match options.get_seed() {
            Some(seed) => SeedSequence::new(seed),
            None => SeedSequence::from_entropy(),
        };

        let genome_pool_size = options.get_genome_pool_size();
        let block = seeds.reserve(genome_pool_size);
        let palette = options.get_palette();
        let seed_genome = |index: usize| {
            let mut rng = block.rng(index);
            Genome::random(&target, palette, &mut rng)
        };

        let mut current: Vec<Genome> = if genome_pool_size >= options.get_parallel_threshold() {
            pool.install(|| (0..genome_pool_size).into_par_iter().map(seed_genome).collect())
        } else {
            (0..genome_pool_size).map(seed_genome).collect()
        };
        sort_by_fitness(&mut current);

        if !matches!(options.get_log_level(), LogLevel::None) {
            info!(
                width = target.width(),
                height = target.height(),
                parents = options.get_parent_pool_size(),
                genomes = genome_pool_size,
                threads = pool.current_num_threads(),
                seed = seeds.base(),
                "Population seeded"
            );
        }

        let breeding = PairwiseBreeding::new(
            options.get_mutation_rate(),
            options.get_parallel_threshold(),
        );

        Ok(Self {
            target,
            options,
            breeding,
            current,
            generation: 0,
            seeds,
            pool,
        })
    }

    /// Runs one generation and reports whether the offspring were accepted.
    pub fn step(&mut self) -> Result<GenerationReport> {
        let parent_pool_size = self.options.get_parent_pool_size();
        let parents = select_parents(&self.current, parent_pool_size)?;

        let breeding = &self.breeding;
        let seeds = &mut self.seeds;
        let offspring = self.pool.install(|| breeding.breed(parents, seeds))?;

        debug_assert_eq!(offspring.len(), self.options.get_genome_pool_size());

        let policy = self.options.get_acceptance();
        let current_statistic = policy.statistic(&self.current, parent_pool_size);
        let offspring_statistic = policy.statistic(&offspring, parent_pool_size);

        self.generation += 1;
        let decision = if policy.accepts(current_statistic, offspring_statistic) {
            self.current = offspring;
            Decision::Accepted
        } else {
            Decision::Rejected
        };

        let report = GenerationReport {
            generation: self.generation,
            decision,
            best_fitness: self.best().fitness(),
            current_statistic: policy.statistic(&self.current, parent_pool_size),
            offspring_statistic: Some(offspring_statistic),
        };

        if matches!(self.options.get_log_level(), LogLevel::Verbose) {
            debug!(
                generation = report.generation,
                decision = ?report.decision,
                current = current_statistic,
                offspring = offspring_statistic,
                "Generation decided"
            );
        }

        Ok(report)
    }

    /// Runs `num_generations` steps and returns the fittest genome of the final generation.
    ///
    /// `observer` sees the initial population once and then every completed generation.
    pub fn evolve<O>(&mut self, observer: &mut O) -> Result<Genome>
    where
        O: GenerationObserver,
    {
        let initial = self.report(Decision::Initial);
        self.log_progress(&initial);
        observer.observe(&initial, self.best());

        for _ in 0..self.options.get_num_generations() {
            let report = self.step()?;
            if report.generation % self.options.get_report_interval() == 0 {
                self.log_progress(&report);
            }
            observer.observe(&report, self.best());
        }

        if !matches!(self.options.get_log_level(), LogLevel::None) {
            info!(
                generation = self.generation,
                best = self.best().fitness(),
                "Evolution finished"
            );
        }

        Ok(self.best().clone())
    }

    fn report(&self, decision: Decision) -> GenerationReport {
        let policy = self.options.get_acceptance();
        let parent_pool_size = self.options.get_parent_pool_size();
        GenerationReport {
            generation: self.generation,
            decision,
            best_fitness: self.best().fitness(),
            current_statistic: policy.statistic(&self.current, parent_pool_size),
            offspring_statistic: None,
        }
    }

    fn log_progress(&self, report: &GenerationReport) {
        if matches!(self.options.get_log_level(), LogLevel::None) {
            return;
        }
        info!(
            generation = report.generation,
            best = report.best_fitness,
            loss = report.current_statistic,
            "Progress"
        );
    }

    /// The fittest genome of the current generation.
    pub fn best(&self) -> &Genome {
        // The current generation always holds K² >= 1 genomes.
        &self.current[0]
    }

    /// The current generation, sorted ascending by fitness.
    pub fn current_generation(&self) -> &[Genome] {
        &self.current
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn target(&self) -> &Arc<PixelGrid> {
        &self.target
    }
}
