//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the configuration of one run: the parent pool size,
//! the number of generations, the mutation rate, the acceptance policy, the seed palette,
//! and how the work is scheduled and logged.
//!
//! ## Example
//!
//! ```rust
//! use pixelgen::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, LogLevel::Verbose, 4, 0.05);
//! assert_eq!(custom_options.get_genome_pool_size(), 16);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert!(default_options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of generations to run.
//! - `log_level`: How much progress is logged, represented by the `LogLevel` enum.
//! - `parent_pool_size`: The number of fittest genomes selected as parents (K).
//! - `mutation_rate`: Per-pixel mutation probability in `[0, 1]`.
//! - `acceptance`: How offspring and current generations are compared.
//! - `palette`: Seed colors for the initial population.
//! - `parallel_threshold`: The minimum number of tasks to process in parallel.
//! - `num_threads`: Worker pool size, `0` for one worker per hardware thread.
//! - `seed`: Run seed, `None` to seed from system entropy.
//! - `report_interval`: Generations between progress log lines.

use super::acceptance::AcceptancePolicy;
use crate::color::Palette;
use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Logs every generation's decision at debug level in addition to the periodic lines.
    Verbose,
    /// Logs run start, one line per report interval, and run end.
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    parent_pool_size: usize,
    mutation_rate: f64,
    acceptance: AcceptancePolicy,
    palette: Palette,
    /// Minimum number of tasks to process in parallel
    parallel_threshold: usize,
    num_threads: usize,
    seed: Option<u64>,
    report_interval: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        parent_pool_size: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            parent_pool_size,
            mutation_rate,
            ..Self::default()
        }
    }

    /// Rejects configurations that cannot run.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - The parent pool size is zero
    /// - The mutation rate is not a finite value in `[0, 1]`
    /// - The palette is empty
    /// - The report interval is zero
    pub fn validate(&self) -> Result<()> {
        if self.parent_pool_size == 0 {
            return Err(GeneticError::Configuration(
                "Parent pool size cannot be zero".to_string(),
            ));
        }

        if self.parent_pool_size.checked_mul(self.parent_pool_size).is_none() {
            return Err(GeneticError::Configuration(format!(
                "Parent pool size {} is too large",
                self.parent_pool_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if self.palette.is_empty() {
            return Err(GeneticError::Configuration(
                "Palette must contain at least one color".to_string(),
            ));
        }

        if self.report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_parent_pool_size(&self) -> usize {
        self.parent_pool_size
    }

    /// Number of genomes in every generation: the square of the parent pool size.
    pub fn get_genome_pool_size(&self) -> usize {
        self.parent_pool_size * self.parent_pool_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_acceptance(&self) -> AcceptancePolicy {
        self.acceptance
    }

    pub fn get_palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the minimum number of tasks to process in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_report_interval(&self) -> usize {
        self.report_interval
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parent pool size.
    pub fn set_parent_pool_size(&mut self, parent_pool_size: usize) {
        self.parent_pool_size = parent_pool_size;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_acceptance(&mut self, acceptance: AcceptancePolicy) {
        self.acceptance = acceptance;
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_num_threads(&mut self, num_threads: usize) {
        self.num_threads = num_threads;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_report_interval(&mut self, report_interval: usize) {
        self.report_interval = report_interval;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixelgen::evolution::{AcceptancePolicy, EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::None)
    ///     .parent_pool_size(5)
    ///     .mutation_rate(0.02)
    ///     .acceptance(AcceptancePolicy::MeanOfParentPool)
    ///     .seed(7)
    ///     .build();
    ///
    /// assert_eq!(options.get_genome_pool_size(), 25);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 100_000,
            log_level: LogLevel::Minimal,
            parent_pool_size: 16,
            mutation_rate: 0.01,
            acceptance: AcceptancePolicy::BestOfGeneration,
            palette: Palette::default(),
            parallel_threshold: 64,
            num_threads: 0,
            seed: None,
            report_interval: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances. Unset fields
/// take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    parent_pool_size: Option<usize>,
    mutation_rate: Option<f64>,
    acceptance: Option<AcceptancePolicy>,
    palette: Option<Palette>,
    parallel_threshold: Option<usize>,
    num_threads: Option<usize>,
    seed: Option<u64>,
    report_interval: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the parent pool size.
    pub fn parent_pool_size(mut self, value: usize) -> Self {
        self.parent_pool_size = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn acceptance(mut self, value: AcceptancePolicy) -> Self {
        self.acceptance = Some(value);
        self
    }

    pub fn palette(mut self, value: Palette) -> Self {
        self.palette = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn num_threads(mut self, value: usize) -> Self {
        self.num_threads = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn report_interval(mut self, value: usize) -> Self {
        self.report_interval = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parent_pool_size: self.parent_pool_size.unwrap_or(defaults.parent_pool_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            acceptance: self.acceptance.unwrap_or(defaults.acceptance),
            palette: self.palette.unwrap_or(defaults.palette),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            num_threads: self.num_threads.unwrap_or(defaults.num_threads),
            seed: self.seed.or(defaults.seed),
            report_interval: self.report_interval.unwrap_or(defaults.report_interval),
        }
    }
}
