//! # GenerationObserver
//!
//! Per-generation reports and the hook that receives them. `Population::evolve` calls the
//! observer once for the seeded population and once after every step.

use crate::genome::Genome;

/// Outcome of one generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The freshly seeded population, before any step has run.
    Initial,
    /// The offspring generation replaced the current generation.
    Accepted,
    /// The offspring generation was discarded.
    Rejected,
}

/// Summary of the population after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// Number of completed generations.
    pub generation: usize,
    pub decision: Decision,
    /// Loss of the fittest genome in the current generation.
    pub best_fitness: f64,
    /// Acceptance statistic of the current generation.
    pub current_statistic: f64,
    /// Acceptance statistic of the offspring that were compared, if any.
    pub offspring_statistic: Option<f64>,
}

/// Hook called with the current best genome after every generation.
///
/// Observers are purely observational and cannot influence the run.
pub trait GenerationObserver {
    fn observe(&mut self, report: &GenerationReport, best: &Genome);
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn observe(&mut self, _report: &GenerationReport, _best: &Genome) {}
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationReport, &Genome),
{
    fn observe(&mut self, report: &GenerationReport, best: &Genome) {
        self(report, best)
    }
}
