//! # AcceptancePolicy
//!
//! Decides whether an offspring generation replaces the current one. Both generations are
//! reduced to one statistic and the offspring wins only when its statistic is strictly
//! lower, so the best-known loss never increases from one generation to the next.

use crate::genome::Genome;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptancePolicy {
    /// Compare the fittest genome of each generation.
    #[default]
    BestOfGeneration,
    /// Compare the mean loss of the top `parent_pool_size` genomes of each generation.
    ///
    /// The mean is not rounded, so a single genome improving by the loss resolution
    /// still lowers it.
    MeanOfParentPool,
}

impl AcceptancePolicy {
    /// Statistic of a generation sorted ascending by fitness.
    ///
    /// Returns `f64::INFINITY` for an empty generation.
    pub fn statistic(&self, generation: &[Genome], parent_pool_size: usize) -> f64 {
        self.reduce(generation.iter().map(Genome::fitness), parent_pool_size)
    }

    /// Same as `statistic`, over losses already sorted ascending.
    pub fn reduce<I>(&self, sorted_losses: I, parent_pool_size: usize) -> f64
    where
        I: IntoIterator<Item = f64>,
    {
        let mut losses = sorted_losses.into_iter();
        match self {
            AcceptancePolicy::BestOfGeneration => losses.next().unwrap_or(f64::INFINITY),
            AcceptancePolicy::MeanOfParentPool => {
                let (count, sum) = losses
                    .take(parent_pool_size)
                    .fold((0usize, 0.0), |(count, sum), loss| (count + 1, sum + loss));
                if count == 0 {
                    return f64::INFINITY;
                }
                sum / count as f64
            }
        }
    }

    /// `true` when the offspring statistic is strictly better than the current one.
    pub fn accepts(&self, current_statistic: f64, offspring_statistic: f64) -> bool {
        offspring_statistic < current_statistic
    }
}
