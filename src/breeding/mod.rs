//! # Breeding
//!
//! Offspring production for one generation. Every ordered pair of parents, including a
//! parent paired with itself, yields exactly one child, so `K` parents produce `K²`
//! children.
pub mod pairwise;

pub use pairwise::PairwiseBreeding;
