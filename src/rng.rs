//! # Random Number Generation
//!
//! `RandomNumberGenerator` wraps `rand_chacha`'s `ChaCha8Rng` with the handful of draws the
//! genetic operators need.
//!
//! `SeedSequence` hands out independent generators for parallel work. Each parallel phase
//! reserves a block of stream ids, and task `i` of the block gets a ChaCha generator keyed
//! by the run seed and positioned on its own stream. A task owns its generator for its whole lifetime, so no
//! generator is shared between threads and none is reseeded inside a pixel loop.
//!
//! ## Example
//!
//! ```rust
//! use pixelgen::rng::SeedSequence;
//!
//! let mut seeds = SeedSequence::new(42);
//! let block = seeds.reserve(4);
//!
//! let mut a = block.rng(0);
//! let mut b = block.rng(0);
//! assert_eq!(a.gen_unit(), b.gen_unit());
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::color::Rgb;

/// A wrapper around `ChaCha8Rng`.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: ChaCha8Rng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generator keyed by `seed` and positioned on `stream`.
    ///
    /// Different streams of the same seed produce independent sequences.
    pub fn from_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns `true` with probability `p`. Values outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform index in `0..len`. `len` must be positive.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// A color with each channel drawn uniformly from the full `0..=255` range.
    pub fn gen_rgb(&mut self) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter-based source of per-task generators.
///
/// The counter is advanced only by the owner between parallel phases; the blocks it hands
/// out are `Copy` and can be read from any number of worker threads.
#[derive(Debug, Clone)]
pub struct SeedSequence {
    base: u64,
    next_stream: u64,
}

impl SeedSequence {
    pub fn new(base: u64) -> Self {
        Self {
            base,
            next_stream: 0,
        }
    }

    /// Seeds the sequence itself from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(RandomNumberGenerator::new().next_u64())
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Reserves `len` consecutive stream ids for one parallel phase.
    pub fn reserve(&mut self, len: usize) -> SeedBlock {
        let block = SeedBlock {
            base: self.base,
            start: self.next_stream,
            len,
        };
        self.next_stream = self.next_stream.wrapping_add(len as u64);
        block
    }
}

/// A contiguous range of stream ids reserved from a `SeedSequence`.
#[derive(Debug, Clone, Copy)]
pub struct SeedBlock {
    base: u64,
    start: u64,
    len: usize,
}

impl SeedBlock {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Generator for task `index` of this block.
    pub fn rng(&self, index: usize) -> RandomNumberGenerator {
        debug_assert!(index < self.len, "task index outside reserved block");
        RandomNumberGenerator::from_stream(self.base, self.start.wrapping_add(index as u64))
    }
}
