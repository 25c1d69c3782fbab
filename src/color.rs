//! # Colors and Palettes
//!
//! `Rgb` is an opaque 8-bit color triple. `Palette` is the immutable list of seed colors
//! that random genomes are initialized from.
//!
//! ```rust
//! use pixelgen::color::{Palette, Rgb};
//!
//! let palette = Palette::default();
//! assert_eq!(palette.colors(), &[Rgb::RED, Rgb::GREEN, Rgb::BLUE]);
//! assert_eq!(Rgb::RED.distance(&Rgb::RED), 0.0);
//! ```

use crate::error::{GeneticError, Result};

/// An opaque RGB color with one byte per channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// The fixed set of colors used to seed random genomes.
///
/// A palette is never empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Creates a palette from the given colors.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GeneticError::Configuration(
                "Palette must contain at least one color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    /// Pure red, green and blue.
    fn default() -> Self {
        Self {
            colors: vec![Rgb::RED, Rgb::GREEN, Rgb::BLUE],
        }
    }
}
