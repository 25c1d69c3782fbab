//! # PixelGrid
//!
//! Row-major storage for a `width × height` image of `Rgb` pixels. Both the target image
//! and every genome's pixels use this type.

use crate::color::Rgb;
use crate::error::{GeneticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Creates a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidGrid` if either dimension is zero or the number of
    /// pixels is not `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeneticError::InvalidGrid(format!(
                "Dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GeneticError::InvalidGrid(format!(
                "Expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a grid where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Builds a grid from rows of pixels. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        if rows.iter().any(|row| row.len() as u32 != width) {
            return Err(GeneticError::InvalidGrid(
                "Rows must all have the same length".to_string(),
            ));
        }
        Self::new(width, height, rows.concat())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Ensures `other` has the same dimensions as `self`.
    pub fn check_dimensions(&self, other: &PixelGrid) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(GeneticError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}
