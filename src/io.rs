//! # Image I/O
//!
//! Conversion between `PixelGrid` and the `image` crate, plus `SnapshotWriter`, an observer
//! that periodically saves the fittest genome of a run.
//!
//! ```rust,no_run
//! use pixelgen::io::{load_target, save_grid};
//!
//! let target = load_target("mario.jpg").unwrap();
//! save_grid(&target, "results/copy.png").unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb as ImageRgb, RgbImage};
use tracing::{debug, warn};

use crate::color::Rgb;
use crate::error::{GeneticError, Result, ResultExt};
use crate::evolution::{GenerationObserver, GenerationReport};
use crate::genome::Genome;
use crate::grid::PixelGrid;

/// Decodes an image file into a target grid. Alpha is discarded.
///
/// # Errors
///
/// Returns `GeneticError::Image` if the file is missing, unreadable or not a supported
/// image, and `GeneticError::InvalidGrid` for an image with no pixels.
pub fn load_target<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let image = image::open(path.as_ref())?.to_rgb8();
    from_rgb_image(&image)
}

/// Encodes `grid` to `path`. The format follows the file extension.
pub fn save_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    to_rgb_image(grid)?.save(path.as_ref())?;
    Ok(())
}

pub fn from_rgb_image(image: &RgbImage) -> Result<PixelGrid> {
    let pixels = image.pixels().map(|pixel| Rgb::from(*pixel)).collect();
    PixelGrid::new(image.width(), image.height(), pixels)
}

pub fn to_rgb_image(grid: &PixelGrid) -> Result<RgbImage> {
    let raw: Vec<u8> = grid
        .pixels()
        .iter()
        .flat_map(|pixel| pixel.channels())
        .collect();
    RgbImage::from_raw(grid.width(), grid.height(), raw).ok_or_else(|| {
        GeneticError::InvalidGrid(format!(
            "Cannot build a {}x{} image buffer",
            grid.width(),
            grid.height()
        ))
    })
}

impl From<ImageRgb<u8>> for Rgb {
    fn from(pixel: ImageRgb<u8>) -> Self {
        Rgb::from(pixel.0)
    }
}

/// Writes the fittest genome to `directory/gen-{n}.{extension}` every `interval`
/// generations.
///
/// `interval` is independent of `EvolutionOptions::get_report_interval`, which only paces
/// progress log lines. A failed write is logged and the run continues.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
    interval: usize,
    extension: String,
    written: usize,
}

impl SnapshotWriter {
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `interval` is zero.
    pub fn new<P: Into<PathBuf>>(directory: P, interval: usize, extension: &str) -> Result<Self> {
        if interval == 0 {
            return Err(GeneticError::Configuration(
                "Snapshot interval cannot be zero".to_string(),
            ));
        }
        Ok(Self {
            directory: directory.into(),
            interval,
            extension: extension.trim_start_matches('.').to_string(),
            written: 0,
        })
    }

    /// Path of the snapshot for `label`, e.g. `gen-1000.png` or `gen-result.png`.
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.directory
            .join(format!("gen-{}.{}", label, self.extension))
    }

    /// Number of snapshots written successfully so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Writes `genome` under `label`, creating the directory if needed.
    pub fn write(&self, label: &str, genome: &Genome) -> Result<PathBuf> {
        fs::create_dir_all(&self.directory).context(format!(
            "Failed to create snapshot directory {}",
            self.directory.display()
        ))?;
        let path = self.path_for(label);
        save_grid(genome.grid(), &path)?;
        Ok(path)
    }
}

impl GenerationObserver for SnapshotWriter {
    fn observe(&mut self, report: &GenerationReport, best: &Genome) {
        if report.generation % self.interval != 0 {
            return;
        }

        match self.write(&report.generation.to_string(), best) {
            Ok(path) => {
                self.written += 1;
                debug!(generation = report.generation, path = %path.display(), "Snapshot written");
            }
            Err(err) => {
                warn!(generation = report.generation, error = %err, "Snapshot write failed");
            }
        }
    }
}
