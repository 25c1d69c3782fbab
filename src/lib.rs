pub mod breeding;
pub mod color;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod grid;
pub mod io;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use color::{Palette, Rgb};
pub use error::{GeneticError, Result, ResultExt};
pub use evolution::{AcceptancePolicy, EvolutionOptions, LogLevel, Population};
pub use genome::Genome;
pub use grid::PixelGrid;
