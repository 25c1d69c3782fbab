//! # Error Types
//!
//! This module defines the error type shared by every fallible operation in the crate.
//! The evolutionary core itself does not fail under valid inputs, so most variants
//! describe rejected configuration or a failure at the image I/O boundary.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use pixelgen::error::{GeneticError, Result};
//!
//! fn check_pool(parents: usize) -> Result<()> {
//!     if parents == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Parent pool size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_pool(0).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use pixelgen::error::{Result, ResultExt};
//! use std::fs;
//!
//! fn make_output_dir(path: &str) -> Result<()> {
//!     fs::create_dir_all(path).context("Failed to create output directory")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while setting up or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A pixel grid does not have the dimensions of the target it is scored against.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A pixel grid could not be constructed from the given dimensions and pixels.
    #[error("Invalid pixel grid: {0}")]
    InvalidGrid(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when parents cannot be selected from a generation.
    #[error("Selection error: {0}")]
    Selection(String),

    /// The worker pool could not be started.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Error that occurs when an image cannot be decoded or encoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use pixelgen::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> pixelgen::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}
