//! # Error Types
//!
//! This module defines custom error types for the swarm optimization library.
//! It provides specific error variants for the failure scenarios that may
//! occur while building an optimization run or driving it to convergence.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use swarmfit::error::{SwarmError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use swarmfit::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn read_dataset_file(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open dataset file")
//!         .and_then(|_file| {
//!             // Read file contents
//!             Ok(())
//!         })
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the swarm optimization library.
///
/// The two contract-violation kinds (`DimensionMismatch` and
/// `NotInitialized`) are fatal and never retried; they propagate straight to
/// the caller of the top-level run.
#[derive(Error, Debug)]
pub enum SwarmError {
    /// Error that occurs when a vector's length does not match the expected
    /// dimensionality (objective evaluation, particle step, dimension-reduce
    /// entry, or model prediction).
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error that occurs when a fitting run is assembled without one of its
    /// required collaborators.
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a loss is requested over an empty dataset.
    #[error("Empty dataset error: Cannot compute a loss over an empty dataset")]
    EmptyDataset,

    /// Error that occurs when NaN or infinity values are encountered.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when a CSV record cannot be read or parsed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for swarm optimization operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `SwarmError`.
///
/// ## Examples
///
/// ```rust
/// use swarmfit::error::{SwarmError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SwarmError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `SwarmError`.
///
/// ## Examples
///
/// ```rust
/// use swarmfit::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> swarmfit::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `SwarmError` with the provided
    /// context.
    ///
    /// ## Arguments
    ///
    /// * `context` - A string providing context for the error.
    ///
    /// ## Returns
    ///
    /// A `Result<T, SwarmError>` with the original value or a contextualized
    /// error.
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
        self.map_err(|e| SwarmError::Other(format!("{}: {}", context, e)))
    }
}
