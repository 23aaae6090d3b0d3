//! Error types for the vroom library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when computing a route through the solver.
///
/// The display strings for the precondition variants are part of the
/// caller-facing contract and must not change.
#[derive(Error, Debug)]
pub enum RouteError {
    /// The configured solver binary does not exist.
    #[error("Vroom binary file doesn't exist")]
    BinaryMissing { path: PathBuf },

    /// The solver binary exists but is not executable.
    #[error("Cannot execute Vroom binary file")]
    BinaryNotExecutable { path: PathBuf },

    /// Fewer than two locations were supplied.
    #[error("Must send more than one location")]
    TooFewLocations { count: usize },

    /// IO error when spawning the solver or collecting its output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The solver's output was not a valid JSON document.
    #[error("{0}")]
    InvalidOutput(#[from] serde_json::Error),
}

/// Result type alias using [`RouteError`].
pub type Result<T> = std::result::Result<T, RouteError>;
