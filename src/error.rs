//! Error type shared across the crate.
//!
//! All fallible operations return [`Result`]. The evaluation kernels
//! themselves are pure and infallible; errors arise at the edges, from
//! reading point files, validating their cardinality, and writing scene
//! output.

use thiserror::Error;

/// Unified error type for curvegen.
#[derive(Debug, Error)]
pub enum Error {
    /// A point file line did not parse as `x y z`, or the file held the
    /// wrong number of points for the requested shape.
    #[error("Invalid input: {0}")]
    InvalidFormat(String),

    /// A command-line value was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArguments(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
