//! Error types for the mdhwpx library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdhwpx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion and packaging.
///
/// Fatal errors abort the conversion before any output is written.
/// Per-line anomalies (unsupported constructs, style fallbacks) are
/// never surfaced here; they accumulate as warnings in the audit trail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input document does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// The style catalog or style guide is missing or malformed.
    #[error("Style configuration error: {0}")]
    Config(String),

    /// A paragraph or run references a style id the active catalog
    /// does not define.
    #[error("Packaging error: {0}")]
    Packaging(String),

    /// The template container is unusable (not a package, or the
    /// style header part is missing).
    #[error("Template error: {0}")]
    Template(String),

    /// Low-level ZIP container error.
    #[error("Container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
