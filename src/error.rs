//! Error types for the Cinelab library.
//!
//! All errors are represented by the [`CinelabError`] enum. Only boundary I/O
//! failures are fatal to a pipeline run; per-record problems (malformed or
//! incomplete records) are recovered locally by dropping the offending record
//! and are surfaced in aggregate through the normalization summary.
//!
//! # Examples
//!
//! ```
//! use cinelab::error::{CinelabError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CinelabError::malformed("genres field is not a string or sequence"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Cinelab operations.
///
/// Per-record variants (`MalformedRecord`, `IncompleteRecord`) are never
/// propagated out of a batch: callers drop the record and continue. I/O and
/// CSV variants abort the run.
#[derive(Error, Debug)]
pub enum CinelabError {
    /// I/O errors (missing or unreadable input file, failed writes). Fatal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV read/write errors at the file boundary. Fatal.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A multi-valued field could not be parsed into tokens at all.
    /// The record is excluded, not fatal to the batch.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A required field is missing or blank after normalization.
    /// The record is dropped, not fatal to the batch.
    #[error("Incomplete record: {0}")]
    IncompleteRecord(String),

    /// Feature extraction errors (empty corpus, unknown label, etc.)
    #[error("Feature error: {0}")]
    Feature(String),

    /// Model training errors
    #[error("Training error: {0}")]
    Training(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CinelabError.
pub type Result<T> = std::result::Result<T, CinelabError>;

impl CinelabError {
    /// Create a new malformed-record error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        CinelabError::MalformedRecord(msg.into())
    }

    /// Create a new incomplete-record error.
    pub fn incomplete<S: Into<String>>(msg: S) -> Self {
        CinelabError::IncompleteRecord(msg.into())
    }

    /// Create a new feature error.
    pub fn feature<S: Into<String>>(msg: S) -> Self {
        CinelabError::Feature(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        CinelabError::Training(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        CinelabError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CinelabError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// True when the error is recoverable by dropping the record.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            CinelabError::MalformedRecord(_) | CinelabError::IncompleteRecord(_)
        )
    }
}
