//! ap_io — tabular JSON I/O for the apportionment engine.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Loaders validate row shape and cross-references before anything reaches
//!   the engine; writers emit deterministic, already-ranked tables.
//! - No network I/O anywhere.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for ap_io (loaders and writers).
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors.
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors.
    #[error("json error: {0}")]
    Json(String),

    /// Row-level validation / cross-reference failures.
    #[error("invalid table: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json(e.to_string())
    }
}

pub mod loader;
pub mod writer;

pub use loader::{load_regions, load_votes, RegionRow, VoteRow};
pub use writer::{write_national_seats, write_region_seats};
