//! Error types for search setup.
//!
//! Only configuration and source-opening failures are errors. A verifier
//! failing on one candidate is a `Verdict::Error`, not a `SearchError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised before (or instead of) running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Bad worker count, missing mode, or an unusable oracle description
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Brute-force length bounds are negative or inverted
    #[error("invalid length range: min {min}, max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// The candidate total does not fit in a u64
    #[error("candidate count overflows u64 (alphabet of {alphabet_len}, lengths {min}..={max})")]
    CapacityOverflow {
        alphabet_len: usize,
        min: usize,
        max: usize,
    },

    /// The dictionary could not be opened or read
    #[error("wordlist {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    /// Fatal errors stop the run; capacity overflow only degrades progress.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SearchError::CapacityOverflow { .. })
    }
}
