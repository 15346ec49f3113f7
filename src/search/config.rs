//! Configuration types for a search run

use crate::error::{Result, SearchError};
use crate::source::{BruteForceSource, CandidateSource, DictionarySource};
use std::path::PathBuf;

/// Where candidates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Replay a wordlist, one candidate per line
    Dictionary { path: PathBuf },
    /// Enumerate every string over `alphabet` with length in `min_length..=max_length`
    BruteForce {
        alphabet: String,
        min_length: i64,
        max_length: i64,
    },
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceMode::Dictionary { path } => write!(f, "dictionary ({})", path.display()),
            SourceMode::BruteForce {
                alphabet,
                min_length,
                max_length,
            } => write!(
                f,
                "brute-force (charset {:?}, lengths {}..={})",
                alphabet, min_length, max_length
            ),
        }
    }
}

/// Main search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Candidate strategy; `None` until one is chosen
    pub mode: Option<SourceMode>,
    /// Number of worker threads evaluating candidates
    pub worker_count: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: None,
            worker_count: num_cpus::get(),
        }
    }
}

impl SearchConfig {
    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_dictionary(self, path: impl Into<PathBuf>) -> Self {
        self.with_mode(SourceMode::Dictionary { path: path.into() })
    }

    pub fn with_brute_force(
        self,
        alphabet: impl Into<String>,
        min_length: i64,
        max_length: i64,
    ) -> Self {
        self.with_mode(SourceMode::BruteForce {
            alphabet: alphabet.into(),
            min_length,
            max_length,
        })
    }

    /// Set the worker count. Zero is kept as-is and rejected by `validate`.
    pub fn with_workers(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Check everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        ensure_workers(self.worker_count)?;
        self.selected_mode().map(|_| ())
    }

    fn selected_mode(&self) -> Result<&SourceMode> {
        self.mode.as_ref().ok_or_else(|| {
            SearchError::InvalidConfig(
                "provide either a wordlist or a brute-force charset".to_string(),
            )
        })
    }

    /// Validate, then build the candidate source for the selected mode.
    pub fn open_source(&self) -> Result<CandidateSource> {
        ensure_workers(self.worker_count)?;
        match self.selected_mode()? {
            SourceMode::Dictionary { path } => Ok(DictionarySource::open(path)?.into()),
            SourceMode::BruteForce {
                alphabet,
                min_length,
                max_length,
            } => Ok(BruteForceSource::new(alphabet, *min_length, *max_length)?.into()),
        }
    }
}

pub(crate) fn ensure_workers(worker_count: usize) -> Result<()> {
    if worker_count == 0 {
        return Err(SearchError::InvalidConfig(
            "worker count must be at least 1".to_string(),
        ));
    }
    Ok(())
}
