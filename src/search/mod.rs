//! Concurrent search of a candidate space against a verification oracle
//!
//! This module provides:
//! - The [`Verifier`] seam: anything that can judge one candidate
//! - [`SearchConfig`]: which source to open and how many workers to run
//! - The parallel coordinator ([`search`], [`search_candidates`])
//! - Progress sinks and the [`SearchReport`] returned by every run

pub mod config;
pub mod parallel;
pub mod progress;
pub mod result;

pub use config::{SearchConfig, SourceMode};
pub use parallel::{search, search_candidates, SearchContext};
pub use progress::{NoProgress, ProgressBarSink, ProgressSink};
pub use result::{SearchOutcome, SearchReport, SearchStatistics};

use crate::error::Result;
use tracing::info;

/// A verifier's judgement of one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate unlocks the target
    Accepted,
    /// The candidate is wrong
    Rejected,
    /// The verifier could not decide; the detail is opaque to the search
    Error(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Verdict::Error(_))
    }
}

/// Oracle that tests a single candidate.
///
/// Called concurrently from every worker thread, hence `Sync`. Calls may
/// block for as long as they need; the search never interrupts one.
pub trait Verifier: Sync {
    fn verify(&self, candidate: &str) -> Verdict;
}

impl<F> Verifier for F
where
    F: Fn(&str) -> Verdict + Sync,
{
    fn verify(&self, candidate: &str) -> Verdict {
        self(candidate)
    }
}

/// Validate `config`, open its source and run the search.
///
/// Every setup failure is returned before a single worker starts.
pub fn run<V, P>(config: &SearchConfig, verifier: &V, progress: &mut P) -> Result<SearchReport>
where
    V: Verifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    config.validate()?;
    if let Some(mode) = &config.mode {
        info!(mode = %mode, "opening candidate source");
    }
    let source = config.open_source()?;
    search(source, verifier, config.worker_count, progress)
}
