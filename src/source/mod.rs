//! Candidate sources: lazy, ordered sequences of candidate strings.
//!
//! Two strategies are provided:
//! - [`DictionarySource`]: replay of a wordlist, one candidate per line
//! - [`BruteForceSource`]: every string over an alphabet within a length range
//!
//! Both are plain [`Iterator`]s. A source is consumed by exactly one search;
//! the coordinator serializes pulls, so no source needs to be `Sync`.

pub mod brute_force;
pub mod dictionary;
pub mod estimate;

pub use brute_force::BruteForceSource;
pub use dictionary::DictionarySource;
pub use estimate::{SizeEstimator, TotalCount};

use crate::error::SearchError;

/// Either candidate strategy, selected from configuration.
#[derive(Debug)]
pub enum CandidateSource {
    Dictionary(DictionarySource),
    BruteForce(BruteForceSource),
}

impl CandidateSource {
    /// Short human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            CandidateSource::Dictionary(dict) => format!("wordlist {}", dict.path().display()),
            CandidateSource::BruteForce(brute) => format!(
                "charset {:?} lengths {}..={}",
                brute.alphabet().iter().collect::<String>(),
                brute.min_length(),
                brute.max_length()
            ),
        }
    }

    /// Take the error that cut the sequence short, if any.
    ///
    /// Generated sequences cannot fail; a wordlist can fail mid-read.
    pub fn take_error(&mut self) -> Option<SearchError> {
        match self {
            CandidateSource::Dictionary(dict) => dict.take_error(),
            CandidateSource::BruteForce(_) => None,
        }
    }
}

impl Iterator for CandidateSource {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            CandidateSource::Dictionary(dict) => dict.next(),
            CandidateSource::BruteForce(brute) => brute.next(),
        }
    }
}

impl From<DictionarySource> for CandidateSource {
    fn from(source: DictionarySource) -> Self {
        CandidateSource::Dictionary(source)
    }
}

impl From<BruteForceSource> for CandidateSource {
    fn from(source: BruteForceSource) -> Self {
        CandidateSource::BruteForce(source)
    }
}
