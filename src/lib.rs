//! keysweep - concurrent dictionary and brute-force secret search.
//!
//! Candidates come from a wordlist or from every string over an alphabet in
//! a length range. A fixed pool of worker threads tests them against a
//! [`Verifier`] and the first accepted candidate cancels the rest of the run.

pub mod error;
pub mod search;
pub mod source;
pub mod verify;

pub use error::{Result, SearchError};
pub use search::{
    run, search, search_candidates, NoProgress, ProgressSink, SearchConfig, SearchOutcome,
    SearchReport, SourceMode, Verdict, Verifier,
};
pub use source::{BruteForceSource, CandidateSource, DictionarySource, SizeEstimator, TotalCount};
