//! Parallel search execution over a shared candidate cursor.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that owns the worker pool and aggregates results
//! - A fixed number of **workers** that pull candidates and run the verifier
//! - A **channel** carrying one message per completed evaluation back to the
//!   coordinator, which forwards it to the progress sink
//! - A **search context** holding the pull cursor, the cancellation flag and
//!   the write-once result slot
//!
//! # Example
//!
//! ```ignore
//! use keysweep::search::{search, NoProgress, Verdict};
//! use keysweep::source::BruteForceSource;
//!
//! let source = BruteForceSource::new("abc", 1, 4)?.into();
//! let verifier = |c: &str| if c == "cab" { Verdict::Accepted } else { Verdict::Rejected };
//! let report = search(source, &verifier, 4, &mut NoProgress)?;
//! ```

pub mod channel;
pub mod context;
pub mod coordinator;

pub use context::SearchContext;
pub use coordinator::{search, search_candidates};
