//! Ready-made verifiers.
//!
//! Anything implementing [`crate::search::Verifier`] can drive a search; these
//! two make the command-line tool usable without writing code.

pub mod command;
pub mod digest;

pub use command::{CommandVerifier, CANDIDATE_ENV, CANDIDATE_PLACEHOLDER};
pub use digest::{DigestAlgorithm, DigestVerifier};
