//! Up-front candidate totals for progress scaling.

use crate::error::{Result, SearchError};
use crate::source::{BruteForceSource, CandidateSource, DictionarySource};
use tracing::warn;

/// Total number of candidates a source will yield, if known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalCount {
    Exact(u64),
    #[default]
    Unknown,
}

impl TotalCount {
    pub fn exact(&self) -> Option<u64> {
        match self {
            TotalCount::Exact(n) => Some(*n),
            TotalCount::Unknown => None,
        }
    }
}

impl std::fmt::Display for TotalCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TotalCount::Exact(n) => write!(f, "{}", n),
            TotalCount::Unknown => write!(f, "unknown"),
        }
    }
}

/// Computes candidate totals without materializing any sequence.
pub struct SizeEstimator;

impl SizeEstimator {
    /// Exact total for any source.
    pub fn count(source: &CandidateSource) -> Result<u64> {
        match source {
            CandidateSource::Dictionary(dict) => Self::count_dictionary(dict),
            CandidateSource::BruteForce(brute) => Self::count_brute_force(brute),
        }
    }

    /// Like [`SizeEstimator::count`], but overflow degrades to `Unknown` with a warning.
    pub fn total(source: &CandidateSource) -> Result<TotalCount> {
        match Self::count(source) {
            Ok(n) => Ok(TotalCount::Exact(n)),
            Err(err) if !err.is_fatal() => {
                warn!("{}; progress will be unscaled", err);
                Ok(TotalCount::Unknown)
            }
            Err(err) => Err(err),
        }
    }

    pub fn count_dictionary(source: &DictionarySource) -> Result<u64> {
        source.count_records()
    }

    pub fn count_brute_force(source: &BruteForceSource) -> Result<u64> {
        brute_force_total(
            source.alphabet().len(),
            source.min_length(),
            source.max_length(),
        )
    }
}

/// Closed form `Σ_{L=min}^{max} n^L` with overflow detection.
pub fn brute_force_total(alphabet_len: usize, min: usize, max: usize) -> Result<u64> {
    let overflow = || SearchError::CapacityOverflow {
        alphabet_len,
        min,
        max,
    };

    if min > max {
        return Ok(0);
    }

    // 0^L and 1^L do not grow with L, so the range can be any size
    if alphabet_len == 0 {
        return Ok(u64::from(min == 0));
    }
    if alphabet_len == 1 {
        let span = u64::try_from(max - min).map_err(|_| overflow())?;
        return span.checked_add(1).ok_or_else(overflow);
    }

    let n = u64::try_from(alphabet_len).map_err(|_| overflow())?;
    let mut total = 0u64;

    for length in min..=max {
        let exponent = u32::try_from(length).map_err(|_| overflow())?;
        let term = n.checked_pow(exponent).ok_or_else(overflow)?;
        total = total.checked_add(term).ok_or_else(overflow)?;
    }

    Ok(total)
}
