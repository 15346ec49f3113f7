//! Shared state for one search run.

use std::iter::Fuse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State every worker of a single search shares by reference.
///
/// Holds the pull cursor over the candidate source, the cancellation flag
/// and the write-once result slot. Created fresh per search and dropped with
/// the coordinator.
#[derive(Debug)]
pub struct SearchContext<I> {
    cursor: Mutex<Fuse<I>>,
    /// Write-once-true; set only by the worker whose acceptance wins
    cancelled: AtomicBool,
    winner: Mutex<Option<String>>,
}

impl<I> SearchContext<I>
where
    I: Iterator<Item = String>,
{
    pub fn new(candidates: I) -> Self {
        Self {
            cursor: Mutex::new(candidates.fuse()),
            cancelled: AtomicBool::new(false),
            winner: Mutex::new(None),
        }
    }

    /// Pull the next candidate, or `None` once cancelled or exhausted.
    ///
    /// Only one worker advances the source at a time.
    pub fn next_candidate(&self) -> Option<String> {
        if self.is_cancelled() {
            return None;
        }
        let mut cursor = lock(&self.cursor);
        if self.is_cancelled() {
            return None;
        }
        cursor.next()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Record an accepted candidate. Returns true if this call won the race.
    ///
    /// Only the first caller flips the flag and fills the slot; later calls
    /// leave both untouched.
    pub fn try_claim(&self, candidate: String) -> bool {
        if self
            .cancelled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        let mut slot = lock(&self.winner);
        if slot.is_none() {
            *slot = Some(candidate);
        }
        true
    }

    /// Consume the context and return the winning candidate, if any.
    pub fn into_winner(self) -> Option<String> {
        self.winner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// Ignores poisoning. A verifier panic is still re-raised when the search scope ends.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
