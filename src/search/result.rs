//! Search outcome and statistics

use crate::source::TotalCount;
use std::time::Duration;

/// Final result of one search. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The verifier accepted this candidate
    Found(String),
    /// Every candidate was evaluated and none was accepted
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn candidate(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found(candidate) => Some(candidate),
            SearchOutcome::Exhausted => None,
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Found(candidate) => write!(f, "found: {}", candidate),
            SearchOutcome::Exhausted => write!(f, "not found"),
        }
    }
}

/// Statistics from a search
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Size of the worker pool
    pub worker_count: usize,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Number of verifier calls that completed
    pub candidates_evaluated: u64,
    /// Verifier calls that returned Accepted (late acceptances included)
    pub accepted: u64,
    /// Verifier calls that returned Rejected
    pub rejected: u64,
    /// Verifier calls that returned Error
    pub errors: u64,
    /// Evaluations completed by each worker, indexed by worker id
    pub per_worker: Vec<u64>,
}

impl SearchStatistics {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            per_worker: vec![0; worker_count],
            ..Default::default()
        }
    }

    /// Get candidates evaluated per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.candidates_evaluated as f64 / secs
        }
    }

    /// Fraction of evaluations that ended in a verifier error (0.0 to 1.0)
    pub fn error_rate(&self) -> f64 {
        if self.candidates_evaluated == 0 {
            0.0
        } else {
            self.errors as f64 / self.candidates_evaluated as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Workers: {}\n", self.worker_count));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!(
            "Candidates evaluated: {}\n",
            self.candidates_evaluated
        ));
        s.push_str(&format!(
            "Throughput: {:.0} candidates/sec\n",
            self.throughput()
        ));

        if self.errors > 0 {
            s.push_str(&format!(
                "Verifier errors: {} ({:.2}%)\n",
                self.errors,
                self.error_rate() * 100.0
            ));
        }

        s
    }
}

/// Outcome plus statistics, as returned by the coordinator.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Total the progress display was scaled to; `Unknown` if the estimate overflowed
    pub total: TotalCount,
    pub statistics: SearchStatistics,
}
