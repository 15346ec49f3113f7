//! Worker-to-coordinator reporting channel.

use crate::search::Verdict;
use crossbeam_channel::{unbounded, Receiver, Sender};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Worker completed one verifier call.
    Attempt { worker_id: usize, verdict: Verdict },
    /// Worker has stopped pulling candidates.
    Finished {
        worker_id: usize,
        candidates_evaluated: u64,
    },
}

/// Create the reporting channel.
///
/// Unbounded so a slow progress sink never stalls a worker; the backlog is
/// bounded in practice by how fast the verifier runs.
pub fn create_channel() -> (Sender<WorkerMessage>, Receiver<WorkerMessage>) {
    unbounded()
}
