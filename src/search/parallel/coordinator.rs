//! Search coordinator that manages the worker pool.

use crate::error::Result;
use crate::search::config::ensure_workers;
use crate::search::parallel::channel::{create_channel, WorkerMessage};
use crate::search::parallel::context::SearchContext;
use crate::search::progress::ProgressSink;
use crate::search::result::{SearchOutcome, SearchReport, SearchStatistics};
use crate::search::{Verdict, Verifier};
use crate::source::{CandidateSource, SizeEstimator, TotalCount};
use crossbeam_channel::Sender;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Search a candidate source with `worker_count` parallel workers.
///
/// The total is estimated first for progress scaling; an overflowing
/// estimate degrades to [`TotalCount::Unknown`] with a warning. A wordlist
/// that fails mid-read without a match yields `SourceUnavailable`, never
/// [`SearchOutcome::Exhausted`].
pub fn search<V, P>(
    mut source: CandidateSource,
    verifier: &V,
    worker_count: usize,
    progress: &mut P,
) -> Result<SearchReport>
where
    V: Verifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    ensure_workers(worker_count)?;
    let total = SizeEstimator::total(&source)?;
    info!(source = %source.describe(), total = %total, workers = worker_count, "starting search");
    search_source(&mut source, total, verifier, worker_count, progress)
}

fn search_source<V, P>(
    source: &mut CandidateSource,
    total: TotalCount,
    verifier: &V,
    worker_count: usize,
    progress: &mut P,
) -> Result<SearchReport>
where
    V: Verifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    let (winner, statistics) = run_pool(&mut *source, total, verifier, worker_count, progress);

    // A truncated wordlist is not an exhausted one
    if winner.is_none() {
        if let Some(err) = source.take_error() {
            warn!(error = %err, evaluated = statistics.candidates_evaluated, "search aborted");
            progress.on_abort();
            return Err(err);
        }
    }

    Ok(finish(winner, total, statistics, progress))
}

/// Search any candidate iterator with `worker_count` parallel workers.
///
/// Workers pull from the shared cursor one candidate at a time and stop at
/// the first acceptance or when the iterator runs dry. Every worker is
/// joined before this returns, so in-flight verifier calls complete and
/// each one is reported to `progress` exactly once.
pub fn search_candidates<I, V, P>(
    candidates: I,
    total: TotalCount,
    verifier: &V,
    worker_count: usize,
    progress: &mut P,
) -> Result<SearchReport>
where
    I: Iterator<Item = String> + Send,
    V: Verifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    ensure_workers(worker_count)?;
    let (winner, statistics) = run_pool(candidates, total, verifier, worker_count, progress);
    Ok(finish(winner, total, statistics, progress))
}

/// Run the worker pool to completion and return the winner, if any.
fn run_pool<I, V, P>(
    candidates: I,
    total: TotalCount,
    verifier: &V,
    worker_count: usize,
    progress: &mut P,
) -> (Option<String>, SearchStatistics)
where
    I: Iterator<Item = String> + Send,
    V: Verifier + ?Sized,
    P: ProgressSink + ?Sized,
{
    let start_time = Instant::now();
    let context = SearchContext::new(candidates);
    let (to_coordinator, from_workers) = create_channel();
    let mut statistics = SearchStatistics::new(worker_count);

    progress.on_start(total);

    thread::scope(|scope| {
        for worker_id in 0..worker_count {
            let context = &context;
            let to_coordinator = to_coordinator.clone();
            scope.spawn(move || run_worker(worker_id, context, verifier, to_coordinator));
        }
        // Workers hold the only remaining senders; the loop ends when all stop
        drop(to_coordinator);

        run_coordinator(&from_workers, &mut statistics, progress);
    });

    statistics.elapsed_time = start_time.elapsed();
    (context.into_winner(), statistics)
}

fn finish<P>(
    winner: Option<String>,
    total: TotalCount,
    statistics: SearchStatistics,
    progress: &mut P,
) -> SearchReport
where
    P: ProgressSink + ?Sized,
{
    let outcome = match winner {
        Some(candidate) => SearchOutcome::Found(candidate),
        None => SearchOutcome::Exhausted,
    };
    progress.on_finish(&outcome);

    info!(
        outcome = %outcome,
        evaluated = statistics.candidates_evaluated,
        elapsed = ?statistics.elapsed_time,
        "search finished"
    );

    SearchReport {
        outcome,
        total,
        statistics,
    }
}

/// Coordinator loop that receives messages from workers and aggregates results.
fn run_coordinator<P>(
    from_workers: &crossbeam_channel::Receiver<WorkerMessage>,
    statistics: &mut SearchStatistics,
    progress: &mut P,
) where
    P: ProgressSink + ?Sized,
{
    for message in from_workers.iter() {
        match message {
            WorkerMessage::Attempt { verdict, .. } => {
                statistics.candidates_evaluated += 1;
                match verdict {
                    Verdict::Accepted => statistics.accepted += 1,
                    Verdict::Rejected => statistics.rejected += 1,
                    Verdict::Error(_) => statistics.errors += 1,
                }
                progress.on_attempt(&verdict);
            }
            WorkerMessage::Finished {
                worker_id,
                candidates_evaluated,
            } => {
                if let Some(slot) = statistics.per_worker.get_mut(worker_id) {
                    *slot = candidates_evaluated;
                }
            }
        }
    }
}

/// Worker loop: pull, re-check cancellation, verify, report.
fn run_worker<I, V>(
    worker_id: usize,
    context: &SearchContext<I>,
    verifier: &V,
    to_coordinator: Sender<WorkerMessage>,
) where
    I: Iterator<Item = String>,
    V: Verifier + ?Sized,
{
    debug!(worker_id, "worker started");
    let mut candidates_evaluated = 0u64;

    while let Some(candidate) = context.next_candidate() {
        // Another worker may have won while this one waited on the cursor
        if context.is_cancelled() {
            break;
        }

        let verdict = verifier.verify(&candidate);
        candidates_evaluated += 1;

        match &verdict {
            Verdict::Accepted => {
                if context.try_claim(candidate) {
                    info!(worker_id, "candidate accepted, cancelling search");
                } else {
                    debug!(worker_id, "late acceptance ignored");
                }
            }
            Verdict::Rejected => {}
            Verdict::Error(detail) => {
                warn!(worker_id, detail = %detail, "verifier error, continuing");
            }
        }

        let _ = to_coordinator.send(WorkerMessage::Attempt { worker_id, verdict });
    }

    debug!(worker_id, candidates_evaluated, "worker stopped");
    let _ = to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        candidates_evaluated,
    });
}
