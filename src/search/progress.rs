//! Progress reporting for a running search.
//!
//! The coordinator calls a [`ProgressSink`] from its own thread only, once
//! per completed evaluation, so sinks need neither `Send` nor `Sync`.

use crate::search::{SearchOutcome, Verdict};
use crate::source::TotalCount;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Receives one event per completed verifier call.
pub trait ProgressSink {
    /// Called once before any worker starts.
    fn on_start(&mut self, total: TotalCount) {
        let _ = total;
    }

    /// Called once per completed evaluation, whatever the verdict.
    fn on_attempt(&mut self, verdict: &Verdict);

    /// Called once after every worker has stopped.
    fn on_finish(&mut self, outcome: &SearchOutcome) {
        let _ = outcome;
    }

    /// Called instead of `on_finish` when the source failed and no outcome exists.
    fn on_abort(&mut self) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_attempt(&mut self, _verdict: &Verdict) {}
}

/// Terminal progress bar on stderr.
///
/// Draws a bar when the total is known and a spinner otherwise.
pub struct ProgressBarSink {
    bar: ProgressBar,
    errors: u64,
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBarSink {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            errors: 0,
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.red} [{elapsed_precise}] [{bar:40.red/blue}] {pos}/{len} ({per_sec}, eta {eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.red} [{elapsed_precise}] {pos} candidates ({per_sec}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl ProgressSink for ProgressBarSink {
    fn on_start(&mut self, total: TotalCount) {
        self.bar = match total {
            TotalCount::Exact(len) => ProgressBar::new(len).with_style(Self::bar_style()),
            TotalCount::Unknown => ProgressBar::new_spinner().with_style(Self::spinner_style()),
        };
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_attempt(&mut self, verdict: &Verdict) {
        self.bar.inc(1);
        if verdict.is_error() {
            self.errors += 1;
            self.bar.set_message(format!("{} verifier errors", self.errors));
        }
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        match outcome {
            SearchOutcome::Found(_) => self.bar.finish_with_message("match found"),
            SearchOutcome::Exhausted => self.bar.abandon_with_message("exhausted"),
        }
    }

    fn on_abort(&mut self) {
        self.bar.abandon_with_message("aborted");
    }
}
