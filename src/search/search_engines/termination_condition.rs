use crate::search::{search_engines::SearchResult, Verbosity};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Number of polls between two reads of the clock.
pub const TIME_CHECK_INTERVAL: usize = 100_000;

/// Wall clock budget of a single call to a search engine. The clock is only
/// read every [`TIME_CHECK_INTERVAL`] polls to keep the overhead of the check
/// low.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    start_time: Instant,
    skipped_checks: usize,
    peak_memory_usage_mb: Option<usize>,
    verbosity: Verbosity,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, verbosity: Verbosity) -> Self {
        if verbosity.shows(Verbosity::Normal) {
            info!(time_limit = time_limit.map(|d| d.as_secs_f64()));
        }
        Self {
            time_limit,
            start_time: Instant::now(),
            skipped_checks: 0,
            peak_memory_usage_mb: None,
            verbosity,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn log(&mut self) {
        if !self.verbosity.shows(Verbosity::Normal) {
            return;
        }
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = self.elapsed().as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        if !self.verbosity.shows(Verbosity::Normal) {
            return;
        }
        self.log();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.elapsed().as_secs_f64(),
        );
    }

    /// Poll the condition once per search iteration.
    pub fn should_terminate<N, A>(&mut self) -> Option<SearchResult<N, A>> {
        let time_limit = self.time_limit?;
        if self.skipped_checks < TIME_CHECK_INTERVAL {
            self.skipped_checks += 1;
            return None;
        }
        self.skipped_checks = 0;
        if self.elapsed() > time_limit {
            return Some(SearchResult::TimeLimitExceeded);
        }
        None
    }
}
