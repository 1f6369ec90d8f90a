use crate::search::Verbosity;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of paths taken off the frontier, goal paths included
    expanded_paths: usize,
    /// Number of paths built from neighbour arcs
    generated_paths: usize,
    /// Number of generated paths refused by the pruning policy
    pruned_paths: usize,
    /// Largest frontier size seen after an expansion
    peak_frontier_size: usize,
    /// Number of solutions returned so far
    solutions_found: usize,
    /// Time when the searcher was created
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Nothing is logged below [`Verbosity::Normal`]
    verbosity: Verbosity,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_paths: 0,
            generated_paths: 0,
            pruned_paths: 0,
            peak_frontier_size: 0,
            solutions_found: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
            verbosity: Verbosity::default(),
        }
    }

    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        Self { verbosity, ..self }
    }

    pub fn increment_expanded_paths(&mut self) {
        self.expanded_paths += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_paths(&mut self) {
        self.generated_paths += 1;
    }

    pub fn increment_pruned_paths(&mut self) {
        self.pruned_paths += 1;
    }

    pub fn increment_solutions_found(&mut self) {
        self.solutions_found += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_size);
    }

    pub fn expanded_paths(&self) -> usize {
        self.expanded_paths
    }

    pub fn generated_paths(&self) -> usize {
        self.generated_paths
    }

    pub fn pruned_paths(&self) -> usize {
        self.pruned_paths
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    pub fn solutions_found(&self) -> usize {
        self.solutions_found
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        if !self.verbosity.shows(Verbosity::Normal) {
            return;
        }
        info!(
            expanded_paths = self.expanded_paths,
            generated_paths = self.generated_paths,
            pruned_paths = self.pruned_paths,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        if !self.verbosity.shows(Verbosity::Normal) {
            return;
        }
        info!("finalising search");
        self.log();
        info!(
            solutions_found = self.solutions_found,
            search_duration = self.search_start_time.elapsed().as_secs_f64()
        );
    }
}
