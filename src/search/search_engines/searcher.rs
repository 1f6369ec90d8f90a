//! The generic search loop. A [`Searcher`] is composed of an ordering policy
//! (its [`Frontier`]), a [`Pruning`] policy and the [`FrontierValue`] used to
//! rank paths. Every named strategy is one such combination.

use crate::search::{
    search_engines::{
        MultiPathPruning, NoPruning, Pruning, SearchEngine, SearchResult, SearchStatistics,
        TerminationCondition,
    },
    FifoFrontier, Frontier, FrontierPQ, HeuristicValue, LifoFrontier, Path, SearchProblem,
    Verbosity,
};
use std::time::Duration;
use tracing::{debug, info, trace};

type NodeOf<P> = <P as SearchProblem>::Node;
type ActionOf<P> = <P as SearchProblem>::Action;

pub type DepthFirstSearcher<'a, P> =
    Searcher<'a, P, LifoFrontier<NodeOf<P>, ActionOf<P>>, NoPruning>;
pub type BFSSearcher<'a, P> = Searcher<'a, P, FifoFrontier<NodeOf<P>, ActionOf<P>>, NoPruning>;
pub type BFSMultiPruneSearcher<'a, P> =
    Searcher<'a, P, FifoFrontier<NodeOf<P>, ActionOf<P>>, MultiPathPruning<NodeOf<P>>>;
pub type LowestCostFirstSearcher<'a, P> =
    Searcher<'a, P, FrontierPQ<NodeOf<P>, ActionOf<P>>, NoPruning>;
pub type AStarSearcher<'a, P> = Searcher<'a, P, FrontierPQ<NodeOf<P>, ActionOf<P>>, NoPruning>;
pub type AStarMultiPruneSearcher<'a, P> =
    Searcher<'a, P, FrontierPQ<NodeOf<P>, ActionOf<P>>, MultiPathPruning<NodeOf<P>>>;

/// The value a path is ranked by when it enters the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierValue {
    /// Path cost
    Cost,
    /// Path cost plus the heuristic estimate at the end of the path
    CostPlusHeuristic,
}

impl FrontierValue {
    pub fn evaluate<P: SearchProblem>(
        self,
        problem: &P,
        path: &Path<P::Node, P::Action>,
    ) -> HeuristicValue {
        match self {
            FrontierValue::Cost => path.cost(),
            FrontierValue::CostPlusHeuristic => path.cost() + problem.heuristic(path.end()),
        }
    }
}

/// Searches `problem` from its start node. Solutions are found by repeatedly
/// calling [`Searcher::search`]; the frontier and the expansion counter are
/// kept between calls.
#[derive(Debug)]
pub struct Searcher<'a, P, F, R>
where
    P: SearchProblem,
{
    problem: &'a P,
    frontier: F,
    pruning: R,
    frontier_value: FrontierValue,
    verbosity: Verbosity,
    statistics: SearchStatistics,
    solution: Option<Path<P::Node, P::Action>>,
}

impl<'a, P, F, R> Searcher<'a, P, F, R>
where
    P: SearchProblem,
    F: Frontier<P::Node, P::Action>,
    R: Pruning<P::Node>,
{
    /// Create a searcher whose frontier holds the single node path at the
    /// start node.
    pub fn new(problem: &'a P, frontier: F, pruning: R, frontier_value: FrontierValue) -> Self {
        let mut searcher = Self {
            problem,
            frontier,
            pruning,
            frontier_value,
            verbosity: Verbosity::default(),
            statistics: SearchStatistics::new(),
            solution: None,
        };
        let start = Path::new(problem.start_node());
        if searcher.pruning.admit_start(start.end()) {
            let value = frontier_value.evaluate(problem, &start);
            searcher.frontier.add(start, value);
        }
        searcher
    }

    pub fn with_verbosity(self, verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            statistics: self.statistics.with_verbosity(verbosity),
            ..self
        }
    }

    pub fn frontier(&self) -> &F {
        &self.frontier
    }

    pub fn pruning(&self) -> &R {
        &self.pruning
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn num_expanded(&self) -> usize {
        self.statistics.expanded_paths()
    }

    /// The last solution returned by [`Searcher::search`].
    pub fn solution(&self) -> Option<&Path<P::Node, P::Action>> {
        self.solution.as_ref()
    }

    /// Add `path` to the frontier, unless the pruning policy rejects its end
    /// node.
    pub fn add_to_frontier(&mut self, path: Path<P::Node, P::Action>) {
        if !self.pruning.admit(path.end()) {
            self.statistics.increment_pruned_paths();
            return;
        }
        let value = self.frontier_value.evaluate(self.problem, &path);
        self.frontier.add(path, value);
    }

    /// Return the next path from the start node to a goal node.
    ///
    /// With a time limit, the clock is checked every
    /// [`TIME_CHECK_INTERVAL`](crate::search::search_engines::TIME_CHECK_INTERVAL)
    /// iterations and the search gives up once the limit has passed. The
    /// paths left in the frontier are kept, so a later call resumes where
    /// this one stopped.
    pub fn search(&mut self, time_limit: Option<Duration>) -> SearchResult<P::Node, P::Action> {
        let mut termination_condition = TerminationCondition::new(time_limit, self.verbosity);

        while !self.frontier.is_empty() {
            if let Some(result) = termination_condition.should_terminate() {
                if self.verbosity.shows(Verbosity::Normal) {
                    info!(
                        "time limit {:?} exceeded after {} seconds",
                        time_limit,
                        termination_condition.elapsed().as_secs_f64()
                    );
                }
                self.statistics.finalise_search();
                termination_condition.finalise();
                return result;
            }

            let path = self.frontier.pop();
            if self.verbosity.shows(Verbosity::Verbose) {
                debug!(path = ?path, cost = path.cost().into_inner(), "expanding");
            }
            self.statistics.increment_expanded_paths();

            if self.problem.is_goal(path.end()) {
                if self.verbosity.shows(Verbosity::Normal) {
                    info!(
                        "{} paths have been expanded and {} paths remain in the frontier",
                        self.num_expanded(),
                        self.frontier.len()
                    );
                }
                self.statistics.increment_solutions_found();
                self.statistics.finalise_search();
                termination_condition.finalise();
                self.solution = Some(path.clone());
                return SearchResult::Success(path);
            }

            let neighbors = self.problem.neighbors(path.end());
            if self.verbosity.shows(Verbosity::Debug) {
                trace!(neighbors = ?neighbors, "neighbors");
            }
            // Reverse so that a stack frontier expands the first listed
            // neighbour first.
            for arc in neighbors.into_iter().rev() {
                self.statistics.increment_generated_paths();
                self.add_to_frontier(path.extend(arc));
            }
            self.statistics.register_frontier_size(self.frontier.len());
            if self.verbosity.shows(Verbosity::Debug) {
                trace!(frontier = ?self.frontier, "frontier");
            }
        }

        if self.verbosity.shows(Verbosity::Normal) {
            info!(
                "no (more) solutions, total of {} paths expanded",
                self.num_expanded()
            );
        }
        self.statistics.finalise_search();
        termination_condition.finalise();
        SearchResult::Exhausted
    }
}

impl<'a, P, F, R> SearchEngine<P> for Searcher<'a, P, F, R>
where
    P: SearchProblem,
    F: Frontier<P::Node, P::Action>,
    R: Pruning<P::Node>,
{
    fn search(&mut self, time_limit: Option<Duration>) -> SearchResult<P::Node, P::Action> {
        Searcher::search(self, time_limit)
    }

    fn num_expanded(&self) -> usize {
        Searcher::num_expanded(self)
    }

    fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn solution(&self) -> Option<&Path<P::Node, P::Action>> {
        Searcher::solution(self)
    }
}

impl<'a, P: SearchProblem> DepthFirstSearcher<'a, P> {
    pub fn depth_first(problem: &'a P) -> Self {
        Self::new(problem, LifoFrontier::new(), NoPruning, FrontierValue::Cost)
    }
}

impl<'a, P: SearchProblem> BFSSearcher<'a, P> {
    pub fn breadth_first(problem: &'a P) -> Self {
        Self::new(problem, FifoFrontier::new(), NoPruning, FrontierValue::Cost)
    }
}

impl<'a, P: SearchProblem> BFSMultiPruneSearcher<'a, P> {
    /// Breadth-first search admitting each node to the frontier at most once.
    /// The start node seeds the frontier without being recorded.
    pub fn bfs_multi_prune(problem: &'a P) -> Self {
        Self::new(
            problem,
            FifoFrontier::new(),
            MultiPathPruning::leaving_start_open(),
            FrontierValue::Cost,
        )
    }
}

impl<'a, P: SearchProblem> AStarSearcher<'a, P> {
    pub fn lowest_cost_first(problem: &'a P) -> Self {
        Self::new(problem, FrontierPQ::new(), NoPruning, FrontierValue::Cost)
    }

    pub fn astar(problem: &'a P) -> Self {
        Self::new(
            problem,
            FrontierPQ::new(),
            NoPruning,
            FrontierValue::CostPlusHeuristic,
        )
    }
}

impl<'a, P: SearchProblem> AStarMultiPruneSearcher<'a, P> {
    /// A* admitting each node, the start node included, to the frontier at
    /// most once.
    pub fn astar_multi_prune(problem: &'a P) -> Self {
        Self::new(
            problem,
            FrontierPQ::new(),
            MultiPathPruning::new(),
            FrontierValue::CostPlusHeuristic,
        )
    }
}
