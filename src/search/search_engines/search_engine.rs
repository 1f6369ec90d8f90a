use crate::search::{
    search_engines::Searcher, Path, SearchProblem, Verbosity,
};
use serde::Deserialize;
use std::{fmt::Debug, time::Duration};

/// Time limit used when the caller has no preference.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(20);

/// Outcome of one call to [`SearchEngine::search`]. Running out of paths and
/// running out of time are ordinary outcomes, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<N, A> {
    /// A path to a goal node was found
    Success(Path<N, A>),
    /// The frontier is empty, there are no (more) solutions
    Exhausted,
    /// The search ran out of time before finding a (further) solution
    TimeLimitExceeded,
}

impl<N, A> SearchResult<N, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn path(&self) -> Option<&Path<N, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            _ => None,
        }
    }
}

/// Object safe view of a searcher, used to drive any strategy by name.
pub trait SearchEngine<P: SearchProblem>: Debug {
    /// Find the next path from the start node to a goal node. Calling this
    /// again after a success resumes the search from the remaining frontier.
    fn search(&mut self, time_limit: Option<Duration>) -> SearchResult<P::Node, P::Action>;

    /// Total number of paths expanded over the lifetime of the engine.
    fn num_expanded(&self) -> usize;

    fn frontier_len(&self) -> usize;

    /// The most recent solution returned by [`SearchEngine::search`].
    fn solution(&self) -> Option<&Path<P::Node, P::Action>>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SearchEngineName {
    #[value(name = "dfs", help = "Depth-first search, no pruning.")]
    #[serde(rename = "dfs")]
    DepthFirst,
    #[value(name = "bfs", help = "Breadth-first search, no pruning.")]
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[value(
        name = "bfs-multi-prune",
        help = "Breadth-first search with multiple path pruning."
    )]
    #[serde(rename = "bfs-multi-prune")]
    BFSMultiPrune,
    #[value(
        name = "lowest-cost-first",
        help = "Lowest-cost-first (uniform cost) search, no pruning."
    )]
    #[serde(rename = "lowest-cost-first")]
    LowestCostFirst,
    #[value(name = "astar", help = "A* search, no pruning.")]
    #[serde(rename = "astar")]
    AStar,
    #[value(
        name = "astar-multi-prune",
        help = "A* search with multiple path pruning."
    )]
    #[serde(rename = "astar-multi-prune")]
    AStarMultiPrune,
}

impl SearchEngineName {
    pub fn create<'a, P>(&self, problem: &'a P, verbosity: Verbosity) -> Box<dyn SearchEngine<P> + 'a>
    where
        P: SearchProblem + 'a,
    {
        match self {
            SearchEngineName::DepthFirst => {
                Box::new(Searcher::depth_first(problem).with_verbosity(verbosity))
            }
            SearchEngineName::BreadthFirst => {
                Box::new(Searcher::breadth_first(problem).with_verbosity(verbosity))
            }
            SearchEngineName::BFSMultiPrune => {
                Box::new(Searcher::bfs_multi_prune(problem).with_verbosity(verbosity))
            }
            SearchEngineName::LowestCostFirst => {
                Box::new(Searcher::lowest_cost_first(problem).with_verbosity(verbosity))
            }
            SearchEngineName::AStar => Box::new(Searcher::astar(problem).with_verbosity(verbosity)),
            SearchEngineName::AStarMultiPrune => {
                Box::new(Searcher::astar_multi_prune(problem).with_verbosity(verbosity))
            }
        }
    }

    /// Human readable name used in reports.
    pub fn description(&self) -> &'static str {
        match self {
            SearchEngineName::DepthFirst => "depth-first search",
            SearchEngineName::BreadthFirst => "BFS",
            SearchEngineName::BFSMultiPrune => "BFS with multi-pruning",
            SearchEngineName::LowestCostFirst => "lowest-cost-first search",
            SearchEngineName::AStar => "A*",
            SearchEngineName::AStarMultiPrune => "A* with multi-pruning",
        }
    }
}
