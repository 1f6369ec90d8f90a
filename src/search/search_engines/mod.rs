mod pruning;
mod search_engine;
mod search_statistics;
mod searcher;
mod termination_condition;

pub use pruning::{MultiPathPruning, NoPruning, Pruning};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult, DEFAULT_TIME_LIMIT};
pub use search_statistics::SearchStatistics;
pub use searcher::{
    AStarMultiPruneSearcher, AStarSearcher, BFSMultiPruneSearcher, BFSSearcher,
    DepthFirstSearcher, FrontierValue, LowestCostFirstSearcher, Searcher,
};
pub use termination_condition::{TerminationCondition, TIME_CHECK_INTERVAL};
