//! Generic graph search: paths, frontiers and the searchers that combine
//! them. Nothing in here knows about a particular puzzle; problems plug in
//! through [`SearchProblem`].

mod arc;
mod frontiers;
mod path;
pub mod search_engines;
mod search_problem;
mod validate;
mod verbosity;

pub use arc::Arc;
pub use frontiers::{FifoFrontier, Frontier, FrontierPQ, LifoFrontier};
pub use path::Path;
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult, Searcher};
pub use search_problem::{Cost, HeuristicValue, SearchProblem};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
