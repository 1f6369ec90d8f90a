use crate::search::Arc;
use ordered_float::OrderedFloat;
use std::{fmt::Debug, hash::Hash};

/// Cost of an arc or of a whole path.
pub type Cost = OrderedFloat<f64>;

/// The value a frontier minimises, e.g. path cost plus heuristic estimate.
pub type HeuristicValue = OrderedFloat<f64>;

/// A [`SearchProblem`] is the contract between a search engine and the graph
/// it explores. Nodes are opaque to the search: they only need to be
/// comparable and hashable so that pruning searchers can remember them.
///
/// Implementations are expected to uphold the following, none of which are
/// checked by the search engines:
/// - every arc returned by [`SearchProblem::neighbors`] starts at the given
///   node and has a non-negative cost;
/// - [`SearchProblem::heuristic`] is non-negative, and never overestimates
///   the remaining cost if optimal A* results are wanted.
pub trait SearchProblem: Debug {
    type Node: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn start_node(&self) -> Self::Node;

    fn is_goal(&self, node: &Self::Node) -> bool;

    /// The arcs leaving `node`, in a fixed order.
    fn neighbors(&self, node: &Self::Node) -> Vec<Arc<Self::Node, Self::Action>>;

    /// Estimate of the cost from `node` to the closest goal. Zero unless
    /// overridden.
    fn heuristic(&self, _node: &Self::Node) -> HeuristicValue {
        OrderedFloat(0.)
    }
}
