use crate::search::{HeuristicValue, Path};
use std::fmt::Debug;

/// A [`Frontier`] holds the paths that are waiting to be expanded. The order
/// in which they come out is what distinguishes one search strategy from
/// another.
pub trait Frontier<N, A>: Debug {
    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Add a path. `value` is the quantity to minimise; frontiers that do not
    /// order by value ignore it.
    fn add(&mut self, path: Path<N, A>, value: HeuristicValue);

    /// Remove and return the next path.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty. Callers must check
    /// [`Frontier::is_empty`] first.
    fn pop(&mut self) -> Path<N, A>;

    /// The paths currently in the frontier, in no particular order.
    fn paths(&self) -> Box<dyn Iterator<Item = &Path<N, A>> + '_>;
}
