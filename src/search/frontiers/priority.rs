//! Priority queue frontier for cost ordered searches.

use crate::search::{Frontier, HeuristicValue, Path};
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

/// Entries are identified by their tie break, which is unique per frontier.
struct FrontierEntry<N, A> {
    tie_break: i64,
    path: Path<N, A>,
}

impl<N, A> PartialEq for FrontierEntry<N, A> {
    fn eq(&self, other: &Self) -> bool {
        self.tie_break == other.tie_break
    }
}

impl<N, A> Eq for FrontierEntry<N, A> {}

impl<N, A> Hash for FrontierEntry<N, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tie_break.hash(state);
    }
}

/// `PriorityQueue` pops its greatest priority, so the key is reversed to pop
/// the smallest `(value, tie_break)` first.
type Priority = Reverse<(HeuristicValue, i64)>;

/// A min-priority frontier keyed by `(value, tie_break)`.
///
/// The tie break decreases with every insertion, so among paths with equal
/// value the most recently added one is popped first. Search order, and
/// therefore expansion counts, are fully deterministic.
pub struct FrontierPQ<N, A> {
    queue: PriorityQueue<FrontierEntry<N, A>, Priority>,
    /// Number of paths ever added to the frontier
    frontier_index: i64,
}

impl<N, A> FrontierPQ<N, A> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            frontier_index: 0,
        }
    }

    /// Number of paths in the frontier whose value is exactly `value`.
    pub fn count(&self, value: HeuristicValue) -> usize {
        self.queue
            .iter()
            .filter(|(_, Reverse((entry_value, _)))| *entry_value == value)
            .count()
    }
}

impl<N, A> Default for FrontierPQ<N, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug, A: Debug> Debug for FrontierPQ<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.queue.iter().map(|(entry, Reverse((value, tie_break)))| {
                (value.into_inner(), *tie_break, entry.path.end())
            }))
            .finish()
    }
}

impl<N: Debug, A: Debug> Frontier<N, A> for FrontierPQ<N, A> {
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn add(&mut self, path: Path<N, A>, value: HeuristicValue) {
        self.frontier_index += 1;
        let tie_break = -self.frontier_index;
        self.queue
            .push(FrontierEntry { tie_break, path }, Reverse((value, tie_break)));
    }

    fn pop(&mut self) -> Path<N, A> {
        let (entry, _) = self.queue.pop().expect("pop called on an empty frontier");
        entry.path
    }

    fn paths(&self) -> Box<dyn Iterator<Item = &Path<N, A>> + '_> {
        Box::new(self.queue.iter().map(|(entry, _)| &entry.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_minimum_value_first() {
        let mut frontier = FrontierPQ::<&str, ()>::new();
        frontier.add(Path::new("b"), OrderedFloat(2.));
        frontier.add(Path::new("a"), OrderedFloat(1.));
        frontier.add(Path::new("c"), OrderedFloat(3.5));
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop().end(), &"a");
        assert_eq!(frontier.pop().end(), &"b");
        assert_eq!(frontier.pop().end(), &"c");
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_pop_most_recent_first() {
        let mut frontier = FrontierPQ::<&str, ()>::new();
        frontier.add(Path::new("first"), OrderedFloat(1.));
        frontier.add(Path::new("second"), OrderedFloat(1.));
        frontier.add(Path::new("cheap"), OrderedFloat(0.5));
        frontier.add(Path::new("third"), OrderedFloat(1.));
        assert_eq!(frontier.pop().end(), &"cheap");
        assert_eq!(frontier.pop().end(), &"third");
        assert_eq!(frontier.pop().end(), &"second");
        assert_eq!(frontier.pop().end(), &"first");
    }

    #[test]
    fn count_matches_exact_value() {
        let mut frontier = FrontierPQ::<&str, ()>::new();
        frontier.add(Path::new("a"), OrderedFloat(1.));
        frontier.add(Path::new("b"), OrderedFloat(1.));
        frontier.add(Path::new("c"), OrderedFloat(2.));
        assert_eq!(frontier.count(OrderedFloat(1.)), 2);
        assert_eq!(frontier.count(OrderedFloat(2.)), 1);
        assert_eq!(frontier.count(OrderedFloat(3.)), 0);
        let mut ends: Vec<_> = frontier.paths().map(|path| *path.end()).collect();
        ends.sort();
        assert_eq!(ends, vec!["a", "b", "c"]);
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn pop_on_empty_panics() {
        let mut frontier = FrontierPQ::<&str, ()>::new();
        frontier.pop();
    }
}
