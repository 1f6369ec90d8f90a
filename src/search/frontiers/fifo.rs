use crate::search::{Frontier, HeuristicValue, Path};
use std::{collections::VecDeque, fmt::Debug};

/// Queue frontier: paths are expanded in the order they were added, giving a
/// breadth-first search.
#[derive(Debug)]
pub struct FifoFrontier<N, A> {
    paths: VecDeque<Path<N, A>>,
}

impl<N, A> FifoFrontier<N, A> {
    pub fn new() -> Self {
        Self {
            paths: VecDeque::new(),
        }
    }
}

impl<N, A> Default for FifoFrontier<N, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug, A: Debug> Frontier<N, A> for FifoFrontier<N, A> {
    fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn len(&self) -> usize {
        self.paths.len()
    }

    fn add(&mut self, path: Path<N, A>, _value: HeuristicValue) {
        self.paths.push_back(path);
    }

    fn pop(&mut self) -> Path<N, A> {
        self.paths
            .pop_front()
            .expect("pop called on an empty frontier")
    }

    fn paths(&self) -> Box<dyn Iterator<Item = &Path<N, A>> + '_> {
        Box::new(self.paths.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_in_insertion_order() {
        let mut frontier = FifoFrontier::<&str, ()>::new();
        frontier.add(Path::new("a"), OrderedFloat(5.));
        frontier.add(Path::new("b"), OrderedFloat(0.));
        frontier.add(Path::new("c"), OrderedFloat(2.));
        assert_eq!(frontier.paths().count(), 3);
        assert_eq!(frontier.pop().end(), &"a");
        assert_eq!(frontier.pop().end(), &"b");
        assert_eq!(frontier.pop().end(), &"c");
        assert!(frontier.is_empty());
    }
}
