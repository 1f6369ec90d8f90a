use crate::search::{Frontier, HeuristicValue, Path};
use std::fmt::Debug;

/// Stack frontier: the most recently added path is expanded first, giving a
/// depth-first search.
#[derive(Debug)]
pub struct LifoFrontier<N, A> {
    paths: Vec<Path<N, A>>,
}

impl<N, A> LifoFrontier<N, A> {
    pub fn new() -> Self {
        Self { paths: Vec::new() }
    }
}

impl<N, A> Default for LifoFrontier<N, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug, A: Debug> Frontier<N, A> for LifoFrontier<N, A> {
    fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn len(&self) -> usize {
        self.paths.len()
    }

    fn add(&mut self, path: Path<N, A>, _value: HeuristicValue) {
        self.paths.push(path);
    }

    fn pop(&mut self) -> Path<N, A> {
        self.paths.pop().expect("pop called on an empty frontier")
    }

    fn paths(&self) -> Box<dyn Iterator<Item = &Path<N, A>> + '_> {
        Box::new(self.paths.iter())
    }
}
