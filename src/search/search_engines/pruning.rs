use std::{collections::HashSet, fmt::Debug, hash::Hash};

/// Decides which paths may enter the frontier, based on the node they end
/// at.
pub trait Pruning<N>: Debug {
    /// Whether a path ending at `node` may be added to the frontier. Admitting
    /// a node may change the answer for later calls.
    fn admit(&mut self, node: &N) -> bool;

    /// Same as [`Pruning::admit`], for the single node path that seeds the
    /// frontier.
    fn admit_start(&mut self, node: &N) -> bool {
        self.admit(node)
    }

    /// Number of nodes that are barred from entering the frontier again.
    fn num_closed(&self) -> usize {
        0
    }
}

/// Admits every path; the same node may be expanded many times.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPruning;

impl<N> Pruning<N> for NoPruning {
    fn admit(&mut self, _node: &N) -> bool {
        true
    }
}

/// Multiple path pruning: a node enters the frontier at most once. Any later
/// path to an already admitted node is discarded, even a cheaper one.
#[derive(Debug, Clone)]
pub struct MultiPathPruning<N> {
    closed: HashSet<N>,
    close_start: bool,
}

impl<N> MultiPathPruning<N> {
    /// Pruning that also records the start node when it seeds the frontier.
    pub fn new() -> Self {
        Self {
            closed: HashSet::new(),
            close_start: true,
        }
    }

    /// Pruning that lets the start node seed the frontier without recording
    /// it, so the first path that returns to the start is admitted once more.
    pub fn leaving_start_open() -> Self {
        Self {
            closed: HashSet::new(),
            close_start: false,
        }
    }
}

impl<N> Default for MultiPathPruning<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash> MultiPathPruning<N> {
    pub fn is_closed(&self, node: &N) -> bool {
        self.closed.contains(node)
    }
}

impl<N: Clone + Eq + Hash + Debug> Pruning<N> for MultiPathPruning<N> {
    fn admit(&mut self, node: &N) -> bool {
        if self.closed.contains(node) {
            return false;
        }
        self.closed.insert(node.clone());
        true
    }

    fn admit_start(&mut self, node: &N) -> bool {
        if self.close_start {
            self.admit(node)
        } else {
            true
        }
    }

    fn num_closed(&self) -> usize {
        self.closed.len()
    }
}
