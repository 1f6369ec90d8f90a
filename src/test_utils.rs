use crate::search::{Arc, HeuristicValue, SearchProblem};
use ordered_float::OrderedFloat;
use std::{
    cell::RefCell,
    collections::HashMap,
    sync::{self, Mutex},
};
use tracing::{subscriber, Event, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

pub const BOARD0_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/bloxorz/board0.blx"
));

pub const BOARD1_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/bloxorz/board1.blx"
));

pub const BOARD2_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/bloxorz/board2.blx"
));

/// A small explicit graph. The action of every arc is the name of the node
/// it leads to.
#[derive(Debug)]
pub struct GraphProblem {
    start: &'static str,
    goals: Vec<&'static str>,
    arcs: Vec<(&'static str, &'static str, f64)>,
    heuristics: HashMap<&'static str, f64>,
}

impl GraphProblem {
    pub fn new(
        start: &'static str,
        goals: &[&'static str],
        arcs: &[(&'static str, &'static str, f64)],
        heuristics: &[(&'static str, f64)],
    ) -> Self {
        Self {
            start,
            goals: goals.to_vec(),
            arcs: arcs.to_vec(),
            heuristics: heuristics.iter().copied().collect(),
        }
    }
}

impl SearchProblem for GraphProblem {
    type Node = &'static str;
    type Action = &'static str;

    fn start_node(&self) -> Self::Node {
        self.start
    }

    fn is_goal(&self, node: &Self::Node) -> bool {
        self.goals.contains(node)
    }

    fn neighbors(&self, node: &Self::Node) -> Vec<Arc<Self::Node, Self::Action>> {
        self.arcs
            .iter()
            .filter(|(from, _, _)| from == node)
            .map(|&(from, to, cost)| Arc::new(from, to, cost, to))
            .collect()
    }

    fn heuristic(&self, node: &Self::Node) -> HeuristicValue {
        OrderedFloat(self.heuristics.get(node).copied().unwrap_or(0.))
    }
}

/// Two routes to `d` and two to `g`; the heuristic is admissible.
pub fn diamond_graph() -> GraphProblem {
    GraphProblem::new(
        "a",
        &["g"],
        &[
            ("a", "b", 1.),
            ("a", "c", 3.),
            ("b", "d", 3.),
            ("b", "c", 1.),
            ("c", "d", 1.),
            ("d", "g", 2.),
            ("c", "g", 5.),
        ],
        &[("a", 3.), ("b", 3.), ("c", 2.), ("d", 2.), ("g", 0.)],
    )
}

/// The direct arc to `b` is expensive, the detour through `c` is cheap but
/// reaches `b` later.
pub fn detour_graph() -> GraphProblem {
    GraphProblem::new(
        "a",
        &["g"],
        &[("a", "b", 5.), ("a", "c", 1.), ("c", "b", 1.), ("b", "g", 1.)],
        &[],
    )
}

/// Every node is reachable along exactly one route.
pub fn tree_graph() -> GraphProblem {
    GraphProblem::new(
        "a",
        &["g"],
        &[
            ("a", "b", 1.),
            ("a", "c", 2.),
            ("b", "d", 1.),
            ("b", "e", 4.),
            ("c", "g", 2.),
            ("d", "f", 3.),
        ],
        &[],
    )
}

pub fn single_node_graph() -> GraphProblem {
    GraphProblem::new("a", &["a"], &[], &[])
}

pub fn unreachable_goal_graph() -> GraphProblem {
    GraphProblem::new("a", &["g"], &[("a", "b", 1.), ("b", "c", 1.)], &[])
}

/// A `size` by `size` grid with unit moves from the top left to the bottom
/// right corner and a Manhattan distance heuristic. Many routes lead to each
/// cell.
#[derive(Debug)]
pub struct GridProblem {
    size: i32,
}

impl GridProblem {
    pub fn new(size: i32) -> Self {
        Self { size }
    }
}

impl SearchProblem for GridProblem {
    type Node = (i32, i32);
    type Action = &'static str;

    fn start_node(&self) -> Self::Node {
        (0, 0)
    }

    fn is_goal(&self, node: &Self::Node) -> bool {
        *node == (self.size - 1, self.size - 1)
    }

    fn neighbors(&self, &(x, y): &Self::Node) -> Vec<Arc<Self::Node, Self::Action>> {
        [("up", 0, -1), ("down", 0, 1), ("left", -1, 0), ("right", 1, 0)]
            .into_iter()
            .map(|(action, dx, dy)| (action, (x + dx, y + dy)))
            .filter(|&(_, (nx, ny))| (0..self.size).contains(&nx) && (0..self.size).contains(&ny))
            .map(|(action, next)| Arc::new((x, y), next, 1., action))
            .collect()
    }

    fn heuristic(&self, &(x, y): &Self::Node) -> HeuristicValue {
        OrderedFloat(((self.size - 1 - x) + (self.size - 1 - y)) as f64)
    }
}

/// Wraps a problem and records every node whose neighbours were requested,
/// i.e. every expanded non-goal node.
#[derive(Debug)]
pub struct RecordingProblem<P: SearchProblem> {
    inner: P,
    pub expanded: RefCell<Vec<P::Node>>,
}

impl<P: SearchProblem> RecordingProblem<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            expanded: RefCell::new(Vec::new()),
        }
    }
}

impl<P: SearchProblem> SearchProblem for RecordingProblem<P> {
    type Node = P::Node;
    type Action = P::Action;

    fn start_node(&self) -> Self::Node {
        self.inner.start_node()
    }

    fn is_goal(&self, node: &Self::Node) -> bool {
        self.inner.is_goal(node)
    }

    fn neighbors(&self, node: &Self::Node) -> Vec<Arc<Self::Node, Self::Action>> {
        self.expanded.borrow_mut().push(node.clone());
        self.inner.neighbors(node)
    }

    fn heuristic(&self, node: &Self::Node) -> HeuristicValue {
        self.inner.heuristic(node)
    }
}

/// The natural numbers, each leading to its successor. There is no goal.
#[derive(Debug)]
pub struct EndlessLine;

impl SearchProblem for EndlessLine {
    type Node = usize;
    type Action = ();

    fn start_node(&self) -> Self::Node {
        0
    }

    fn is_goal(&self, _node: &Self::Node) -> bool {
        false
    }

    fn neighbors(&self, node: &Self::Node) -> Vec<Arc<Self::Node, Self::Action>> {
        vec![Arc::new(*node, node + 1, 1., ())]
    }
}

/// Collects the module path of every event it sees.
#[derive(Debug, Clone, Default)]
struct EventRecorder(sync::Arc<Mutex<Vec<String>>>);

impl<S: Subscriber> Layer<S> for EventRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let module = event.metadata().module_path().unwrap_or_default();
        self.0.lock().unwrap().push(module.to_string());
    }
}

/// Runs `f` with a subscriber that records events on this thread, and
/// returns the module path of each event emitted.
pub fn record_events(f: impl FnOnce()) -> Vec<String> {
    let recorder = EventRecorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    subscriber::with_default(subscriber, f);
    let events = recorder.0.lock().unwrap().clone();
    events
}
