use crate::search::Cost;
use ordered_float::OrderedFloat;
use std::fmt::{self, Display};

/// A directed, labelled edge of the search graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc<N, A> {
    from: N,
    to: N,
    cost: Cost,
    action: A,
}

impl<N, A> Arc<N, A> {
    pub fn new(from: N, to: N, cost: f64, action: A) -> Self {
        debug_assert!(cost >= 0., "arc costs must be non-negative");
        Self {
            from,
            to,
            cost: OrderedFloat(cost),
            action,
        }
    }

    pub fn from_node(&self) -> &N {
        &self.from
    }

    pub fn to_node(&self) -> &N {
        &self.to
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn action(&self) -> &A {
        &self.action
    }
}

impl<N: Display, A: Display> Display for Arc<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --{}--> {}", self.from, self.action, self.to)
    }
}
