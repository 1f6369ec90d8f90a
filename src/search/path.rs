//! Paths through the search graph. A [`Path`] is a cheap handle to an
//! immutable chain of arcs; extending a path shares its prefix with every
//! other path extended from the same predecessor.

use crate::search::{Arc, Cost};
use ordered_float::OrderedFloat;
use std::{
    fmt::{self, Debug, Display},
    rc::Rc,
};

#[derive(Debug)]
struct PathLink<N, A> {
    initial: N,
    arc: Option<Arc<N, A>>,
    cost: Cost,
    num_arcs: usize,
    predecessor: Option<Path<N, A>>,
}

impl<N, A> Drop for PathLink<N, A> {
    // Unlink uniquely owned predecessors one at a time so that dropping a
    // very long path does not recurse once per arc.
    fn drop(&mut self) {
        let mut predecessor = self.predecessor.take();
        while let Some(path) = predecessor {
            match Rc::try_unwrap(path.0) {
                Ok(mut link) => predecessor = link.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}

/// A path from the start node, either a single node or a shorter path
/// extended by one [`Arc`].
pub struct Path<N, A>(Rc<PathLink<N, A>>);

impl<N, A> Clone for Path<N, A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<N: Clone, A> Path<N, A> {
    /// The path consisting of `node` alone.
    pub fn new(node: N) -> Self {
        Self(Rc::new(PathLink {
            initial: node,
            arc: None,
            cost: OrderedFloat(0.),
            num_arcs: 0,
            predecessor: None,
        }))
    }

    /// This path followed by `arc`, which must start at [`Path::end`].
    pub fn extend(&self, arc: Arc<N, A>) -> Self {
        Self(Rc::new(PathLink {
            initial: self.0.initial.clone(),
            cost: self.0.cost + arc.cost(),
            arc: Some(arc),
            num_arcs: self.0.num_arcs + 1,
            predecessor: Some(self.clone()),
        }))
    }
}

impl<N, A> Path<N, A> {
    pub fn initial(&self) -> &N {
        &self.0.initial
    }

    /// The last arc of the path, `None` for a single node path.
    pub fn arc(&self) -> Option<&Arc<N, A>> {
        self.0.arc.as_ref()
    }

    pub fn predecessor(&self) -> Option<&Path<N, A>> {
        self.0.predecessor.as_ref()
    }

    pub fn cost(&self) -> Cost {
        self.0.cost
    }

    pub fn end(&self) -> &N {
        match &self.0.arc {
            Some(arc) => arc.to_node(),
            None => &self.0.initial,
        }
    }

    /// Number of arcs in the path.
    pub fn len(&self) -> usize {
        self.0.num_arcs
    }

    pub fn is_empty(&self) -> bool {
        self.0.num_arcs == 0
    }

    /// The links of the path, from the start node to the end.
    fn links(&self) -> Vec<&PathLink<N, A>> {
        let mut links = Vec::with_capacity(self.len() + 1);
        let mut current = Some(self);
        while let Some(path) = current {
            links.push(path.0.as_ref());
            current = path.0.predecessor.as_ref();
        }
        links.reverse();
        links
    }

    /// The arcs of the path in traversal order.
    pub fn arcs(&self) -> impl Iterator<Item = &Arc<N, A>> + '_ {
        self.links()
            .into_iter()
            .filter_map(|link| link.arc.as_ref())
    }

    /// The nodes of the path in traversal order, start and end included.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        std::iter::once(self.initial()).chain(self.arcs().map(|arc| arc.to_node()))
    }

    pub fn actions(&self) -> impl Iterator<Item = &A> + '_ {
        self.arcs().map(|arc| arc.action())
    }
}

impl<N: PartialEq, A: PartialEq> PartialEq for Path<N, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.initial() == other.initial()
            && self.arcs().eq(other.arcs())
    }
}

impl<N: Debug, A: Debug> Debug for Path<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("nodes", &self.nodes().collect::<Vec<_>>())
            .field("actions", &self.actions().collect::<Vec<_>>())
            .field("cost", &self.cost().into_inner())
            .finish()
    }
}

impl<N: Display, A: Display> Display for Path<N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.initial())?;
        for arc in self.arcs() {
            write!(f, "\n   --{}--> {}", arc.action(), arc.to_node())?;
        }
        Ok(())
    }
}
