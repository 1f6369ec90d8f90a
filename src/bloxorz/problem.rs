use crate::{
    bloxorz::{BlockState, BloxorzHeuristic, Board, Direction},
    search::{Arc, HeuristicValue, SearchProblem},
};
use strum::IntoEnumIterator;

/// A board as a search problem: nodes are block states, arcs are single
/// moves of unit cost. The block starts and must end standing.
#[derive(Debug, Clone)]
pub struct BloxorzProblem {
    board: Board,
    start: BlockState,
    goal: BlockState,
    heuristic: BloxorzHeuristic,
}

impl BloxorzProblem {
    /// A problem without heuristic guidance.
    pub fn new(board: Board) -> Self {
        let start = BlockState::standing(board.start());
        let goal = BlockState::standing(board.goal());
        Self {
            board,
            start,
            goal,
            heuristic: BloxorzHeuristic::Zero,
        }
    }

    pub fn with_heuristic(self, heuristic: BloxorzHeuristic) -> Self {
        Self { heuristic, ..self }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn goal(&self) -> BlockState {
        self.goal
    }
}

impl SearchProblem for BloxorzProblem {
    type Node = BlockState;
    type Action = Direction;

    fn start_node(&self) -> BlockState {
        self.start
    }

    fn is_goal(&self, node: &BlockState) -> bool {
        *node == self.goal
    }

    fn neighbors(&self, node: &BlockState) -> Vec<Arc<BlockState, Direction>> {
        Direction::iter()
            .filter_map(|direction| {
                let next = node.roll(direction);
                self.board
                    .is_legal(&next)
                    .then(|| Arc::new(*node, next, 1., direction))
            })
            .collect()
    }

    fn heuristic(&self, node: &BlockState) -> HeuristicValue {
        self.heuristic.evaluate(node, self.goal.first())
    }
}
