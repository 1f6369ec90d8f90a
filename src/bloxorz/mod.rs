//! Bloxorz: roll a 1x1x2 block across a board of square cells until it
//! stands upright in the goal hole.

mod block;
mod board;
mod heuristic;
mod problem;

pub use block::{parse_moves, BlockState, Direction, MoveParseError, Position};
pub use board::{Board, BoardError, BOARD_EXTENSION};
pub use heuristic::BloxorzHeuristic;
pub use problem::BloxorzProblem;
