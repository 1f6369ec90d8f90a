use crate::{
    bloxorz::{BlockState, Position},
    search::HeuristicValue,
};
use ordered_float::OrderedFloat;
use serde::Deserialize;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BloxorzHeuristic {
    #[value(help = "Always zero, turns A* into lowest-cost-first search.")]
    Zero,
    #[default]
    #[value(help = "Product of the distances of the two block halves to the goal, scaled by 2/3.")]
    SplitDistance,
}

impl BloxorzHeuristic {
    pub fn evaluate(&self, state: &BlockState, goal: Position) -> HeuristicValue {
        match self {
            BloxorzHeuristic::Zero => OrderedFloat(0.),
            BloxorzHeuristic::SplitDistance => split_distance(state, goal),
        }
    }
}

/// Takes the Manhattan distance of each half of the block to the goal and
/// returns `shorter / 1.5 * longer`. The x distance of the second half is
/// measured against the goal's y coordinate, which makes the estimate
/// inadmissible on some boards.
fn split_distance(state: &BlockState, goal: Position) -> HeuristicValue {
    let (a, b) = (state.first(), state.second());
    let first = (a.x - goal.x).abs() + (a.y - goal.y).abs();
    let second = (b.x - goal.y).abs() + (b.y - goal.y).abs();
    let (longer, shorter) = if first > second {
        (first, second)
    } else {
        (second, first)
    };
    OrderedFloat(f64::from(shorter) / 1.5 * f64::from(longer))
}
