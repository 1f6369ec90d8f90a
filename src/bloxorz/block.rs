use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// A cell coordinate. `x` is the column and `y` the row, with `y` growing
/// downwards. Coordinates may be negative while a move is being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn shifted(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four ways to tip the block over, in the order moves are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
pub enum Direction {
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
}

/// Where the 1x1x2 block rests: the two cells under it, the one with the
/// smaller coordinate first. A standing block has both halves on the same
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockState(pub Position, pub Position);

impl BlockState {
    pub fn standing(position: Position) -> Self {
        Self(position, position)
    }

    pub fn first(&self) -> Position {
        self.0
    }

    pub fn second(&self) -> Position {
        self.1
    }

    pub fn is_standing(&self) -> bool {
        self.0 == self.1
    }

    fn is_horizontal(&self) -> bool {
        !self.is_standing() && self.0.y == self.1.y
    }

    /// The state after tipping the block in `direction`. The result is not
    /// checked against any board.
    pub fn roll(&self, direction: Direction) -> Self {
        let BlockState(a, b) = *self;
        if self.is_standing() {
            match direction {
                Direction::Up => Self(a.shifted(0, -2), a.shifted(0, -1)),
                Direction::Down => Self(a.shifted(0, 1), a.shifted(0, 2)),
                Direction::Left => Self(a.shifted(-2, 0), a.shifted(-1, 0)),
                Direction::Right => Self(a.shifted(1, 0), a.shifted(2, 0)),
            }
        } else if self.is_horizontal() {
            match direction {
                Direction::Up => Self(a.shifted(0, -1), b.shifted(0, -1)),
                Direction::Down => Self(a.shifted(0, 1), b.shifted(0, 1)),
                Direction::Left => Self::standing(a.shifted(-1, 0)),
                Direction::Right => Self::standing(b.shifted(1, 0)),
            }
        } else {
            match direction {
                Direction::Up => Self::standing(a.shifted(0, -1)),
                Direction::Down => Self::standing(b.shifted(0, 1)),
                Direction::Left => Self(a.shifted(-1, 0), b.shifted(-1, 0)),
                Direction::Right => Self(a.shifted(1, 0), b.shifted(1, 0)),
            }
        }
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown move {found:?} at position {index}, expected one of U, D, L, R")]
pub struct MoveParseError {
    pub index: usize,
    pub found: char,
}

/// Reads a move sequence such as `RULDR`. Whitespace is ignored.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>, MoveParseError> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(index, found)| {
            found
                .to_string()
                .parse::<Direction>()
                .map_err(|_| MoveParseError { index, found })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn state(a: (i32, i32), b: (i32, i32)) -> BlockState {
        BlockState(Position::new(a.0, a.1), Position::new(b.0, b.1))
    }

    #[test]
    fn directions_in_move_order() {
        let names: String = Direction::iter().map(|d| d.to_string()).collect();
        assert_eq!(names, "UDLR");
    }

    #[test]
    fn standing_block_falls_over() {
        let block = state((3, 3), (3, 3));
        assert_eq!(block.roll(Direction::Up), state((3, 1), (3, 2)));
        assert_eq!(block.roll(Direction::Down), state((3, 4), (3, 5)));
        assert_eq!(block.roll(Direction::Left), state((1, 3), (2, 3)));
        assert_eq!(block.roll(Direction::Right), state((4, 3), (5, 3)));
    }

    #[test]
    fn horizontal_block_rolls() {
        let block = state((1, 1), (2, 1));
        assert_eq!(block.roll(Direction::Up), state((1, 0), (2, 0)));
        assert_eq!(block.roll(Direction::Down), state((1, 2), (2, 2)));
        assert_eq!(block.roll(Direction::Left), state((0, 1), (0, 1)));
        assert_eq!(block.roll(Direction::Right), state((3, 1), (3, 1)));
    }

    #[test]
    fn vertical_block_rolls() {
        let block = state((1, 1), (1, 2));
        assert_eq!(block.roll(Direction::Up), state((1, 0), (1, 0)));
        assert_eq!(block.roll(Direction::Down), state((1, 3), (1, 3)));
        assert_eq!(block.roll(Direction::Left), state((0, 1), (0, 2)));
        assert_eq!(block.roll(Direction::Right), state((2, 1), (2, 2)));
    }

    #[test]
    fn rolling_back_restores_state() {
        let opposite = |d: Direction| match d {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };
        for block in [state((2, 2), (2, 2)), state((2, 2), (3, 2)), state((2, 2), (2, 3))] {
            for direction in Direction::iter() {
                assert_eq!(block.roll(direction).roll(opposite(direction)), block);
            }
        }
    }

    #[test]
    fn display_matches_tuple_notation() {
        assert_eq!(state((0, 1), (0, 1)).to_string(), "((0, 1), (0, 1))");
        assert_eq!(Direction::Right.to_string(), "R");
    }

    #[test]
    fn parses_move_strings() {
        assert_eq!(
            parse_moves("RU LD\n").unwrap(),
            vec![Direction::Right, Direction::Up, Direction::Left, Direction::Down]
        );
        assert_eq!(parse_moves("").unwrap(), vec![]);
        assert_eq!(
            parse_moves("RUx").unwrap_err(),
            MoveParseError {
                index: 2,
                found: 'x'
            }
        );
    }
}
