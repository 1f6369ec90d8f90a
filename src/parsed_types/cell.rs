use std::fmt::{self, Display};

/// A single square of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `X`, solid floor
    Floor,
    /// `O`, no floor at all
    Void,
    /// `S`, floor where the block starts standing
    Start,
    /// `G`, floor with the goal hole
    Goal,
    /// `W`, weak floor that holds a lying block but not a standing one
    Fragile,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Cell::Floor),
            'O' => Some(Cell::Void),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            'W' => Some(Cell::Fragile),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Floor => 'X',
            Cell::Void => 'O',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Fragile => 'W',
        }
    }

    /// Whether any part of the block may rest on this cell.
    pub fn is_solid(self) -> bool {
        self != Cell::Void
    }

    /// Whether the block may stand upright on this cell.
    pub fn supports_standing(self) -> bool {
        self.is_solid() && self != Cell::Fragile
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
