use crate::{
    bloxorz::{BlockState, Position},
    parsed_types::{BoardDescription, Cell},
    parsers::{error_location, parse_board_complete},
};
use itertools::Itertools;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

/// File extension of board files.
pub const BOARD_EXTENSION: &str = "blx";

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed board file near line {line}, column {column}")]
    Parse { line: u32, column: usize },
    #[error("board declares {declared} rows but has {found}")]
    HeightMismatch { declared: usize, found: usize },
    #[error("row {row} has {found} cells, the board declares {declared} columns")]
    RowWidth {
        row: usize,
        declared: usize,
        found: usize,
    },
    #[error("board has no {0} cell")]
    MissingCell(Cell),
    #[error("board has more than one {0} cell")]
    DuplicateCell(Cell),
}

/// A validated board: a rectangular grid with exactly one start and one goal
/// cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Board {
    /// Parses and validates the contents of a board file. The board takes
    /// its name from the header line.
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        let (_, description) = parse_board_complete(text).map_err(|e| {
            let (line, column) = error_location(&e).unwrap_or((1, 1));
            BoardError::Parse { line, column }
        })?;
        Self::from_description(&description)
    }

    pub fn from_description(description: &BoardDescription) -> Result<Self, BoardError> {
        let (width, height) = (description.width(), description.height());
        let rows = description.rows();
        if rows.len() != height {
            return Err(BoardError::HeightMismatch {
                declared: height,
                found: rows.len(),
            });
        }
        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != width) {
            return Err(BoardError::RowWidth {
                row,
                declared: width,
                found: cells.len(),
            });
        }

        let cells = rows.concat();
        let find_unique = |wanted: Cell| -> Result<Position, BoardError> {
            let mut found = cells.iter().positions(|&cell| cell == wanted);
            let index = found.next().ok_or(BoardError::MissingCell(wanted))?;
            if found.next().is_some() {
                return Err(BoardError::DuplicateCell(wanted));
            }
            Ok(Position::new((index % width) as i32, (index / width) as i32))
        };
        let start = find_unique(Cell::Start)?;
        let goal = find_unique(Cell::Goal)?;

        Ok(Self {
            name: description.header().to_string(),
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    /// Reads a board file. The board is named after the file.
    pub fn from_path(path: &Path) -> Result<Self, BoardError> {
        let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut board = Self::from_text(&text)?;
        board.name = path.display().to_string();
        Ok(board)
    }

    /// Loads every board file in `dir`, sorted by path.
    pub fn load_dir(dir: &Path) -> Result<Vec<Self>, BoardError> {
        let io_error = |source| BoardError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let paths: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(io_error)?
            .map_ok(|entry| entry.path())
            .filter_ok(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == BOARD_EXTENSION)
            })
            .collect::<Result<_, _>>()
            .map_err(io_error)?;
        debug!("found {} board files in {}", paths.len(), dir.display());

        paths.iter().sorted().map(|path| Self::from_path(path)).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The cell at `position`, or `None` off the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        let x = usize::try_from(position.x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(position.y).ok().filter(|&y| y < self.height)?;
        Some(self.cells[y * self.width + x])
    }

    /// Whether the block may rest in `state`: both halves on solid cells,
    /// and not standing on a fragile one.
    pub fn is_legal(&self, state: &BlockState) -> bool {
        let solid = |position| self.cell(position).is_some_and(Cell::is_solid);
        if state.is_standing() {
            self.cell(state.first())
                .is_some_and(Cell::supports_standing)
        } else {
            solid(state.first()) && solid(state.second())
        }
    }
}
