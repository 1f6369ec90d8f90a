use crate::parsed_types::Cell;

/// A board file as written: header, declared size and rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDescription {
    header: String,
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl BoardDescription {
    pub fn new(header: String, width: usize, height: usize, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            header,
            width,
            height,
            rows,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Declared number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Declared number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
