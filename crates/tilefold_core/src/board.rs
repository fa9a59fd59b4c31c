//! Core domain types for the puzzle grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single grid cell: empty, or holding a tile value.
pub type Cell = Option<u32>;

/// Rectangular grid of tiles, stored row-major.
///
/// Boards are immutable values: every transformation produces a new
/// board, which keeps equality-based move detection trivial.
///
/// Serializes as a plain 2D array so saved games stay human-readable.
/// Deserialization does not check shape; callers re-validate with
/// [`Board::validate`] before trusting external data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Empty`] if either dimension is zero.
    #[instrument]
    pub fn empty(row_count: usize, col_count: usize) -> Result<Self, BoardError> {
        if row_count == 0 || col_count == 0 {
            return Err(BoardError::Empty);
        }
        Ok(Self {
            rows: vec![vec![None; col_count]; row_count],
        })
    }

    /// Creates a board from existing rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the rows are empty or ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, BoardError> {
        let board = Self { rows };
        board.validate()?;
        Ok(board)
    }

    /// Wraps rows without shape checks.
    ///
    /// Callers must guarantee rectangularity; rotation and collapse
    /// output is rectangular by construction.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Checks that the grid is non-empty and rectangular.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Empty`] for a grid with no rows or no
    /// columns, or [`BoardError::Ragged`] when row lengths differ.
    pub fn validate(&self) -> Result<(), BoardError> {
        let expected = match self.rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(BoardError::Empty),
        };
        for (index, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(BoardError::Ragged {
                    row: index,
                    len: row.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the rows as a slice.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Gets the cell at the given coordinates, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns a copy of this board with one tile placed.
    ///
    /// Coordinates must be in bounds; the spawn path only passes
    /// positions taken from [`Board::empty_positions`].
    pub fn with_tile(&self, row: usize, col: usize, value: u32) -> Self {
        let mut rows = self.rows.clone();
        rows[row][col] = Some(value);
        Self { rows }
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                if cell.is_none() {
                    positions.push((row_index, col_index));
                }
            }
        }
        positions
    }

    /// Highest tile value on the board, or `None` if every cell is empty.
    pub fn max_tile(&self) -> Option<u32> {
        self.rows.iter().flatten().filter_map(|cell| *cell).max()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(Option::is_some)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(value) => write!(f, "{:>6}", value)?,
                    None => write!(f, "{:>6}", ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Error describing an invalid grid shape.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The grid has no rows or no columns.
    #[display("Board has no cells")]
    Empty,

    /// A row's length differs from the first row's.
    #[display("Row {} has {} cells, expected {}", row, len, expected)]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },
}

impl std::error::Error for BoardError {}
