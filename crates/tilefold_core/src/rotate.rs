//! Counter-clockwise grid rotation.

use crate::board::{Board, Cell};
use tracing::instrument;

/// A counter-clockwise quarter-turn rotation.
///
/// Rotations form a closed set; there is no way to request an
/// unsupported angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// No rotation.
    R0,
    /// Quarter turn counter-clockwise.
    R90,
    /// Half turn.
    R180,
    /// Three-quarter turn counter-clockwise.
    R270,
}

impl Rotation {
    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R0,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R180,
            Rotation::R270 => Rotation::R90,
        }
    }

    /// Degree value, for display and logging.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

/// Rotates the grid counter-clockwise by the given quarter-turn.
///
/// For an N x M input, a quarter or three-quarter turn yields an
/// M x N output; the quarter turn moves the rightmost column of the
/// input to the top row of the output. Pure value-to-value mapping:
/// the input board is untouched.
#[instrument(skip(board), fields(degrees = rotation.degrees()))]
pub fn rotate(board: &Board, rotation: Rotation) -> Board {
    let row_count = board.row_count();
    let col_count = board.col_count();
    let rows = board.rows();

    let rotated: Vec<Vec<Cell>> = match rotation {
        Rotation::R0 => rows.to_vec(),
        Rotation::R90 => (0..col_count)
            .map(|i| {
                (0..row_count)
                    .map(|j| rows[j][col_count - 1 - i])
                    .collect()
            })
            .collect(),
        Rotation::R180 => (0..row_count)
            .map(|i| {
                (0..col_count)
                    .map(|j| rows[row_count - 1 - i][col_count - 1 - j])
                    .collect()
            })
            .collect(),
        Rotation::R270 => (0..col_count)
            .map(|i| {
                (0..row_count)
                    .map(|j| rows[row_count - 1 - j][i])
                    .collect()
            })
            .collect(),
    };

    Board::from_rows_unchecked(rotated)
}
