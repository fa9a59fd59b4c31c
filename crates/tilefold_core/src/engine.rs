//! Board-level move application.

use crate::board::{Board, BoardError};
use crate::collapse::collapse_left;
use crate::direction::Direction;
use crate::rotate::rotate;
use tracing::{debug, instrument};

/// Outcome of applying a directional move to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// The board after the move.
    pub board: Board,
    /// True if any tile moved or merged.
    pub moved: bool,
    /// Sum of tile values created by merges.
    pub gained: u32,
}

/// Applies a directional move to the board.
///
/// The grid is rotated so the push becomes leftward, every row is
/// collapsed independently, and the rotation is undone. Per-row
/// signals aggregate into the result: `moved` is the OR across rows,
/// `gained` the sum. The input board is left untouched.
///
/// # Errors
///
/// Returns [`BoardError`] if the board fails validation; no partial
/// result is produced.
#[instrument(skip(board), fields(direction = %direction))]
pub fn shift(board: &Board, direction: Direction) -> Result<MoveResult, BoardError> {
    board.validate()?;

    let rotation = direction.rotation();
    let turned = rotate(board, rotation);

    let mut moved = false;
    let mut gained = 0;
    let mut rows = Vec::with_capacity(turned.row_count());
    for row in turned.rows() {
        let outcome = collapse_left(row);
        moved |= outcome.moved;
        gained += outcome.gained;
        rows.push(outcome.cells);
    }

    let collapsed = Board::from_rows_unchecked(rows);
    let board = rotate(&collapsed, rotation.inverse());

    debug!(moved, gained, "Move applied");
    Ok(MoveResult {
        board,
        moved,
        gained,
    })
}
