//! Leftward row collapse: compaction and pairwise merging.

use crate::board::Cell;
use tracing::instrument;

/// Outcome of collapsing one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCollapse {
    /// The collapsed row: tiles packed left, right-padded with empties.
    pub cells: Vec<Cell>,
    /// True if the row changed at any position.
    pub moved: bool,
    /// Sum of tile values created by merges in this row.
    pub gained: u32,
}

/// Collapses a row leftward, merging equal values pairwise.
///
/// Single pass with a pending slot: empties are skipped; a tile equal
/// to the pending value merges into a doubled tile and scores it; a
/// different tile locks the pending value in place. Merges never
/// cascade within one call, so `[2, 2, 4]` yields `[4, 4]` rather
/// than `[8]`, and each tile takes part in at most one merge.
#[instrument(skip(row))]
pub fn collapse_left(row: &[Cell]) -> RowCollapse {
    let mut cells: Vec<Cell> = Vec::with_capacity(row.len());
    let mut pending: Option<u32> = None;
    let mut gained = 0;

    for &cell in row {
        let value = match cell {
            Some(value) => value,
            None => continue,
        };
        match pending.take() {
            Some(held) if held == value => {
                cells.push(Some(held * 2));
                gained += held * 2;
            }
            Some(held) => {
                cells.push(Some(held));
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(held) = pending {
        cells.push(Some(held));
    }
    cells.resize(row.len(), None);

    let moved = cells.as_slice() != row;
    RowCollapse {
        cells,
        moved,
        gained,
    }
}
