//! Formal verification of movement invariants using the Kani model
//! checker.
//!
//! Proof harnesses run under `cargo kani` and verify the properties
//! for all boards within small bounds.

use crate::{Board, Cell, Direction, Rotation};

impl kani::Arbitrary for Direction {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        match index {
            0 => Direction::Up,
            1 => Direction::Left,
            2 => Direction::Right,
            _ => Direction::Down,
        }
    }
}

impl kani::Arbitrary for Rotation {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 4);
        match index {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        // Small bound keeps the state space tractable
        let row_count: usize = kani::any();
        let col_count: usize = kani::any();
        kani::assume(row_count >= 1 && row_count <= 3);
        kani::assume(col_count >= 1 && col_count <= 3);

        let mut rows = Vec::with_capacity(row_count);
        for _ in 0..row_count {
            let mut row = Vec::with_capacity(col_count);
            for _ in 0..col_count {
                row.push(any_cell());
            }
            rows.push(row);
        }
        Board::from_rows_unchecked(rows)
    }
}

fn any_cell() -> Cell {
    if kani::any() {
        let value: u32 = kani::any();
        // Bounded so a merge cannot overflow
        kani::assume(value >= 2 && value <= 1 << 16);
        Some(value)
    } else {
        None
    }
}

mod proofs {
    use super::any_cell;
    use crate::{Board, Direction, Rotation, collapse_left, rotate, shift};

    /// Verify rotating by any quarter-turn and then its inverse
    /// restores the original board.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_rotation_round_trip() {
        let board: Board = kani::any();
        let rotation: Rotation = kani::any();

        let back = rotate(&rotate(&board, rotation), rotation.inverse());

        assert_eq!(back, board, "rotation round-trip changed the board");
    }

    /// Verify collapsing a row conserves the total tile value:
    /// merging relocates mass, never creates or destroys it.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_collapse_conserves_mass() {
        let row = [any_cell(), any_cell(), any_cell()];

        let outcome = collapse_left(&row);

        let before: u64 = row.iter().flatten().map(|v| u64::from(*v)).sum();
        let after: u64 = outcome.cells.iter().flatten().map(|v| u64::from(*v)).sum();
        assert_eq!(before, after, "collapse changed total mass");
    }

    /// Verify collapse output is left-packed: no tile ever sits to
    /// the right of an empty cell.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_collapse_packs_left() {
        let row = [any_cell(), any_cell(), any_cell()];

        let outcome = collapse_left(&row);

        let mut seen_empty = false;
        for cell in &outcome.cells {
            match cell {
                Some(_) => assert!(!seen_empty, "tile found after an empty cell"),
                None => seen_empty = true,
            }
        }
    }

    /// Verify a move never changes the board's dimensions.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_shift_preserves_dimensions() {
        let board: Board = kani::any();
        let direction: Direction = kani::any();

        let outcome = shift(&board, direction).expect("bounded boards are rectangular");

        assert_eq!(outcome.board.row_count(), board.row_count());
        assert_eq!(outcome.board.col_count(), board.col_count());
    }
}
