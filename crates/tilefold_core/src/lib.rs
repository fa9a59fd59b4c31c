//! Pure movement logic for a sliding-tile merge puzzle.
//!
//! Every move reduces to the same row-level primitive: the grid is
//! rotated so the push becomes leftward, each row is collapsed, and
//! the rotation is undone. All operations are value-to-value; boards
//! are never mutated in place.
//!
//! # Architecture
//!
//! - **Board**: rectangular grid of optional tile values
//! - **Rotation**: counter-clockwise quarter-turn geometry
//! - **Collapse**: leftward compaction and pairwise merging of one row
//! - **Engine**: composes rotation and collapse into directional moves
//!
//! # Example
//!
//! ```
//! use tilefold_core::{Board, Direction, shift};
//!
//! let board = Board::from_rows(vec![
//!     vec![Some(2), None, Some(2), None],
//!     vec![None; 4],
//!     vec![None; 4],
//!     vec![None; 4],
//! ])?;
//!
//! let outcome = shift(&board, Direction::Left)?;
//! assert!(outcome.moved);
//! assert_eq!(outcome.gained, 4);
//! assert_eq!(outcome.board.get(0, 0), Some(Some(4)));
//! # Ok::<(), tilefold_core::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod collapse;
mod direction;
mod engine;
mod rotate;

#[cfg(kani)]
mod verification;

// Crate-level exports - Board types
pub use board::{Board, BoardError, Cell};

// Crate-level exports - Row collapse
pub use collapse::{RowCollapse, collapse_left};

// Crate-level exports - Directions and rotation geometry
pub use direction::Direction;
pub use rotate::{Rotation, rotate};

// Crate-level exports - Move engine
pub use engine::{MoveResult, shift};
