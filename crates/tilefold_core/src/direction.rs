//! Move directions and their mapping onto grid rotations.

use crate::rotate::Rotation;
use serde::{Deserialize, Serialize};

/// A direction the player can push the tiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Push tiles toward the top edge.
    Up,
    /// Push tiles toward the left edge.
    Left,
    /// Push tiles toward the right edge.
    Right,
    /// Push tiles toward the bottom edge.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// The rotation that turns a push in this direction into a
    /// leftward push.
    ///
    /// The move engine rotates by this amount, collapses rows leftward,
    /// then rotates back by [`Rotation::inverse`]. The table is fixed:
    /// every direction reduces to the same row primitive.
    pub fn rotation(self) -> Rotation {
        match self {
            Direction::Left => Rotation::R0,
            Direction::Up => Rotation::R90,
            Direction::Right => Rotation::R180,
            Direction::Down => Rotation::R270,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
