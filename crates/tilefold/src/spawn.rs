//! Random tile placement.

use rand::Rng;
use rand::seq::SliceRandom;
use tilefold_core::Board;
use tracing::{debug, instrument};

/// A tile placed by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value of the new tile.
    pub value: u32,
}

/// Places a new tile on a uniformly chosen empty cell.
///
/// The tile is worth 2 with probability 0.9, otherwise 4. Returns the
/// grown board and the placement, or `None` when the board is full.
#[instrument(skip(board, rng))]
pub fn spawn_random_tile<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(Board, Spawn)> {
    let empties = board.empty_positions();
    let &(row, col) = empties.choose(rng)?;
    let value = if rng.gen_bool(0.9) { 2 } else { 4 };

    debug!(row, col, value, "Spawned tile");
    Some((board.with_tile(row, col, value), Spawn { row, col, value }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_fills_exactly_one_empty_cell() {
        let board = Board::empty(4, 4).expect("Construction failed");
        let mut rng = StdRng::seed_from_u64(7);

        let (grown, spawn) = spawn_random_tile(&board, &mut rng).expect("Spawn failed");

        assert_eq!(grown.empty_positions().len(), 15);
        assert_eq!(grown.get(spawn.row, spawn.col), Some(Some(spawn.value)));
        assert!(spawn.value == 2 || spawn.value == 4);
    }

    #[test]
    fn test_spawn_on_full_board_is_none() {
        let board = Board::from_rows(vec![vec![Some(2), Some(4)], vec![Some(8), Some(16)]])
            .expect("Construction failed");
        let mut rng = StdRng::seed_from_u64(7);

        assert!(spawn_random_tile(&board, &mut rng).is_none());
    }

    #[test]
    fn test_spawn_values_follow_the_weighting() {
        let board = Board::empty(1, 1).expect("Construction failed");
        let mut rng = StdRng::seed_from_u64(42);

        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..1000 {
            let (_, spawn) = spawn_random_tile(&board, &mut rng).expect("Spawn failed");
            match spawn.value {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("Unexpected tile value {}", other),
            }
        }

        // Seeded run; the 9:1 split has plenty of slack here
        assert!(twos > 800, "only {} twos in 1000 spawns", twos);
        assert!(fours > 20, "only {} fours in 1000 spawns", fours);
    }
}
