//! Tests for directional moves at the board level.

use tilefold_core::{Board, BoardError, Direction, shift};

fn board(rows: Vec<Vec<Option<u32>>>) -> Board {
    Board::from_rows(rows).expect("Construction failed")
}

/// Reverses every row, mirroring the board left-right.
fn mirror_columns(input: &Board) -> Board {
    let rows = input
        .rows()
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Board::from_rows(rows).expect("Construction failed")
}

/// Reverses the row order, mirroring the board top-bottom.
fn mirror_rows(input: &Board) -> Board {
    let rows = input.rows().iter().rev().cloned().collect();
    Board::from_rows(rows).expect("Construction failed")
}

#[test]
fn test_up_relocates_lone_tile_to_top() {
    let input = board(vec![
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![Some(2), None, None, None],
    ]);

    let outcome = shift(&input, Direction::Up).expect("Move failed");

    let expected = board(vec![
        vec![Some(2), None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
    ]);
    assert_eq!(outcome.board, expected);
    assert!(outcome.moved);
    assert_eq!(outcome.gained, 0);
}

#[test]
fn test_down_relocates_lone_tile_to_bottom() {
    let input = board(vec![
        vec![Some(2), None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
    ]);

    let outcome = shift(&input, Direction::Down).expect("Move failed");

    let expected = board(vec![
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![None, None, None, None],
        vec![Some(2), None, None, None],
    ]);
    assert_eq!(outcome.board, expected);
    assert!(outcome.moved);
    assert_eq!(outcome.gained, 0);
}

#[test]
fn test_right_packs_and_merges_toward_right_edge() {
    let input = board(vec![vec![Some(2), Some(2), Some(4)]]);

    let outcome = shift(&input, Direction::Right).expect("Move failed");

    let expected = board(vec![vec![None, Some(4), Some(4)]]);
    assert_eq!(outcome.board, expected);
    assert!(outcome.moved);
    assert_eq!(outcome.gained, 4);
}

#[test]
fn test_column_merge_scores_like_row_merge() {
    let input = board(vec![
        vec![Some(2), None],
        vec![None, None],
        vec![Some(2), None],
        vec![None, None],
    ]);

    let outcome = shift(&input, Direction::Up).expect("Move failed");

    let expected = board(vec![
        vec![Some(4), None],
        vec![None, None],
        vec![None, None],
        vec![None, None],
    ]);
    assert_eq!(outcome.board, expected);
    assert_eq!(outcome.gained, 4);
}

#[test]
fn test_no_op_move_returns_equal_board() {
    // Full board with no equal neighbors in any direction
    let input = board(vec![
        vec![Some(2), Some(4), Some(2), Some(4)],
        vec![Some(4), Some(2), Some(4), Some(2)],
        vec![Some(2), Some(4), Some(2), Some(4)],
        vec![Some(4), Some(2), Some(4), Some(2)],
    ]);

    for direction in Direction::ALL {
        let outcome = shift(&input, direction).expect("Move failed");
        assert_eq!(outcome.board, input, "{} altered the board", direction);
        assert!(!outcome.moved, "{} reported movement", direction);
        assert_eq!(outcome.gained, 0, "{} reported gain", direction);
    }
}

#[test]
fn test_gained_sums_across_rows() {
    let input = board(vec![
        vec![Some(2), Some(2), None, None],
        vec![Some(4), None, Some(4), None],
        vec![None, None, None, None],
        vec![Some(8), Some(4), None, None],
    ]);

    let outcome = shift(&input, Direction::Left).expect("Move failed");

    let expected = board(vec![
        vec![Some(4), None, None, None],
        vec![Some(8), None, None, None],
        vec![None, None, None, None],
        vec![Some(8), Some(4), None, None],
    ]);
    assert_eq!(outcome.board, expected);
    assert!(outcome.moved);
    assert_eq!(outcome.gained, 12);
}

#[test]
fn test_moved_flag_matches_board_inequality() {
    let samples = [
        board(vec![vec![None, None], vec![None, None]]),
        board(vec![vec![Some(2), None], vec![None, None]]),
        board(vec![vec![Some(2), Some(2)], vec![Some(4), Some(8)]]),
        board(vec![
            vec![Some(2), Some(4), Some(2)],
            vec![Some(4), Some(2), Some(4)],
        ]),
    ];

    for input in &samples {
        for direction in Direction::ALL {
            let outcome = shift(input, direction).expect("Move failed");
            assert_eq!(
                outcome.moved,
                outcome.board != *input,
                "moved flag disagrees with board equality for {}",
                direction
            );
        }
    }
}

#[test]
fn test_left_and_right_mirror_under_column_reversal() {
    let input = board(vec![
        vec![Some(2), None, Some(2), Some(4)],
        vec![None, Some(4), Some(4), None],
        vec![Some(8), Some(8), Some(2), Some(2)],
    ]);

    let left = shift(&input, Direction::Left).expect("Move failed");
    let right = shift(&mirror_columns(&input), Direction::Right).expect("Move failed");

    assert_eq!(mirror_columns(&left.board), right.board);
    assert_eq!(left.moved, right.moved);
    assert_eq!(left.gained, right.gained);
}

#[test]
fn test_up_and_down_mirror_under_row_reversal() {
    let input = board(vec![
        vec![Some(2), None, Some(8)],
        vec![Some(2), Some(4), Some(8)],
        vec![None, Some(4), None],
        vec![Some(2), None, Some(8)],
    ]);

    let up = shift(&input, Direction::Up).expect("Move failed");
    let down = shift(&mirror_rows(&input), Direction::Down).expect("Move failed");

    assert_eq!(mirror_rows(&up.board), down.board);
    assert_eq!(up.moved, down.moved);
    assert_eq!(up.gained, down.gained);
}

#[test]
fn test_single_row_board_collapses_but_never_climbs() {
    let input = board(vec![vec![Some(2), Some(2), Some(2), Some(2)]]);

    let left = shift(&input, Direction::Left).expect("Move failed");
    assert_eq!(
        left.board,
        board(vec![vec![Some(4), Some(4), None, None]])
    );
    assert_eq!(left.gained, 8);

    let up = shift(&input, Direction::Up).expect("Move failed");
    assert_eq!(up.board, input);
    assert!(!up.moved);
}

#[test]
fn test_single_cell_board_has_no_moves() {
    let input = board(vec![vec![Some(2)]]);

    for direction in Direction::ALL {
        let outcome = shift(&input, direction).expect("Move failed");
        assert_eq!(outcome.board, input);
        assert!(!outcome.moved);
        assert_eq!(outcome.gained, 0);
    }
}

#[test]
fn test_ragged_board_is_rejected_before_any_work() {
    let ragged: Board = serde_json::from_str("[[2,null,2],[4,4]]").expect("Parse failed");

    let result = shift(&ragged, Direction::Up);

    assert_eq!(
        result,
        Err(BoardError::Ragged {
            row: 1,
            len: 2,
            expected: 3,
        })
    );
}

#[test]
fn test_empty_grid_is_rejected() {
    let no_rows: Board = serde_json::from_str("[]").expect("Parse failed");
    assert_eq!(shift(&no_rows, Direction::Left), Err(BoardError::Empty));

    let no_cols: Board = serde_json::from_str("[[]]").expect("Parse failed");
    assert_eq!(shift(&no_cols, Direction::Left), Err(BoardError::Empty));
}

#[test]
fn test_rotation_round_trip_through_all_directions() {
    // A move on an immovable board exercises rotate and its inverse
    // for every direction; the board must come back bit-identical.
    let input = board(vec![
        vec![Some(2), Some(4), Some(8), Some(16), Some(32)],
        vec![Some(64), Some(128), Some(256), Some(512), Some(1024)],
    ]);

    for direction in Direction::ALL {
        let outcome = shift(&input, direction).expect("Move failed");
        assert_eq!(outcome.board, input, "{} disturbed the grid", direction);
    }
}
