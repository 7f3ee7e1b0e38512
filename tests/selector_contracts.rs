//! Contract tests for best-move selection
//! Validates the tie-break, preference, and restore guarantees

use oxo::{Board, Error, Player, best_move, evaluate_moves};

#[test]
fn completes_own_line_before_anything_else() {
    // O O .        The win at 2 is available now; depth adjustment makes it
    // X X .        outrank every deeper forced win.
    // . . .
    let board = Board::from_string("OO.XX....").unwrap();
    assert_eq!(best_move(&board, Player::O, Player::X).unwrap(), Some(2));
}

#[test]
fn blocks_imminent_opponent_line() {
    // X X .        No O win is available, so minimizing X's best response
    // . . .        dominates: O must take 2.
    // . . .
    let board = Board::from_string("XX.......").unwrap();
    assert_eq!(best_move(&board, Player::O, Player::X).unwrap(), Some(2));
}

#[test]
fn empty_board_resolves_to_position_zero() {
    // Every opening is a draw under optimal play; the strict-improvement
    // scan keeps the earliest of the nine tied candidates.
    let board = Board::empty();
    assert_eq!(best_move(&board, Player::O, Player::X).unwrap(), Some(0));
}

#[test]
fn prefers_the_faster_of_two_wins() {
    // O holds 0 and 2; completing at 1 wins immediately, while other moves
    // still win eventually. The immediate win must be chosen.
    let board = Board::from_string("O.OXX....").unwrap();
    assert_eq!(best_move(&board, Player::O, Player::X).unwrap(), Some(1));
}

#[test]
fn full_board_reports_no_move_distinctly() {
    let board = Board::from_string("XOXXOOOXX").unwrap();
    let result = best_move(&board, Player::O, Player::X).unwrap();
    assert_eq!(result, None);
}

#[test]
fn malformed_board_is_rejected_at_entry() {
    for malformed in ["XXX......", "XXXX.O...", "OOO.O.X.."] {
        let board = Board::from_string(malformed).unwrap();
        let err = best_move(&board, Player::O, Player::X).unwrap_err();
        assert!(
            matches!(err, Error::MalformedBoard { .. }),
            "expected MalformedBoard for '{malformed}', got {err}"
        );
    }
}

#[test]
fn input_board_is_bit_identical_after_selection() {
    let boards = [
        Board::empty(),
        Board::from_string("X........").unwrap(),
        Board::from_string("XO.X.O...").unwrap(),
        Board::from_string("OO.XX....").unwrap(),
    ];

    for board in boards {
        let before = board;
        best_move(&board, Player::O, Player::X).unwrap();
        assert_eq!(board, before);

        evaluate_moves(&board, Player::X, Player::O).unwrap();
        assert_eq!(board, before);
    }
}

#[test]
fn evaluation_covers_every_legal_move_in_order() {
    let board = Board::from_string("X...O....").unwrap();
    let values = evaluate_moves(&board, Player::X, Player::O).unwrap();
    let positions: Vec<usize> = values.iter().map(|&(pos, _)| pos).collect();
    assert_eq!(positions, board.legal_moves());
}

#[test]
fn scores_stay_within_terminal_bounds() {
    let board = Board::from_string("XO.X.O...").unwrap();
    for (_, value) in evaluate_moves(&board, Player::X, Player::O).unwrap() {
        assert!((-10..=10).contains(&value), "score {value} out of range");
    }
}
