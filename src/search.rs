//! Exhaustive minimax search with depth-adjusted terminal scores.
//!
//! The search explores every reachable terminal outcome; no pruning is
//! applied because the 3x3 state space is bounded by 9! positions. An
//! implementation targeting larger boards would need alpha-beta pruning
//! and/or memoization keyed by board configuration plus side-to-move, along
//! with an explicit recursion-depth guard.

use crate::{
    board::{Board, Player},
    lines,
};

/// Terminal score magnitude before depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Score optimal play from `board` onward.
///
/// `ai` is the maximizing mark, `human` the minimizing mark, `depth` the
/// number of plies already spent along the current path, and `ai_to_move`
/// whose mark is placed at this level. Terminal scores are shifted by depth
/// so that among several forced wins the shallowest scores highest, and
/// among several forced losses the deepest scores least negative.
///
/// Each candidate move is explored on a copy of the board, so the caller's
/// board is untouched on every path.
pub fn score(board: &Board, ai: Player, human: Player, depth: i32, ai_to_move: bool) -> i32 {
    if lines::has_won(board, ai) {
        return WIN_SCORE - depth;
    }
    if lines::has_won(board, human) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mark = if ai_to_move { ai } else { human };
    let mut best = if ai_to_move { i32::MIN } else { i32::MAX };

    for pos in board.legal_moves() {
        let mut child = *board;
        child.cells[pos] = mark.to_cell();
        let value = score(&child, ai, human, depth + 1, !ai_to_move);
        best = if ai_to_move {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
