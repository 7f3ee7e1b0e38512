//! Winning line analysis and outcome derivation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row on any winning line
pub fn has_won(board: &Board, player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.cells[idx] == target))
}

/// All positions that would immediately complete a line for the player,
/// in ascending index order.
pub fn winning_moves(board: &Board, player: Player) -> Vec<usize> {
    let mut moves: Vec<usize> = WINNING_LINES
        .iter()
        .filter_map(|line| winning_move_in_line(board, player, line))
        .collect();
    moves.sort_unstable();
    moves.dedup();
    moves
}

/// Find the completing position in a specific line, if the player holds the
/// other two cells.
fn winning_move_in_line(board: &Board, player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_pos = None;

    for &idx in line {
        match board.cells[idx] {
            Cell::Empty => {
                if empty_pos.is_some() {
                    return None;
                }
                empty_pos = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None,
        }
    }

    if count == 2 { empty_pos } else { None }
}

/// Terminal outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Derive the outcome of a board, or `None` while the game is in progress.
///
/// Win detection runs before the board-full check, so a board that is both
/// complete and won reports the win, not a draw.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_won(board, Player::X) {
        return Some(GameOutcome::Win(Player::X));
    }
    if has_won(board, Player::O) {
        return Some(GameOutcome::Win(Player::O));
    }
    if board.is_full() {
        return Some(GameOutcome::Draw);
    }
    None
}
