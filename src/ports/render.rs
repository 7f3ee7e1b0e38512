//! Render port - board display boundary

use crate::{Result, board::Board};

/// Displays the board to the user.
///
/// Called after every applied move. Purely presentational; implementations
/// must not mutate game state.
pub trait Renderer {
    fn render(&mut self, board: &Board) -> Result<()>;
}
