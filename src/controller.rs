//! Interactive game session state machine.

use crate::{
    Error, Result,
    board::{Board, Player},
    lines::{self, GameOutcome},
    ports::{MoveSource, Renderer},
    selector::Selector,
};

/// Lifecycle states of a session.
///
/// `Won`/`Draw` are terminal; the controller accepts no further moves once
/// either is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAiMove,
    AwaitingHumanMove,
    Won(Player),
    Draw,
}

/// Drives turn alternation between the engine and a human behind the
/// render/input ports.
///
/// The board starts empty and is mutated in place through validated moves;
/// X always opens, so the initial state follows which role holds X.
pub struct GameController<R, M> {
    board: Board,
    selector: Selector,
    state: SessionState,
    renderer: R,
    input: M,
}

impl<R: Renderer, M: MoveSource> GameController<R, M> {
    /// Create a session where the engine plays `ai_mark` and the human the
    /// opposing mark.
    pub fn new(ai_mark: Player, renderer: R, input: M) -> Self {
        let state = if ai_mark == Player::X {
            SessionState::AwaitingAiMove
        } else {
            SessionState::AwaitingHumanMove
        };
        GameController {
            board: Board::empty(),
            selector: Selector::new(ai_mark),
            state,
            renderer,
            input,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Advance the session by one move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the session is terminal; port
    /// failures propagate unchanged.
    pub fn step(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::AwaitingAiMove => self.ai_turn()?,
            SessionState::AwaitingHumanMove => self.human_turn()?,
            SessionState::Won(_) | SessionState::Draw => return Err(Error::GameOver),
        }
        Ok(self.state)
    }

    /// Run the session to completion and return the outcome.
    pub fn run(&mut self) -> Result<GameOutcome> {
        self.renderer.render(&self.board)?;
        loop {
            match self.state {
                SessionState::Won(player) => return Ok(GameOutcome::Win(player)),
                SessionState::Draw => return Ok(GameOutcome::Draw),
                _ => {
                    self.step()?;
                }
            }
        }
    }

    fn ai_turn(&mut self) -> Result<()> {
        match self.selector.best_move(&self.board)? {
            Some(pos) => {
                self.board.apply(pos, self.selector.ai())?;
                self.renderer.render(&self.board)?;
                self.state = self.resolve(SessionState::AwaitingHumanMove);
            }
            // No legal move means the board filled up: already decided.
            None => self.state = SessionState::Draw,
        }
        Ok(())
    }

    fn human_turn(&mut self) -> Result<()> {
        loop {
            let pos = self.input.next_move()?;
            // Out-of-range or occupied: ask again instead of failing.
            if self.board.apply(pos, self.selector.human()).is_ok() {
                break;
            }
        }
        self.renderer.render(&self.board)?;
        self.state = self.resolve(SessionState::AwaitingAiMove);
        Ok(())
    }

    /// Win checks for both marks take precedence over the board-full draw.
    fn resolve(&self, next: SessionState) -> SessionState {
        match lines::outcome(&self.board) {
            Some(GameOutcome::Win(player)) => SessionState::Won(player),
            Some(GameOutcome::Draw) => SessionState::Draw,
            None => next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{NullRenderer, ScriptedMoves};

    #[test]
    fn test_initial_state_follows_first_mover() {
        let session = GameController::new(Player::X, NullRenderer, ScriptedMoves::new([]));
        assert_eq!(session.state(), SessionState::AwaitingAiMove);

        let session = GameController::new(Player::O, NullRenderer, ScriptedMoves::new([]));
        assert_eq!(session.state(), SessionState::AwaitingHumanMove);
    }

    #[test]
    fn test_step_alternates_turns() {
        let mut session =
            GameController::new(Player::O, NullRenderer, ScriptedMoves::new([4]));
        assert_eq!(session.step().unwrap(), SessionState::AwaitingAiMove);
        assert_eq!(session.board().get(4), crate::board::Cell::X);

        assert_eq!(session.step().unwrap(), SessionState::AwaitingHumanMove);
        assert_eq!(session.board().legal_moves().len(), 7);
    }

    #[test]
    fn test_invalid_input_is_rerequested() {
        // 42 is out of range and 4 lands on an occupied cell after the first
        // exchange; both must be skipped without ending the turn.
        let mut session =
            GameController::new(Player::O, NullRenderer, ScriptedMoves::new([42, 4, 4, 1]));
        session.step().unwrap(); // human: 42 rejected, 4 applied
        session.step().unwrap(); // engine replies at the lowest drawing corner
        assert_eq!(session.board().get(0), crate::board::Cell::O);
        session.step().unwrap(); // human: 4 now occupied, 1 applied
        assert_eq!(session.board().get(1), crate::board::Cell::X);
    }
}
