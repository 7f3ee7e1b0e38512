//! In-memory adapters for tests and replayed sessions.

use std::collections::VecDeque;

use crate::{
    Error, Result,
    board::Board,
    ports::{MoveSource, Renderer},
};

/// Discards every frame.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _board: &Board) -> Result<()> {
        Ok(())
    }
}

/// Records every rendered board for later inspection.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Board>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, board: &Board) -> Result<()> {
        self.frames.push(*board);
        Ok(())
    }
}

/// Replays a fixed sequence of positions.
#[derive(Debug)]
pub struct ScriptedMoves {
    queue: VecDeque<usize>,
}

impl ScriptedMoves {
    pub fn new<I: IntoIterator<Item = usize>>(moves: I) -> Self {
        ScriptedMoves {
            queue: moves.into_iter().collect(),
        }
    }

    /// Positions not yet consumed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Result<usize> {
        self.queue.pop_front().ok_or(Error::ScriptExhausted)
    }
}
