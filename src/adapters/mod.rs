//! Adapters implementing the port traits.
//!
//! `console` backs interactive play on a terminal; `scripted` provides
//! in-memory implementations for tests and drivers that replay fixed input.

pub mod console;
pub mod scripted;

pub use console::{ConsoleRenderer, StdinMoveSource};
pub use scripted::{NullRenderer, RecordingRenderer, ScriptedMoves};
