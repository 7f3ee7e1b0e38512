//! Console adapters: stdout rendering and stdin move entry.

use std::io::{self, BufRead, Write};

use crate::{
    Error, Result,
    board::Board,
    ports::{MoveSource, Renderer},
    types::Position,
};

/// Renders the board to stdout as three rows.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&mut self, board: &Board) -> Result<()> {
        println!("\n{board}");
        Ok(())
    }
}

/// Reads moves from stdin, prompting until a parseable in-range position is
/// entered. Occupied-cell rejection stays with the controller, which
/// re-requests.
#[derive(Debug, Default)]
pub struct StdinMoveSource;

impl StdinMoveSource {
    pub fn new() -> Self {
        StdinMoveSource
    }
}

impl MoveSource for StdinMoveSource {
    fn next_move(&mut self) -> Result<usize> {
        let stdin = io::stdin();
        loop {
            print!("Your move (0-8): ");
            io::stdout().flush().map_err(|source| Error::Io {
                operation: "flush stdout".to_string(),
                source,
            })?;

            let mut line = String::new();
            let bytes = stdin.lock().read_line(&mut line).map_err(|source| Error::Io {
                operation: "read move from stdin".to_string(),
                source,
            })?;
            if bytes == 0 {
                return Err(Error::Io {
                    operation: "read move from stdin".to_string(),
                    source: io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"),
                });
            }

            match line.trim().parse::<usize>().ok().map(Position::new) {
                Some(Ok(pos)) => return Ok(pos.value()),
                _ => println!("Enter a number between 0 and 8."),
            }
        }
    }
}
