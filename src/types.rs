//! Validated newtypes shared across the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// A position on the game board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < BOARD_SIZE {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validation() {
        assert!(Position::new(0).is_ok());
        assert!(Position::new(8).is_ok());
        assert!(Position::new(9).is_err());
        assert!(Position::new(100).is_err());
    }

    #[test]
    fn test_position_value_roundtrip() {
        let pos = Position::new(4).unwrap();
        assert_eq!(pos.value(), 4);
        assert_eq!(usize::from(pos), 4);
        assert_eq!(pos.to_string(), "4");
    }
}
