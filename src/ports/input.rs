//! Input port - human move boundary

use crate::Result;

/// Supplies the human's next move.
///
/// Synchronous; blocking is acceptable since the session is single-threaded.
/// Implementations may return out-of-range or occupied positions; the
/// controller re-requests rather than treating them as fatal.
pub trait MoveSource {
    fn next_move(&mut self) -> Result<usize>;
}
