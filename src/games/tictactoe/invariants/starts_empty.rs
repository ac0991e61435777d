//! Starting board invariant: the timeline begins at the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: snapshot 0 exists and is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshot(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts at the empty board"
    }
}
