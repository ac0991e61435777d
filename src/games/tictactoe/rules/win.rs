//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines that win the game, in evaluation order.
pub const WINNING_LINES: [[Position; 3]; 8] = {
    use Position::*;
    [
        // Rows
        [TopLeft, TopCenter, TopRight],
        [MiddleLeft, Center, MiddleRight],
        [BottomLeft, BottomCenter, BottomRight],
        // Columns
        [TopLeft, MiddleLeft, BottomLeft],
        [TopCenter, Center, BottomCenter],
        [TopRight, MiddleRight, BottomRight],
        // Diagonals
        [TopLeft, Center, BottomRight],
        [TopRight, Center, BottomLeft],
    ]
};

/// A completed line: the winning player and the three cells that form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player owning the line.
    pub player: Player,
    /// The cells of the line, in [`WINNING_LINES`] order.
    pub line: [Position; 3],
}

impl Win {
    /// Returns true if `pos` is one of the winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The winning cells as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Evaluates the board for a completed line.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete
/// one is returned. `None` covers both an ongoing game and a draw; use
/// [`is_full`](super::is_full) to tell them apart.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line @ [a, b, c] in WINNING_LINES {
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some(Win { player, line });
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.player)
}
