//! Derived game status.
//!
//! Status is never stored. It is recomputed from a board and the player
//! to move, so any snapshot in a history can be classified on demand.

use super::rules::{Win, evaluate, is_draw};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `to_move` plays next.
    InProgress {
        /// The player whose turn it is.
        to_move: Player,
    },
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Classifies a board, with `to_move` used only while the game is ongoing.
    #[instrument]
    pub fn of(board: &Board, to_move: Player) -> Self {
        match evaluate(board) {
            Some(win) => GameStatus::Won(win),
            None if is_draw(board) => GameStatus::Draw,
            None => GameStatus::InProgress { to_move },
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won(win) => Some(win.line),
            _ => None,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next player: {}", to_move),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player),
            GameStatus::Draw => write!(f, "Draw!"),
        }
    }
}
