//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are never stored in a history directly. They are recovered
/// from the difference between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when applying a move or navigating the history.
///
/// [`SquareOccupied`](MoveError::SquareOccupied) and
/// [`GameOver`](MoveError::GameOver) are ordinary illegal moves a player can
/// cause. The remaining variants mean the caller broke the contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already over: {} has won", _0)]
    GameOver(#[error(not(source))] Player),

    /// A history position outside `0..len`.
    #[display("History position {} is out of range (length {})", position, len)]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// A cell index outside `0..=8`.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// Returns true for moves the rules forbid, as opposed to caller bugs.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::SquareOccupied(_) | MoveError::GameOver(_))
    }
}
