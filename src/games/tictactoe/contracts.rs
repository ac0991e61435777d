//! Contract-based validation for moves on a history.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::history::GameHistory;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::evaluate;
use super::{Board, Position};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move is played on a snapshot that exists.
pub struct PositionInHistory;

impl PositionInHistory {
    /// Returns the snapshot at `position`.
    #[instrument(skip(history))]
    pub fn check(position: usize, history: &GameHistory) -> Result<&Board, MoveError> {
        history
            .snapshot(position)
            .ok_or(MoveError::PositionOutOfRange {
                position,
                len: history.len(),
            })
    }
}

/// Precondition: the snapshot has no completed line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] if `board` has a completed line.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match evaluate(board) {
            Some(win) => Err(MoveError::GameOver(win.player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if `cell` is taken on `board`.
    #[instrument(skip(board))]
    pub fn check(cell: Position, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(cell) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(cell))
        }
    }
}

/// Composite precondition: the snapshot exists, nobody has won on it and
/// the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(position: usize, cell: Position, history: &GameHistory) -> Result<(), MoveError> {
        let board = PositionInHistory::check(position, history)?;
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(cell, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing `(position, cell)` on a history.
///
/// Preconditions:
/// - Position must be inside the history
/// - Snapshot at that position must have no winner
/// - Square must be empty
///
/// Postconditions:
/// - Snapshots up to the played position are unchanged
/// - Cursor sits on the new last snapshot
/// - Timeline invariants hold
pub struct MoveContract;

impl Contract<GameHistory, (usize, Position)> for MoveContract {
    fn pre(history: &GameHistory, action: &(usize, Position)) -> Result<(), MoveError> {
        let (position, cell) = *action;
        LegalMove::check(position, cell, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        let kept = after.len() - 1;
        if kept > before.len() || before.snapshots()[..kept] != after.snapshots()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots were rewritten".to_string(),
            ));
        }

        if !after.is_at_latest() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor is not on the new snapshot".to_string(),
            ));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
