//! Time-travelling move history.
//!
//! A [`GameHistory`] is a single linear timeline of board snapshots plus a
//! cursor marking the active one. Every operation borrows the history and
//! returns a new value, so a caller holding an older history never sees it
//! change underneath them.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::status::GameStatus;
use super::{Board, Player, Position};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Ordered board snapshots with a cursor into them.
///
/// Snapshot 0 is always the empty board. Whose turn it is follows from the
/// cursor alone: X moves from even positions, O from odd ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameHistory {
    pub(super) snapshots: Vec<Board>,
    pub(super) current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a history by playing `cells` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(cells: &[Position]) -> Result<Self, MoveError> {
        cells
            .iter()
            .try_fold(Self::new(), |history, cell| history.play(*cell))
    }

    /// Plays `cell` on the snapshot at `position`.
    ///
    /// Snapshots after `position` are discarded before the new board is
    /// appended, and the cursor moves to the new last snapshot.
    ///
    /// # Errors
    ///
    /// - [`MoveError::PositionOutOfRange`] if `position` is not in the history.
    /// - [`MoveError::GameOver`] if that snapshot already has a winner.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(len = self.len(), current = self.current))]
    pub fn apply_move(&self, position: usize, cell: Position) -> Result<Self, MoveError> {
        if let Err(e) = MoveContract::pre(self, &(position, cell)) {
            if e.is_illegal_move() {
                debug!(error = %e, "Move rejected");
            } else {
                warn!(error = %e, "Move contract violated");
            }
            return Err(e);
        }

        let player = Player::for_position(position);
        let next = self.snapshots[position].with_mark(cell, player);

        let mut snapshots = self.snapshots[..=position].to_vec();
        let discarded = self.snapshots.len() - snapshots.len();
        snapshots.push(next);

        let after = Self {
            current: snapshots.len() - 1,
            snapshots,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &after)?;

        debug!(%player, %cell, discarded, len = after.len(), "Move applied");
        Ok(after)
    }

    /// Plays `cell` given as a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::CellOutOfRange`] for indices above 8, otherwise as
    /// [`apply_move`](Self::apply_move).
    #[instrument(skip(self))]
    pub fn apply_move_at_index(&self, position: usize, cell: usize) -> Result<Self, MoveError> {
        let cell = Position::try_from(cell).inspect_err(|e| {
            warn!(error = %e, "Move contract violated");
        })?;
        self.apply_move(position, cell)
    }

    /// Plays `cell` on the current snapshot.
    ///
    /// # Errors
    ///
    /// As [`apply_move`](Self::apply_move).
    pub fn play(&self, cell: Position) -> Result<Self, MoveError> {
        self.apply_move(self.current, cell)
    }

    /// Moves the cursor to `target` without touching any snapshot.
    ///
    /// # Errors
    ///
    /// [`MoveError::PositionOutOfRange`] if `target` is not in the history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&self, target: usize) -> Result<Self, MoveError> {
        if target >= self.snapshots.len() {
            let e = MoveError::PositionOutOfRange {
                position: target,
                len: self.snapshots.len(),
            };
            warn!(error = %e, "Jump contract violated");
            return Err(e);
        }

        debug!(from = self.current, to = target, "Jumped");
        Ok(Self {
            snapshots: self.snapshots.clone(),
            current: target,
        })
    }

    /// The snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Number of snapshots, including the empty starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the active snapshot.
    pub fn current_position(&self) -> usize {
        self.current
    }

    /// Returns true if the cursor is on the last snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }

    /// The snapshot at `position`, if it exists.
    pub fn snapshot(&self, position: usize) -> Option<&Board> {
        self.snapshots.get(position)
    }

    /// All snapshots on the timeline, including those after the cursor.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The player who moves next from the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_position(self.current)
    }

    /// Status of the current snapshot.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.to_move())
    }

    /// The move that produced snapshot `position`.
    ///
    /// `None` for position 0 and for positions past the end.
    pub fn move_at(&self, position: usize) -> Option<Move> {
        let before = self.snapshots.get(position.checked_sub(1)?)?;
        let after = self.snapshots.get(position)?;
        match before.diff(after).as_slice() {
            [cell] => after
                .get(*cell)
                .player()
                .map(|player| Move::new(player, *cell)),
            _ => None,
        }
    }

    /// Every move on the timeline, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|position| self.move_at(position))
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
