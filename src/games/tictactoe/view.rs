//! Presentation state derived from a history.
//!
//! Nothing here feeds back into the game. A front end rebuilds a
//! [`GameView`] after every command and renders it however it likes.

use super::{Board, GameHistory, GameStatus, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// History position this entry jumps to.
    pub position: usize,
    /// Human-readable label.
    pub label: String,
    /// True for the entry under the cursor.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Builds the entry for `position`.
    pub fn new(position: usize, is_current: bool) -> Self {
        let label = match (position, is_current) {
            (0, true) => "You are at game start".to_string(),
            (n, true) => format!("You are at move #{}", n),
            (0, false) => "Go to game start".to_string(),
            (n, false) => format!("Go to move #{}", n),
        };
        Self {
            position,
            label,
            is_current,
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board under the cursor.
    pub board: Board,
    /// Status of that board.
    pub status: GameStatus,
    /// Status line, e.g. "Next player: X".
    pub status_line: String,
    /// Move list in the requested order.
    pub entries: Vec<HistoryEntry>,
    /// Order of `entries`.
    pub order: SortOrder,
}

impl GameView {
    /// Derives the view of `history` with the move list in `order`.
    #[instrument(skip(history), fields(len = history.len(), current = history.current_position()))]
    pub fn new(history: &GameHistory, order: SortOrder) -> Self {
        let status = history.status();
        let mut entries: Vec<HistoryEntry> = (0..history.len())
            .map(|position| HistoryEntry::new(position, position == history.current_position()))
            .collect();
        if order == SortOrder::Descending {
            entries.reverse();
        }

        Self {
            board: *history.current_board(),
            status,
            status_line: status.to_string(),
            entries,
            order,
        }
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.status
            .winning_line()
            .is_some_and(|line| line.contains(&pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle_label(), "Sort Descending");
        assert_eq!("DESCENDING".parse::<SortOrder>(), Ok(SortOrder::Descending));
    }

    #[test]
    fn test_entry_labels() {
        assert_eq!(HistoryEntry::new(0, false).label, "Go to game start");
        assert_eq!(HistoryEntry::new(3, false).label, "Go to move #3");
        assert_eq!(HistoryEntry::new(0, true).label, "You are at game start");
        assert_eq!(HistoryEntry::new(2, true).label, "You are at move #2");
    }

    #[test]
    fn test_view_orders_entries() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft])
            .unwrap()
            .jump_to(1)
            .unwrap();

        let ascending = GameView::new(&history, SortOrder::Ascending);
        let positions: Vec<_> = ascending.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(ascending.entries[1].is_current);
        assert_eq!(ascending.status_line, "Next player: O");

        let descending = GameView::new(&history, SortOrder::Descending);
        let positions: Vec<_> = descending.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![2, 1, 0]);
    }

    #[test]
    fn test_view_highlights_winning_line() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ])
        .unwrap();

        let view = GameView::new(&history, SortOrder::default());
        assert_eq!(view.status_line, "Winner: X");
        assert!(view.is_winning_square(Position::TopCenter));
        assert!(!view.is_winning_square(Position::Center));
    }
}
