//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: snapshot n differs from snapshot n-1 in exactly one cell,
/// and that cell went from empty to occupied.
///
/// Squares therefore never change once set along the timeline.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            match before.diff(after).as_slice() {
                [cell] => before.is_empty(*cell) && !after.is_empty(*cell),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_played_history_holds() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ])
        .unwrap();
        assert!(SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut history = GameHistory::new().play(Position::Center).unwrap();
        history.snapshots[1] = history.snapshots[1].with_mark(Position::TopLeft, Player::O);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = GameHistory::replay(&[Position::Center, Position::TopLeft]).unwrap();
        history.snapshots[2] = history.snapshots[1].with_mark(Position::Center, Player::O);
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut history = GameHistory::new();
        history.snapshots.push(Board::new());
        assert!(!SingleCellDeltaInvariant::holds(&history));
    }
}
