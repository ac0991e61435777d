//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the mark added by snapshot n belongs to the player whose
/// turn it was at position n-1.
///
/// First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        (1..history.len()).all(|position| {
            history
                .move_at(position)
                .is_some_and(|action| action.player == Player::for_position(position - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&history));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::new().play(Position::TopLeft).unwrap();
        let forged = history.snapshots[1].with_mark(Position::Center, Player::X);
        history.snapshots.push(forged);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut history = GameHistory::new();
        history
            .snapshots
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
