//! Cursor invariant: the current position always names a snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `0 <= current_position < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_position() < history.len()
    }

    fn description() -> &'static str {
        "Current position is inside the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_jumps_hold() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft]).unwrap();
        for target in 0..history.len() {
            let jumped = history.jump_to(target).unwrap();
            assert!(CursorInBoundsInvariant::holds(&jumped));
        }
    }

    #[test]
    fn test_dangling_cursor_violates() {
        let mut history = GameHistory::new();
        history.current = 1;
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}
