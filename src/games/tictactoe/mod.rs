mod action;
mod contracts;
mod history;
mod invariants;
mod position;
mod rules;
mod status;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{
    Contract, LegalMove, MoveContract, NoWinnerYet, PositionInHistory, SquareIsEmpty,
};
pub use history::GameHistory;
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, Invariant, InvariantSet, InvariantViolation,
    SingleCellDeltaInvariant, StartsEmptyInvariant, TimelineInvariants,
};
pub use position::Position;
pub use rules::{WINNING_LINES, Win, check_winner, evaluate, is_draw, is_full};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryEntry, SortOrder};
