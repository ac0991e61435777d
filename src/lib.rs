//! Strictly Timeline - tic-tac-toe with a time-travelling move history
//!
//! The core is pure data: a [`GameHistory`] of immutable board snapshots
//! with a cursor, and a stateless win detector ([`evaluate`]). Front ends
//! call into the core and re-derive what to show from a [`GameView`].
//!
//! # Architecture
//!
//! - **Games**: board, rules, history, contracts and invariants
//! - **Config**: TOML settings for front ends
//! - **Console**: a line-oriented front end over stdin/stdout
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameHistory, Player, Position};
//!
//! # fn example() -> Result<(), strictly_timeline::MoveError> {
//! let history = GameHistory::new()
//!     .play(Position::Center)?
//!     .play(Position::TopLeft)?;
//! assert_eq!(history.len(), 3);
//!
//! // Go back to the start and take a different path.
//! let branched = history.jump_to(1)?.play(Position::BottomRight)?;
//! assert_eq!(branched.len(), 3);
//! assert_eq!(branched.to_move(), Player::X);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Console front end
pub use console::{Console, ConsoleCommand, ConsoleError, Feedback, HELP, render};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, Contract, CursorInBoundsInvariant, GameHistory, GameStatus,
    GameView, HistoryEntry, Invariant, InvariantSet, InvariantViolation, LegalMove, Move,
    MoveContract, MoveError, NoWinnerYet, Player, Position, PositionInHistory,
    SingleCellDeltaInvariant, SortOrder, Square, SquareIsEmpty, StartsEmptyInvariant,
    TimelineInvariants, WINNING_LINES, Win, check_winner, evaluate, is_draw, is_full,
};
