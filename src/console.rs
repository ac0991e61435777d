//! Line-oriented console front end.
//!
//! The console owns the only [`GameHistory`] in the process and replaces it
//! after every command, so calls into the core are serialized by
//! construction.

use crate::config::AppConfig;
use crate::games::tictactoe::{GameHistory, GameView, MoveError, Position, SortOrder};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Help text shown by the `help` command.
pub const HELP: &str = "\
Commands:
  play <cell>   place the next mark (cell 0-8 or a name like \"center\")
  <cell>        same as play
  jump <n>      go to history position n
  sort          flip the move list order
  show          redraw the board
  help          show this text
  quit          leave";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play on the current snapshot.
    Play(Position),
    /// Jump to a history position.
    Jump(usize),
    /// Flip the move list order.
    Sort,
    /// Redraw.
    Show,
    /// Print help.
    Help,
    /// Exit the loop.
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = ConsoleError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default().to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match (head.as_str(), rest.as_str()) {
            ("play" | "p", cell) => Position::from_label_or_number(cell).map(Self::Play),
            ("jump" | "j", n) => n.parse().ok().map(Self::Jump),
            ("sort", "") => Some(Self::Sort),
            ("show", "") => Some(Self::Show),
            ("help" | "?", "") => Some(Self::Help),
            ("quit" | "q" | "exit", "") => Some(Self::Quit),
            _ => Position::from_label_or_number(s).map(Self::Play),
        };

        let Some(command) = command else {
            return Err(ConsoleError::UnknownCommand(s.trim().to_string()));
        };
        Ok(command)
    }
}

/// What happened after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// State changed or a redraw was requested.
    Redraw,
    /// The rules refused the move; nothing changed.
    Ignored(MoveError),
    /// Help requested.
    Help,
    /// Leave the loop.
    Quit,
}

/// Console error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ConsoleError {
    /// Input that is not a command.
    #[display("Unrecognized command: {:?} (type \"help\")", _0)]
    UnknownCommand(#[error(not(source))] String),

    /// The core rejected the request as out of range.
    #[display("{}", _0)]
    Move(#[error(not(source))] MoveError),
}

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct Console {
    history: GameHistory,
    order: SortOrder,
    show_coordinates: bool,
}

impl Console {
    /// Creates a console at the start of a new game.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_history(GameHistory::new(), config)
    }

    /// Creates a console over an existing history.
    #[instrument(skip(history, config))]
    pub fn with_history(history: GameHistory, config: &AppConfig) -> Self {
        Self {
            history,
            order: *config.history_order(),
            show_coordinates: *config.show_coordinates(),
        }
    }

    /// The history being displayed.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Derives the current view.
    pub fn view(&self) -> GameView {
        GameView::new(&self.history, self.order)
    }

    /// Runs one command against the session.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Move`] when the core reports a contract violation,
    /// such as a jump past the end of the history.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: ConsoleCommand) -> Result<Feedback, ConsoleError> {
        match command {
            ConsoleCommand::Play(cell) => match self.history.play(cell) {
                Ok(next) => {
                    self.history = next;
                    Ok(Feedback::Redraw)
                }
                Err(e) if e.is_illegal_move() => Ok(Feedback::Ignored(e)),
                Err(e) => Err(e.into()),
            },
            ConsoleCommand::Jump(target) => {
                self.history = self.history.jump_to(target)?;
                Ok(Feedback::Redraw)
            }
            ConsoleCommand::Sort => {
                self.order = self.order.toggle();
                Ok(Feedback::Redraw)
            }
            ConsoleCommand::Show => Ok(Feedback::Redraw),
            ConsoleCommand::Help => Ok(Feedback::Help),
            ConsoleCommand::Quit => Ok(Feedback::Quit),
        }
    }

    /// Renders the current view as text.
    pub fn render(&self) -> String {
        render(&self.view(), self.show_coordinates)
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        info!("Console session started");
        writeln!(output, "{}\n", self.render())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let feedback = line
                .parse::<ConsoleCommand>()
                .and_then(|command| self.execute(command));
            debug!(?feedback, "Command handled");

            match feedback {
                Ok(Feedback::Redraw) => writeln!(output, "{}\n", self.render())?,
                Ok(Feedback::Ignored(e)) => writeln!(output, "Ignored: {}\n", e)?,
                Ok(Feedback::Help) => writeln!(output, "{}\n", HELP)?,
                Ok(Feedback::Quit) => break,
                Err(e) => writeln!(output, "Error: {}\n", e)?,
            }
        }

        info!(len = self.history.len(), "Console session ended");
        Ok(())
    }
}

/// Renders a view as text: status line, board, winning line and move list.
pub fn render(view: &GameView, show_coordinates: bool) -> String {
    let board = view.board.display(show_coordinates);
    let mut out = format!("{}\n{}\n", view.status_line, board);

    if let Some(line) = view.status.winning_line() {
        let cells = line.map(|pos| pos.to_index().to_string()).join("-");
        out.push_str(&format!("Winning line: {}\n", cells));
    }

    out.push_str(&format!("[{}]\n", view.order.toggle_label()));
    for entry in &view.entries {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.position, entry.label));
    }
    out.pop();
    out
}
