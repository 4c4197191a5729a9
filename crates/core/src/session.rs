//! Turn and game-state machine.
//!
//! A [`GameSession`] owns the board and history and is the only thing that
//! mutates them. Every transition either succeeds with a [`Status`] that
//! describes the new state, or fails with a [`GameError`] and leaves the
//! session untouched.

use crate::{check_win, Board, CellKey, GameError, MoveHistory, MoveRecord, StoneColor};
use std::fmt;
use tracing::debug;

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: i32 = 15;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the given color to move.
    AwaitingMove(StoneColor),
    /// Game over. `None` when abandoned without a winner.
    Ended(Option<StoneColor>),
}

/// Outcome of a successful transition, rendered for players via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// A move was accepted and play continues.
    Moved {
        /// The move just played.
        played: MoveRecord,
        /// Color now on turn.
        next: StoneColor,
    },
    /// A move completed five in a row.
    Won {
        /// The winning move.
        played: MoveRecord,
    },
    /// The player on turn resigned.
    Resigned {
        /// Player who gave up.
        loser: StoneColor,
    },
    /// The last move was taken back.
    Undone {
        /// The move removed.
        undone: MoveRecord,
        /// Color now on turn.
        next: StoneColor,
    },
    /// The board was cleared.
    Reset,
    /// The game was closed without a result.
    Abandoned,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Moved { played, next } => write!(f, "{played}. {next} to move."),
            Status::Won { played } => write!(f, "{played}. {} wins!", played.color),
            Status::Resigned { loser } => {
                write!(f, "{loser} resigned. {} wins!", loser.opponent())
            }
            Status::Undone { undone, next } => {
                write!(f, "Took back {undone}. {next} to move.")
            }
            Status::Reset => write!(f, "Board reset. Black to move."),
            Status::Abandoned => write!(f, "Game closed."),
        }
    }
}

/// One game from reset to end.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    history: MoveHistory,
    phase: SessionPhase,
    board_size: i32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl GameSession {
    /// Start a session on a `board_size`×`board_size` board, Black to move.
    pub fn new(board_size: i32) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            phase: SessionPhase::AwaitingMove(StoneColor::Black),
            board_size: board_size.max(crate::WIN_LENGTH),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Color on turn, or `None` once the game has ended.
    pub fn current_player(&self) -> Option<StoneColor> {
        match self.phase {
            SessionPhase::AwaitingMove(color) => Some(color),
            SessionPhase::Ended(_) => None,
        }
    }

    /// True once the game has a result or was abandoned.
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, SessionPhase::Ended(_))
    }

    /// Winner, if the game ended with one.
    pub fn winner(&self) -> Option<StoneColor> {
        match self.phase {
            SessionPhase::Ended(winner) => winner,
            SessionPhase::AwaitingMove(_) => None,
        }
    }

    /// Board edge length.
    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Occupancy.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Full move log.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Play `color` at `cell`.
    pub fn submit_move(&mut self, color: StoneColor, cell: CellKey) -> Result<Status, GameError> {
        let expected = match self.phase {
            SessionPhase::AwaitingMove(expected) => expected,
            SessionPhase::Ended(_) => return Err(GameError::GameOver),
        };
        if color != expected {
            return Err(GameError::WrongTurn {
                expected,
                submitted: color,
            });
        }
        if !cell.within(self.board_size) {
            return Err(GameError::OutOfBounds {
                cell,
                size: self.board_size,
            });
        }

        self.board.place(cell, color)?;
        self.history.append(color, cell);
        let played = MoveRecord { color, cell };
        debug!(%played, stones = self.board.len(), "move accepted");

        if check_win(cell, color, &self.board) {
            self.phase = SessionPhase::Ended(Some(color));
            return Ok(Status::Won { played });
        }

        let next = color.opponent();
        self.phase = SessionPhase::AwaitingMove(next);
        Ok(Status::Moved { played, next })
    }

    /// The player on turn gives up.
    pub fn resign(&mut self) -> Result<Status, GameError> {
        let loser = match self.phase {
            SessionPhase::AwaitingMove(color) => color,
            SessionPhase::Ended(_) => return Err(GameError::GameOver),
        };
        self.phase = SessionPhase::Ended(Some(loser.opponent()));
        Ok(Status::Resigned { loser })
    }

    /// Take back the most recent move. Also reopens an ended game.
    pub fn undo(&mut self) -> Result<Status, GameError> {
        let undone = self.history.last_move().ok_or(GameError::NothingToUndo)?;
        self.board.remove(undone.cell)?;
        self.history.remove_last();
        self.phase = SessionPhase::AwaitingMove(undone.color);
        debug!(%undone, "move undone");
        Ok(Status::Undone {
            undone,
            next: undone.color,
        })
    }

    /// Clear the board and start over with Black.
    pub fn reset(&mut self) -> Status {
        self.board.clear();
        self.history.clear();
        self.phase = SessionPhase::AwaitingMove(StoneColor::Black);
        Status::Reset
    }

    /// End the game without a winner.
    pub fn abandon(&mut self) -> Status {
        self.phase = SessionPhase::Ended(None);
        Status::Abandoned
    }
}
