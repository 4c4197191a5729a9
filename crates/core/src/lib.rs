#![warn(missing_docs)]
//! Gomoku rules: board occupancy, move history, win detection, and the
//! turn/undo/reset state machine driven by spoken commands.

pub mod cell;
pub mod display;
mod error;
pub mod history;
pub mod opponent;
pub mod session;
pub mod stone;
pub mod win;

mod board;

pub use board::Board;
pub use cell::{CellKey, CellKeyError, CELL_SEPARATOR};
pub use error::GameError;
pub use history::{MoveHistory, MoveRecord};
pub use session::{GameSession, SessionPhase, Status, DEFAULT_BOARD_SIZE};
pub use stone::StoneColor;
pub use win::{check_win, WIN_LENGTH};
