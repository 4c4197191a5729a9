//! Rule violations raised by the board and session.

use crate::{CellKey, StoneColor};
use thiserror::Error;

/// Errors emitted while applying moves and administrative commands.
///
/// None of these leave the session in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A move was submitted by the player who is not on turn.
    #[error("it is {expected}'s turn, not {submitted}'s")]
    WrongTurn {
        /// Color on turn.
        expected: StoneColor,
        /// Color that tried to move.
        submitted: StoneColor,
    },
    /// The target cell already holds a stone.
    #[error("cell {0} is already occupied")]
    CellOccupied(CellKey),
    /// A stone was removed from a cell that holds none.
    #[error("cell {0} is empty")]
    CellEmpty(CellKey),
    /// Undo was requested with no moves played.
    #[error("there is no move to undo")]
    NothingToUndo,
    /// The game has ended; only undo and reset are accepted.
    #[error("the game is over; reset the board to play again")]
    GameOver,
    /// The target cell is off the board.
    #[error("cell {cell} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested cell.
        cell: CellKey,
        /// Board edge length.
        size: i32,
    },
}
