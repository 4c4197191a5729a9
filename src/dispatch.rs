//! Routes decoded payloads to the Gomoku session or the furniture controller.
//!
//! Every failure comes back as a [`DispatchError`]; the run loop reports it
//! and keeps polling.

use crate::protocol::{
    decode_furniture, decode_gomoku, AdminCommand, CommandFormatError, FurnitureRequest,
    GomokuRequest,
};
use std::fmt;
use tabletalk_core::display::{render_board, render_history, render_turn};
use tabletalk_core::opponent::suggest_move;
use tabletalk_core::{GameError, GameSession, Status, StoneColor};
use tabletalk_furniture::{FurnitureController, FurnitureError};
use tracing::{debug, warn};

#[derive(Debug)]
pub enum DispatchError {
    Format(CommandFormatError),
    Game(GameError),
    Furniture(FurnitureError),
    /// Structurally valid payload with a verb nothing handles.
    UnknownAction(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Format(err) => write!(f, "{err}"),
            DispatchError::Game(err) => write!(f, "{err}"),
            DispatchError::Furniture(err) => write!(f, "{err}"),
            DispatchError::UnknownAction(verb) => write!(f, "unknown action '{verb}'"),
        }
    }
}

impl std::error::Error for DispatchError {}

impl From<CommandFormatError> for DispatchError {
    fn from(err: CommandFormatError) -> Self {
        DispatchError::Format(err)
    }
}

impl From<GameError> for DispatchError {
    fn from(err: GameError) -> Self {
        DispatchError::Game(err)
    }
}

impl From<FurnitureError> for DispatchError {
    fn from(err: FurnitureError) -> Self {
        DispatchError::Furniture(err)
    }
}

/// What the run loop should do after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub effect: Effect,
}

impl Reply {
    fn status(status: Status) -> Self {
        Self {
            lines: vec![status.to_string()],
            effect: Effect::Continue,
        }
    }
}

pub struct GomokuDispatcher {
    session: GameSession,
    opponent: Option<StoneColor>,
    history_len: usize,
}

impl GomokuDispatcher {
    /// A fresh game. When `opponent` is set, the built-in player answers for
    /// that color (and opens the game if it plays Black).
    pub fn new(board_size: i32, opponent: Option<StoneColor>, history_len: usize) -> Self {
        let mut dispatcher = Self {
            session: GameSession::new(board_size),
            opponent,
            history_len,
        };
        if let Some(line) = dispatcher.opponent_reply() {
            debug!(%line, "Opponent opened the game");
        }
        dispatcher
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn handle(&mut self, payload: &str) -> Result<Reply, DispatchError> {
        let request = decode_gomoku(payload)?;
        self.apply(request)
    }

    pub fn apply(&mut self, request: GomokuRequest) -> Result<Reply, DispatchError> {
        let command = match request {
            GomokuRequest::Move { color, cell } => {
                let mut reply = Reply::status(self.session.submit_move(color, cell)?);
                reply.lines.extend(self.opponent_reply());
                return Ok(reply);
            }
            GomokuRequest::Command(command) => command,
        };

        match command {
            AdminCommand::Resign => Ok(Reply::status(self.session.resign()?)),
            AdminCommand::Undo => {
                let mut reply = Reply::status(self.session.undo()?);
                // Take back the player's own move too so they are on turn again.
                if self.opponent.is_some() && self.session.current_player() == self.opponent {
                    match self.session.undo() {
                        Ok(status) => reply.lines.push(status.to_string()),
                        Err(GameError::NothingToUndo) => {
                            reply.lines.extend(self.opponent_reply());
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                Ok(reply)
            }
            AdminCommand::ResetBoard => {
                let mut reply = Reply::status(self.session.reset());
                reply.lines.extend(self.opponent_reply());
                Ok(reply)
            }
            AdminCommand::QuitApplication => Ok(Reply {
                lines: vec![self.session.abandon().to_string()],
                effect: Effect::Quit,
            }),
            AdminCommand::Unrecognized(verb) => Err(DispatchError::UnknownAction(verb)),
        }
    }

    fn opponent_reply(&mut self) -> Option<String> {
        let me = self.opponent?;
        if self.session.current_player() != Some(me) {
            return None;
        }
        let cell = suggest_move(self.session.board(), self.session.board_size(), me)?;
        match self.session.submit_move(me, cell) {
            Ok(status) => Some(status.to_string()),
            Err(err) => {
                warn!(%err, %cell, "Opponent move rejected");
                None
            }
        }
    }

    /// Board, recent history and turn line for the terminal.
    pub fn render(&self) -> String {
        let mut out = render_board(&self.session);
        let history = render_history(&self.session, self.history_len);
        if !history.is_empty() {
            out.push_str(&history);
            out.push('\n');
        }
        out.push_str(&render_turn(&self.session));
        out
    }
}

pub struct FurnitureDispatcher {
    controller: FurnitureController,
}

impl FurnitureDispatcher {
    pub fn new(controller: FurnitureController) -> Self {
        Self { controller }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &FurnitureController {
        &self.controller
    }

    pub fn handle(&mut self, payload: &str) -> Result<Reply, DispatchError> {
        match decode_furniture(payload)? {
            FurnitureRequest::Command(command) => {
                let outcome = self.controller.apply(&command)?;
                Ok(Reply {
                    lines: vec![outcome.to_string()],
                    effect: Effect::Continue,
                })
            }
            FurnitureRequest::UnknownAction(verb) => Err(DispatchError::UnknownAction(verb)),
        }
    }

    /// One line per piece of furniture, in name order.
    pub fn render(&self) -> String {
        let scene = self.controller.scene();
        if scene.is_empty() {
            return "room is empty".to_string();
        }
        scene
            .objects()
            .map(|object| {
                let facing = object.facing();
                format!(
                    "{} at {:.2} {:.2} {:.2} facing {:.2} {:.2} {:.2}",
                    object.name,
                    object.position.x,
                    object.position.y,
                    object.position.z,
                    facing.x,
                    facing.y,
                    facing.z
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
