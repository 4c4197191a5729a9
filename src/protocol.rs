//! JSON payload decoding for the watched command files.
//!
//! Field names are accepted in English and in the form the speech front-end
//! writes them. Shapes are decided by which fields are present; verbs are
//! decoded once here into closed enums.

use serde_json::{Map, Value};
use std::fmt;
use tabletalk_core::{CellKey, StoneColor};
use tabletalk_furniture::{Action, Direction, FurnitureCommand};

const MOVER_FIELDS: [&str; 2] = ["moverColor", "玩家棋子顏色"];
const CELL_FIELDS: [&str; 2] = ["targetCell", "下的格子"];
const COMMAND_FIELDS: [&str; 2] = ["command", "遊戲指令"];

const KIND_FIELDS: [&str; 2] = ["kind", "type"];
const OBJECT1_FIELDS: [&str; 1] = ["object1"];
const OBJECT2_FIELDS: [&str; 1] = ["object2"];
const ACTION_FIELDS: [&str; 2] = ["action", "動作"];
const DIRECTION_FIELDS: [&str; 2] = ["direction", "方向"];
const DISTANCE_FIELDS: [&str; 2] = ["distance", "距離"];
const ANGLE_FIELDS: [&str; 2] = ["angle", "角度"];

const MODE_FIELDS: [&str; 3] = ["選擇的項目", "mode", "type"];

/// Furniture payloads must carry this kind.
pub const FURNITURE_KIND: &str = "furniture_control";

/// A payload whose shape could not be recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatError {
    message: String,
}

impl CommandFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized command payload: {}", self.message)
    }
}

impl std::error::Error for CommandFormatError {}

/// Administrative Gomoku commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    Resign,
    QuitApplication,
    Undo,
    ResetBoard,
    /// Structurally valid but not a verb we handle.
    Unrecognized(String),
}

impl AdminCommand {
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token {
            "投降" => return AdminCommand::Resign,
            "關閉遊戲" | "終止遊戲" => return AdminCommand::QuitApplication,
            "悔棋" => return AdminCommand::Undo,
            "重置棋盤" | "重新開始" => return AdminCommand::ResetBoard,
            _ => {}
        }
        match token.to_ascii_lowercase().as_str() {
            "resign" => AdminCommand::Resign,
            "quitapplication" | "quit" => AdminCommand::QuitApplication,
            "undo" => AdminCommand::Undo,
            "resetboard" | "reset" => AdminCommand::ResetBoard,
            _ => AdminCommand::Unrecognized(token.to_string()),
        }
    }
}

/// A decoded Gomoku payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GomokuRequest {
    Move { color: StoneColor, cell: CellKey },
    Command(AdminCommand),
}

/// A decoded furniture payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FurnitureRequest {
    Command(FurnitureCommand),
    /// Well-formed payload whose action verb is unknown.
    UnknownAction(String),
}

/// Which system the mode file selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Gomoku,
    Furniture,
}

impl Mode {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "五子棋" => Some(Mode::Gomoku),
            "家具控制" | "家具" => Some(Mode::Furniture),
            other => match other.to_ascii_lowercase().as_str() {
                "gomoku" => Some(Mode::Gomoku),
                "furniture" => Some(Mode::Furniture),
                _ => None,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Gomoku => "gomoku",
            Mode::Furniture => "furniture",
        }
    }
}

fn parse_object(payload: &str) -> Result<Map<String, Value>, CommandFormatError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| CommandFormatError::new(format!("invalid JSON: {err}")))?;
    match value {
        Value::Object(obj) => Ok(obj),
        _ => Err(CommandFormatError::new("payload must be a JSON object")),
    }
}

/// First non-empty string among `names`.
fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| obj.get(*name).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Decode a Gomoku payload: a move when both mover and cell are present,
/// otherwise an administrative command.
pub fn decode_gomoku(payload: &str) -> Result<GomokuRequest, CommandFormatError> {
    let obj = parse_object(payload)?;

    if let (Some(color), Some(cell)) = (field(&obj, &MOVER_FIELDS), field(&obj, &CELL_FIELDS)) {
        let color = StoneColor::parse(color)
            .ok_or_else(|| CommandFormatError::new(format!("unknown stone color '{color}'")))?;
        let cell = CellKey::parse(cell).map_err(|err| CommandFormatError::new(err.to_string()))?;
        return Ok(GomokuRequest::Move { color, cell });
    }

    if let Some(command) = field(&obj, &COMMAND_FIELDS) {
        return Ok(GomokuRequest::Command(AdminCommand::parse(command)));
    }

    Err(CommandFormatError::new(
        "expected a move (moverColor + targetCell) or a command",
    ))
}

/// Decode a furniture payload.
pub fn decode_furniture(payload: &str) -> Result<FurnitureRequest, CommandFormatError> {
    let obj = parse_object(payload)?;

    match field(&obj, &KIND_FIELDS) {
        Some(FURNITURE_KIND) => {}
        Some(kind) => {
            return Err(CommandFormatError::new(format!(
                "expected kind '{FURNITURE_KIND}', got '{kind}'"
            )))
        }
        None => {
            return Err(CommandFormatError::new(format!(
                "missing kind '{FURNITURE_KIND}'"
            )))
        }
    }

    let object1 = field(&obj, &OBJECT1_FIELDS)
        .ok_or_else(|| CommandFormatError::new("missing string field `object1`"))?;
    let verb = field(&obj, &ACTION_FIELDS)
        .ok_or_else(|| CommandFormatError::new("missing string field `action`"))?;
    let Ok(action) = Action::parse(verb) else {
        return Ok(FurnitureRequest::UnknownAction(verb.to_string()));
    };

    let direction = field(&obj, &DIRECTION_FIELDS).and_then(|token| {
        let direction = Direction::parse(token);
        if direction.is_none() {
            tracing::debug!(token, "unknown direction token; using the default");
        }
        direction
    });

    Ok(FurnitureRequest::Command(FurnitureCommand {
        action,
        object1: object1.to_string(),
        object2: field(&obj, &OBJECT2_FIELDS).map(ToString::to_string),
        direction,
        distance: field(&obj, &DISTANCE_FIELDS).map(ToString::to_string),
        angle: field(&obj, &ANGLE_FIELDS).map(ToString::to_string),
    }))
}

/// Decode the mode-selection payload.
pub fn decode_mode(payload: &str) -> Result<Mode, CommandFormatError> {
    let obj = parse_object(payload)?;
    let token = field(&obj, &MODE_FIELDS)
        .ok_or_else(|| CommandFormatError::new("missing mode selection"))?;
    Mode::parse(token).ok_or_else(|| CommandFormatError::new(format!("unknown mode '{token}'")))
}
