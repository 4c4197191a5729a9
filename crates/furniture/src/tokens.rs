//! Spoken-command vocabulary: action verbs, directions, distances, angles.
//!
//! Each token type accepts the English spelling (case-insensitive, with `-`,
//! `_` and spaces interchangeable) and the Chinese phrase the speech
//! front-end produces.

use crate::FurnitureError;

/// Distance used when no token is given or a token is not recognised.
pub const DEFAULT_DISTANCE: f32 = 1.0;

/// Rotation in degrees used when the angle token carries no number.
pub const DEFAULT_ANGLE_DEGREES: f32 = 10.0;

fn normalize(token: &str) -> String {
    token
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// What to do with the named object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Delete the object from the scene.
    Remove,
    /// (Re)create the object from the catalog.
    Place,
    /// Shift the object along a direction.
    Move,
    /// Turn the object toward another, or by an angle.
    Rotate,
}

impl Action {
    /// Decode an action verb.
    pub fn parse(token: &str) -> Result<Self, FurnitureError> {
        let action = match token.trim() {
            "不想要" | "移除" | "拿掉" => Action::Remove,
            "放置" | "放入" => Action::Place,
            "移動" => Action::Move,
            "旋轉" | "轉向" => Action::Rotate,
            _ => match normalize(token).as_str() {
                "remove" | "delete" => Action::Remove,
                "place" | "put" => Action::Place,
                "move" => Action::Move,
                "rotate" | "turn" => Action::Rotate,
                _ => return Err(FurnitureError::UnknownAction(token.trim().to_string())),
            },
        };
        Ok(action)
    }
}

/// A corner of the floor, seen from above with +Z as "upper".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// -X, +Z.
    UpperLeft,
    /// +X, +Z.
    UpperRight,
    /// -X, -Z.
    LowerLeft,
    /// +X, -Z.
    LowerRight,
}

impl Corner {
    /// Signs of the corner along X and Z.
    pub fn signs(self) -> (f32, f32) {
        match self {
            Corner::UpperLeft => (-1.0, 1.0),
            Corner::UpperRight => (1.0, 1.0),
            Corner::LowerLeft => (-1.0, -1.0),
            Corner::LowerRight => (1.0, -1.0),
        }
    }
}

/// Where to put or move something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Camera-relative left.
    Left,
    /// Camera-relative right.
    Right,
    /// Camera-relative forward.
    Front,
    /// Camera-relative backward.
    Back,
    /// World up.
    Up,
    /// World down.
    Down,
    /// Next to; resolves like `Right`.
    Beside,
    /// Toward the floor centre.
    Center,
    /// A floor corner.
    Corner(Corner),
}

impl Direction {
    /// Decode a direction token. Returns `None` for unknown tokens.
    pub fn parse(token: &str) -> Option<Self> {
        let direction = match token.trim() {
            "左" => Direction::Left,
            "右" => Direction::Right,
            "前" => Direction::Front,
            "後" => Direction::Back,
            "上" => Direction::Up,
            "下" => Direction::Down,
            "旁邊" => Direction::Beside,
            "中間" => Direction::Center,
            "左上角" => Direction::Corner(Corner::UpperLeft),
            "右上角" => Direction::Corner(Corner::UpperRight),
            "左下角" => Direction::Corner(Corner::LowerLeft),
            "右下角" => Direction::Corner(Corner::LowerRight),
            _ => match normalize(token).as_str() {
                "left" => Direction::Left,
                "right" => Direction::Right,
                "front" | "forward" => Direction::Front,
                "back" | "behind" | "backward" => Direction::Back,
                "up" | "above" => Direction::Up,
                "down" | "below" => Direction::Down,
                "beside" | "next-to" => Direction::Beside,
                "center" | "centre" | "middle" => Direction::Center,
                "corner-upper-left" | "upper-left-corner" | "upper-left" => {
                    Direction::Corner(Corner::UpperLeft)
                }
                "corner-upper-right" | "upper-right-corner" | "upper-right" => {
                    Direction::Corner(Corner::UpperRight)
                }
                "corner-lower-left" | "lower-left-corner" | "lower-left" => {
                    Direction::Corner(Corner::LowerLeft)
                }
                "corner-lower-right" | "lower-right-corner" | "lower-right" => {
                    Direction::Corner(Corner::LowerRight)
                }
                _ => return None,
            },
        };
        Some(direction)
    }

    /// True for the four corner directions.
    pub fn is_corner(self) -> bool {
        matches!(self, Direction::Corner(_))
    }
}

/// Distance in world units for a qualitative distance token.
pub fn distance_units(token: &str) -> f32 {
    match token.trim() {
        "一些" => return 10.0,
        "一點" => return 1.0,
        "一點點" => return 0.1,
        _ => {}
    }
    match normalize(token).as_str() {
        "some" => 10.0,
        "a-bit" => 1.0,
        "a-little-bit" => 0.1,
        _ => DEFAULT_DISTANCE,
    }
}

/// Rotation angle in degrees. Every non-digit character is discarded, so
/// `"45度"` and `"45 degrees"` both yield 45.
pub fn parse_angle(token: Option<&str>) -> f32 {
    let digits: String = token
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(DEFAULT_ANGLE_DEGREES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_accept_both_vocabularies() {
        assert_eq!(Action::parse("拿掉"), Ok(Action::Remove));
        assert_eq!(Action::parse("Place"), Ok(Action::Place));
        assert_eq!(Action::parse("移動"), Ok(Action::Move));
        assert_eq!(Action::parse(" turn "), Ok(Action::Rotate));
        assert_eq!(
            Action::parse("paint"),
            Err(FurnitureError::UnknownAction("paint".to_string()))
        );
    }

    #[test]
    fn directions_cover_corners() {
        assert_eq!(
            Direction::parse("corner-upper-left"),
            Some(Direction::Corner(Corner::UpperLeft))
        );
        assert_eq!(
            Direction::parse("Lower Right"),
            Some(Direction::Corner(Corner::LowerRight))
        );
        assert_eq!(Direction::parse("中間"), Some(Direction::Center));
        assert_eq!(Direction::parse("旁邊"), Some(Direction::Beside));
        assert_eq!(Direction::parse("sideways"), None);
        assert!(Direction::parse("左下角").unwrap().is_corner());
        assert!(!Direction::Left.is_corner());
    }

    #[test]
    fn distance_buckets() {
        assert_eq!(distance_units("some"), 10.0);
        assert_eq!(distance_units("a bit"), 1.0);
        assert_eq!(distance_units("a little bit"), 0.1);
        assert_eq!(distance_units("一點點"), 0.1);
        assert_eq!(distance_units("miles"), DEFAULT_DISTANCE);
    }

    #[test]
    fn angles_strip_non_digits() {
        assert_eq!(parse_angle(Some("45度")), 45.0);
        assert_eq!(parse_angle(Some("turn 90 degrees")), 90.0);
        assert_eq!(parse_angle(Some("a lot")), DEFAULT_ANGLE_DEGREES);
        assert_eq!(parse_angle(None), DEFAULT_ANGLE_DEGREES);
    }
}
