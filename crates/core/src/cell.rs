//! Board coordinates.
//!
//! A [`CellKey`] is a 1-based `(column, row)` pair serialized as `col・row`.
//! Input parsing is lenient about the separator and numerals so that keys
//! produced by the speech front-end (`三之三`, `7之12`) resolve to the same
//! cell as the canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical separator between column and row.
pub const CELL_SEPARATOR: char = '・';

/// Separators accepted on input in addition to [`CELL_SEPARATOR`].
const ALT_SEPARATORS: [char; 2] = ['之', '-'];

/// Error returned when parsing an invalid [`CellKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellKeyError {
    message: String,
}

impl CellKeyError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CellKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CellKeyError {}

/// A board coordinate. Both components are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// Column, starting at 1.
    pub col: i32,
    /// Row, starting at 1.
    pub row: i32,
}

impl CellKey {
    /// Construct a key without validation.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Parse a key such as `7・7`, `7之7` or `七之七`.
    pub fn parse(input: &str) -> Result<Self, CellKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CellKeyError::new("cell key cannot be empty"));
        }

        let mut parts = input.split(|c: char| c == CELL_SEPARATOR || ALT_SEPARATORS.contains(&c));
        let (Some(col), Some(row), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CellKeyError::new(format!(
                "cell key must look like 'col{CELL_SEPARATOR}row' (got '{input}')"
            )));
        };

        let col = parse_coordinate(col)
            .ok_or_else(|| CellKeyError::new(format!("invalid column in cell key '{input}'")))?;
        let row = parse_coordinate(row)
            .ok_or_else(|| CellKeyError::new(format!("invalid row in cell key '{input}'")))?;
        Ok(Self { col, row })
    }

    /// Step `steps` times along `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Self {
        Self {
            col: self.col + dx * steps,
            row: self.row + dy * steps,
        }
    }

    /// Whether the key lies on a `size`×`size` board.
    pub fn within(self, size: i32) -> bool {
        (1..=size).contains(&self.col) && (1..=size).contains(&self.row)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.col, CELL_SEPARATOR, self.row)
    }
}

impl FromStr for CellKey {
    type Err = CellKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_coordinate(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let value = match raw.parse::<i32>() {
        Ok(value) => value,
        Err(_) => chinese_numeral(raw)?,
    };
    (value > 0).then_some(value)
}

/// Chinese numerals up to 99. `山` is a common speech-recognition slip for `三`.
fn chinese_numeral(raw: &str) -> Option<i32> {
    fn digit(c: char) -> Option<i32> {
        Some(match c {
            '一' => 1,
            '二' | '兩' => 2,
            '三' | '山' => 3,
            '四' => 4,
            '五' => 5,
            '六' => 6,
            '七' => 7,
            '八' => 8,
            '九' => 9,
            _ => return None,
        })
    }

    let chars: Vec<char> = raw.chars().collect();
    match chars.as_slice() {
        [c] if *c == '十' => Some(10),
        [c] => digit(*c),
        ['十', ones] => Some(10 + digit(*ones)?),
        [tens, '十'] => Some(digit(*tens)? * 10),
        [tens, '十', ones] => Some(digit(*tens)? * 10 + digit(*ones)?),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        let key = CellKey::parse("7・12").unwrap();
        assert_eq!(key, CellKey::new(7, 12));
        assert_eq!(key.to_string(), "7・12");
    }

    #[test]
    fn accepts_alternate_separators_and_numerals() {
        assert_eq!(CellKey::parse("3之3").unwrap(), CellKey::new(3, 3));
        assert_eq!(CellKey::parse("三之十五").unwrap(), CellKey::new(3, 15));
        assert_eq!(CellKey::parse("十一之山").unwrap(), CellKey::new(11, 3));
        assert_eq!(CellKey::parse(" 4-5 ").unwrap(), CellKey::new(4, 5));
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in ["", "7", "7・", "・7", "0・3", "-1・2", "a・b", "1・2・3", "7,7"] {
            assert!(CellKey::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(CellKey::new(1, 1).within(15));
        assert!(CellKey::new(15, 15).within(15));
        assert!(!CellKey::new(16, 1).within(15));
        assert!(!CellKey::new(0, 1).within(15));
    }
}
