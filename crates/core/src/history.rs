//! Move history.
//!
//! The log is unbounded and is what undo pops from. The short view shown to
//! players is derived from it on demand, so trimming the display never drops
//! moves that undo still needs.

use crate::{CellKey, StoneColor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of entries shown by default.
pub const DEFAULT_DISPLAY_LEN: usize = 20;

/// One accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Mover.
    pub color: StoneColor,
    /// Cell played.
    pub cell: CellKey,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} played {}", self.color, self.cell)
    }
}

/// Ordered log of accepted moves, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move.
    pub fn append(&mut self, color: StoneColor, cell: CellKey) {
        self.moves.push(MoveRecord { color, cell });
    }

    /// Most recent move.
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.moves.last().copied()
    }

    /// Drop and return the most recent move.
    pub fn remove_last(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    /// Forget every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recent `limit` moves, oldest first.
    pub fn display_view(&self, limit: usize) -> &[MoveRecord] {
        let start = self.moves.len().saturating_sub(limit);
        &self.moves[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_view_is_capped_but_log_is_not() {
        let mut history = MoveHistory::new();
        for i in 0..25 {
            let color = if i % 2 == 0 {
                StoneColor::Black
            } else {
                StoneColor::White
            };
            history.append(color, CellKey::new(i + 1, 1));
        }

        let view = history.display_view(DEFAULT_DISPLAY_LEN);
        assert_eq!(view.len(), 20);
        assert_eq!(view[0].cell, CellKey::new(6, 1));
        assert_eq!(view[19].cell, CellKey::new(25, 1));
        assert_eq!(history.len(), 25);

        for _ in 0..25 {
            assert!(history.remove_last().is_some());
        }
        assert!(history.remove_last().is_none());
    }

    #[test]
    fn last_move_tracks_appends() {
        let mut history = MoveHistory::new();
        assert_eq!(history.last_move(), None);
        history.append(StoneColor::Black, CellKey::new(8, 8));
        assert_eq!(
            history.last_move(),
            Some(MoveRecord {
                color: StoneColor::Black,
                cell: CellKey::new(8, 8)
            })
        );
        assert_eq!(history.last_move().unwrap().to_string(), "Black played 8・8");
    }
}
