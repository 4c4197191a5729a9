//! Board occupancy store.
//!
//! The board is the single source of truth for which cells hold stones. It
//! does not know about turns or bounds; [`crate::GameSession`] layers those
//! rules on top.

use crate::{CellKey, GameError, StoneColor};
use std::collections::BTreeMap;

/// Mapping from cell to occupant. Absence means the cell is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    stones: BTreeMap<CellKey, StoneColor>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color occupying `cell`, if any.
    pub fn occupant(&self, cell: CellKey) -> Option<StoneColor> {
        self.stones.get(&cell).copied()
    }

    /// Put a stone on an empty cell.
    pub fn place(&mut self, cell: CellKey, color: StoneColor) -> Result<(), GameError> {
        if self.stones.contains_key(&cell) {
            return Err(GameError::CellOccupied(cell));
        }
        self.stones.insert(cell, color);
        Ok(())
    }

    /// Take the stone off `cell`, returning its color.
    pub fn remove(&mut self, cell: CellKey) -> Result<StoneColor, GameError> {
        self.stones.remove(&cell).ok_or(GameError::CellEmpty(cell))
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.stones.clear();
    }

    /// Number of stones on the board.
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// True when no stones are placed.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Iterate stones in `(col, row)` order.
    pub fn iter(&self) -> impl Iterator<Item = (CellKey, StoneColor)> + '_ {
        self.stones.iter().map(|(cell, color)| (*cell, *color))
    }
}
