//! Five-in-a-row detection.

use crate::{Board, CellKey, StoneColor};

/// Stones in a row needed to win. Longer runs also win.
pub const WIN_LENGTH: i32 = 5;

/// Axis directions; each is scanned together with its negation.
pub const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Whether the stone just played at `cell` completes a line of
/// [`WIN_LENGTH`] for `color`.
///
/// Only lines through `cell` are examined, at most four steps each way.
pub fn check_win(cell: CellKey, color: StoneColor, board: &Board) -> bool {
    if board.occupant(cell) != Some(color) {
        return false;
    }
    AXES.iter().any(|&(dx, dy)| {
        let run = 1 + count_run(board, cell, dx, dy, color) + count_run(board, cell, -dx, -dy, color);
        run >= WIN_LENGTH
    })
}

/// Contiguous `color` stones from `cell` (exclusive) along `(dx, dy)`.
pub(crate) fn count_run(board: &Board, cell: CellKey, dx: i32, dy: i32, color: StoneColor) -> i32 {
    (1..WIN_LENGTH)
        .take_while(|&step| board.occupant(cell.offset(dx, dy, step)) == Some(color))
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(i32, i32)], color: StoneColor) -> Board {
        let mut board = Board::new();
        for &(col, row) in stones {
            board.place(CellKey::new(col, row), color).unwrap();
        }
        board
    }

    #[test]
    fn detects_all_four_axes() {
        let lines: [[(i32, i32); 5]; 4] = [
            [(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)],
            [(5, 3), (5, 4), (5, 5), (5, 6), (5, 7)],
            [(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)],
            [(3, 7), (4, 6), (5, 5), (6, 4), (7, 3)],
        ];
        for line in lines {
            let board = board_with(&line, StoneColor::White);
            for &(col, row) in &line {
                let cell = CellKey::new(col, row);
                assert!(check_win(cell, StoneColor::White, &board), "{line:?} from {cell}");
                assert!(!check_win(cell, StoneColor::Black, &board));
            }
        }
    }

    #[test]
    fn four_is_not_enough() {
        let board = board_with(&[(1, 1), (2, 1), (3, 1), (4, 1)], StoneColor::Black);
        assert!(!check_win(CellKey::new(4, 1), StoneColor::Black, &board));
    }

    #[test]
    fn gap_breaks_the_run() {
        let board = board_with(&[(1, 1), (2, 1), (4, 1), (5, 1), (6, 1)], StoneColor::Black);
        assert!(!check_win(CellKey::new(4, 1), StoneColor::Black, &board));
    }

    #[test]
    fn overlines_count() {
        let board = board_with(
            &[(1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2)],
            StoneColor::Black,
        );
        assert!(check_win(CellKey::new(3, 2), StoneColor::Black, &board));
    }

    #[test]
    fn opponent_stone_blocks() {
        let mut board = board_with(&[(1, 1), (2, 1), (4, 1), (5, 1)], StoneColor::Black);
        board.place(CellKey::new(3, 1), StoneColor::White).unwrap();
        assert!(!check_win(CellKey::new(3, 1), StoneColor::White, &board));
        assert!(!check_win(CellKey::new(2, 1), StoneColor::Black, &board));
    }
}
