//! Heuristic computer opponent.
//!
//! Candidate moves are empty cells within two steps of an existing stone.
//! Positions are scored from a small pattern table keyed on run length and
//! the number of blocked ends, and a two-ply minimax picks the reply.

use crate::win::{count_run, AXES};
use crate::{Board, CellKey, StoneColor, WIN_LENGTH};
use std::collections::BTreeSet;

/// Neighbourhood radius used to generate candidates.
const CANDIDATE_RADIUS: i32 = 2;

/// Weight applied to the opponent's patterns; favours blocking over building.
const DEFENSE_WEIGHT: f64 = 1.2;

/// Moves searched per ply.
const BRANCH_LIMIT: usize = 10;

/// Score for a run of `len` stones with `blocked` closed ends.
fn pattern_score(len: i32, blocked: u8) -> f64 {
    match (len.min(WIN_LENGTH), blocked) {
        (5, _) => 100_000.0,
        (4, 0) => 20_000.0,
        (4, 1) => 3_000.0,
        (3, 0) => 2_000.0,
        (3, 1) => 100.0,
        (2, 0) => 50.0,
        (2, 1) => 10.0,
        _ => 0.0,
    }
}

/// Whether the run end past `steps` stones along `(dx, dy)` is closed by the
/// board edge or an opposing stone.
fn end_blocked(board: &Board, size: i32, cell: CellKey, dx: i32, dy: i32, steps: i32) -> bool {
    let end = cell.offset(dx, dy, steps + 1);
    !end.within(size) || board.occupant(end).is_some()
}

/// Pattern value of the lines through `cell` for `color`.
fn evaluate_point(board: &Board, size: i32, cell: CellKey, color: StoneColor) -> f64 {
    AXES.iter()
        .map(|&(dx, dy)| {
            let forward = count_run(board, cell, dx, dy, color);
            let backward = count_run(board, cell, -dx, -dy, color);
            let blocked = u8::from(end_blocked(board, size, cell, dx, dy, forward))
                + u8::from(end_blocked(board, size, cell, -dx, -dy, backward));
            pattern_score(1 + forward + backward, blocked)
        })
        .sum()
}

/// Static evaluation from `me`'s point of view.
fn evaluate_board(board: &Board, size: i32, me: StoneColor) -> f64 {
    board
        .iter()
        .map(|(cell, color)| {
            let value = evaluate_point(board, size, cell, color);
            if color == me {
                value
            } else {
                -value * DEFENSE_WEIGHT
            }
        })
        .sum()
}

/// Empty cells near existing stones, or the centre on an empty board.
pub fn candidate_moves(board: &Board, size: i32) -> BTreeSet<CellKey> {
    let mut candidates = BTreeSet::new();
    for (cell, _) in board.iter() {
        for dx in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dy in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let near = CellKey::new(cell.col + dx, cell.row + dy);
                if near.within(size) && board.occupant(near).is_none() {
                    candidates.insert(near);
                }
            }
        }
    }
    if candidates.is_empty() && board.is_empty() {
        let center = (size + 1) / 2;
        candidates.insert(CellKey::new(center, center));
    }
    candidates
}

/// The most promising candidates, best first, capped at [`BRANCH_LIMIT`].
///
/// A cell ranks by the lines it would extend or cut for either color.
fn ranked_candidates(board: &Board, size: i32) -> Vec<CellKey> {
    let mut scored: Vec<(f64, CellKey)> = candidate_moves(board, size)
        .into_iter()
        .map(|cell| {
            let score = StoneColor::ALL
                .iter()
                .map(|&color| evaluate_point(board, size, cell, color))
                .sum::<f64>();
            (score, cell)
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.truncate(BRANCH_LIMIT);
    scored.into_iter().map(|(_, cell)| cell).collect()
}

/// Pick a move for `me`. Returns `None` when no empty cell is reachable.
pub fn suggest_move(board: &Board, size: i32, me: StoneColor) -> Option<CellKey> {
    let candidates = candidate_moves(board, size);
    let mut scratch = board.clone();

    // Take an immediate win, then block an immediate loss.
    for color in [me, me.opponent()] {
        for &cell in &candidates {
            if scratch.place(cell, color).is_ok() {
                let wins = crate::check_win(cell, color, &scratch);
                let _ = scratch.remove(cell);
                if wins {
                    return Some(cell);
                }
            }
        }
    }

    let mut best: Option<(f64, CellKey)> = None;
    for cell in ranked_candidates(board, size) {
        if scratch.place(cell, me).is_err() {
            continue;
        }
        let replies = ranked_candidates(&scratch, size);
        let mut worst = f64::INFINITY;
        for &reply in &replies {
            if scratch.place(reply, me.opponent()).is_ok() {
                worst = worst.min(evaluate_board(&scratch, size, me));
                let _ = scratch.remove(reply);
            }
        }
        if replies.is_empty() {
            worst = evaluate_board(&scratch, size, me);
        }
        let _ = scratch.remove(cell);

        if best.map_or(true, |(score, _)| worst > score) {
            best = Some((worst, cell));
        }
    }
    best.map(|(_, cell)| cell)
}
