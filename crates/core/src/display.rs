//! Plain-text views of a session for terminals and logs.

use crate::{GameSession, SessionPhase};
use std::fmt::Write;

/// Render the board as a grid with 1-based column and row headers.
///
/// Empty cells are `.`, Black is `X`, White is `O`. Rows run top to bottom.
pub fn render_board(session: &GameSession) -> String {
    let size = session.board_size();
    let mut out = String::new();

    out.push_str("   ");
    for col in 1..=size {
        let _ = write!(out, "{col:>3}");
    }
    out.push('\n');

    for row in 1..=size {
        let _ = write!(out, "{row:>3}");
        for col in 1..=size {
            let symbol = session
                .board()
                .occupant(crate::CellKey::new(col, row))
                .map_or('.', |color| color.symbol());
            let _ = write!(out, "{symbol:>3}");
        }
        out.push('\n');
    }
    out
}

/// The last `limit` moves, one per line, oldest first.
pub fn render_history(session: &GameSession, limit: usize) -> String {
    session
        .history()
        .display_view(limit)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of whose turn it is or how the game ended.
pub fn render_turn(session: &GameSession) -> String {
    match session.phase() {
        SessionPhase::AwaitingMove(color) => format!("{color} to move"),
        SessionPhase::Ended(Some(winner)) => format!("{winner} won"),
        SessionPhase::Ended(None) => "game closed".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellKey, StoneColor};

    #[test]
    fn renders_stones_at_their_cells() {
        let mut session = GameSession::new(5);
        session.submit_move(StoneColor::Black, CellKey::new(1, 1)).unwrap();
        session.submit_move(StoneColor::White, CellKey::new(5, 2)).unwrap();

        let text = render_board(&session);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     1  2  3  4  5");
        assert_eq!(lines[1], "  1  X  .  .  .  .");
        assert_eq!(lines[2], "  2  .  .  .  .  O");
    }

    #[test]
    fn history_and_turn_lines() {
        let mut session = GameSession::default();
        assert_eq!(render_history(&session, 20), "");
        session.submit_move(StoneColor::Black, CellKey::new(2, 3)).unwrap();
        assert_eq!(render_history(&session, 20), "Black played 2・3");
        assert_eq!(render_turn(&session), "White to move");
        session.resign().unwrap();
        assert_eq!(render_turn(&session), "Black won");
    }
}
