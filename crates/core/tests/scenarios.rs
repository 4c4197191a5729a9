//! Scripted game scenarios.

use tabletalk_core::{
    display, CellKey, GameError, GameSession, SessionPhase, Status, StoneColor,
};

fn key(raw: &str) -> CellKey {
    CellKey::parse(raw).expect("valid cell key")
}

#[test]
fn black_wins_with_five_in_column_seven() {
    let moves = [
        (StoneColor::Black, "7・7"),
        (StoneColor::White, "7・8"),
        (StoneColor::Black, "8・7"),
        (StoneColor::White, "8・8"),
        (StoneColor::Black, "9・7"),
        (StoneColor::White, "9・8"),
        (StoneColor::Black, "10・7"),
        (StoneColor::White, "10・8"),
    ];

    let mut session = GameSession::default();
    for (color, cell) in moves {
        let status = session.submit_move(color, key(cell)).expect("legal move");
        assert!(matches!(status, Status::Moved { .. }), "{cell}: {status}");
    }

    let status = session
        .submit_move(StoneColor::Black, key("11・7"))
        .expect("winning move is legal");
    assert_eq!(status.to_string(), "Black played 11・7. Black wins!");
    assert_eq!(session.phase(), SessionPhase::Ended(Some(StoneColor::Black)));
    assert!(tabletalk_core::check_win(
        key("11・7"),
        StoneColor::Black,
        session.board()
    ));

    // Further moves wait for a reset.
    assert_eq!(
        session.submit_move(StoneColor::White, key("1・1")),
        Err(GameError::GameOver)
    );
}

#[test]
fn undo_on_fresh_session_changes_nothing() {
    let mut session = GameSession::default();
    assert_eq!(session.undo(), Err(GameError::NothingToUndo));
    assert_eq!(session.phase(), SessionPhase::AwaitingMove(StoneColor::Black));
    assert!(session.board().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn undoing_the_winning_move_reopens_the_game() {
    let mut session = GameSession::default();
    for col in 1..=4 {
        session.submit_move(StoneColor::Black, CellKey::new(col, 1)).unwrap();
        session.submit_move(StoneColor::White, CellKey::new(col, 2)).unwrap();
    }
    session.submit_move(StoneColor::Black, CellKey::new(5, 1)).unwrap();
    assert!(session.is_ended());

    session.undo().unwrap();
    assert_eq!(session.phase(), SessionPhase::AwaitingMove(StoneColor::Black));
    assert_eq!(session.history().len(), 8);
}

#[test]
fn speech_front_end_keys_land_on_canonical_cells() {
    let mut session = GameSession::default();
    session.submit_move(StoneColor::Black, key("三之三")).unwrap();
    assert_eq!(
        session.submit_move(StoneColor::White, key("3・3")),
        Err(GameError::CellOccupied(CellKey::new(3, 3)))
    );
    assert_eq!(display::render_history(&session, 20), "Black played 3・3");
}
