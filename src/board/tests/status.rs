//! Game-over detection and phase classification.

use super::{mv, play};
use crate::board::{Color, EndCondition, GamePhase, Position};

#[test]
fn test_start_position_is_early_game() {
    assert_eq!(
        Position::new().game_state(),
        (GamePhase::EarlyGame, EndCondition::InProgress)
    );
}

#[test]
fn test_phase_by_move_number_and_queens() {
    let middle =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 11");
    assert_eq!(middle.game_state(), (GamePhase::MiddleGame, EndCondition::InProgress));

    let end = Position::from_fen("r3k3/pp6/8/8/8/8/PP6/4K2R w - - 0 30");
    assert_eq!(end.game_state(), (GamePhase::EndGame, EndCondition::InProgress));

    // Ten moves in, still early even without queens
    let early = Position::from_fen("r3k3/pp6/8/8/8/8/PP6/4K2R w - - 0 10");
    assert_eq!(early.game_state().0, GamePhase::EarlyGame);
}

#[test]
fn test_fools_mate() {
    let mut position = Position::new();
    play(&mut position, &["f2,f3", "e7,e5", "g2,g4", "d8,h4"]);
    assert!(position.is_checkmate(Color::White));
    assert!(!position.is_stalemate(Color::White));
    assert!(!position.has_legal_moves(Color::White));
    assert_eq!(
        position.game_state(),
        (GamePhase::GameEnd, EndCondition::BlackWinCheckmate)
    );
}

#[test]
fn test_back_rank_mate() {
    let mut position = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    position.update(mv("a1,a8")).unwrap();
    assert!(position.is_checkmate(Color::Black));
    assert_eq!(
        position.game_state(),
        (GamePhase::GameEnd, EndCondition::WhiteWinCheckmate)
    );
}

#[test]
fn test_stalemate() {
    let position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!position.in_check(Color::Black));
    assert!(position.is_stalemate(Color::Black));
    assert!(!position.is_checkmate(Color::Black));
    assert!(position.generator().all_valid_moves().is_empty());
    assert_eq!(
        position.game_state(),
        (GamePhase::GameEnd, EndCondition::DrawStalemate)
    );
}

#[test]
fn test_fifty_move_rule() {
    let position = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 100 80");
    assert_eq!(
        position.game_state(),
        (GamePhase::GameEnd, EndCondition::Draw50Move)
    );

    let almost = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 99 80");
    assert_eq!(almost.game_state().1, EndCondition::InProgress);
}

#[test]
fn test_fifty_move_rule_by_play() {
    let mut position = Position::new();
    let shuffle = ["b1,c3", "b8,c6", "c3,b1", "c6,b8"];
    for ply in 1..=100 {
        position.update(mv(shuffle[(ply - 1) % 4])).unwrap();
        assert_eq!(position.halfmove_clock(), ply as u32);
        let expected = if ply < 100 {
            EndCondition::InProgress
        } else {
            EndCondition::Draw50Move
        };
        assert_eq!(position.game_state().1, expected, "after half-move {ply}");
    }
    assert_eq!(position.game_state().0, GamePhase::GameEnd);
}

#[test]
fn test_pawn_move_resets_fifty_move_count() {
    let mut position = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 99 60");
    position.update(mv("e2,e4")).unwrap();
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.game_state().1, EndCondition::InProgress);
}

#[test]
fn test_insufficient_material() {
    for fen in [
        "8/8/8/4k3/8/8/8/4K3 w - - 0 1",
        "8/8/8/4k3/8/8/8/2B1K3 w - - 0 1",
        "8/8/8/4k3/8/8/8/1N2K3 w - - 0 1",
        // Both bishops on dark squares
        "8/8/8/4k3/5b2/8/8/2B1K3 w - - 0 1",
    ] {
        assert_eq!(
            Position::from_fen(fen).game_state(),
            (GamePhase::GameEnd, EndCondition::DrawInsufficientMaterial),
            "{fen}"
        );
    }
}

#[test]
fn test_sufficient_material() {
    for fen in [
        // Bishops on opposite colors
        "8/8/8/4kb2/8/8/8/2B1K3 w - - 0 1",
        "8/8/8/4k3/8/8/8/1NB1K3 w - - 0 1",
        "8/8/8/4k3/8/8/4P3/4K3 w - - 0 1",
    ] {
        assert_eq!(
            Position::from_fen(fen).game_state().1,
            EndCondition::InProgress,
            "{fen}"
        );
    }
}

#[test]
fn test_missing_king_loses() {
    let position = Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
    assert!(position.is_checkmate(Color::Black));
    assert_eq!(
        position.game_state(),
        (GamePhase::GameEnd, EndCondition::WhiteWinCheckmate)
    );
}
