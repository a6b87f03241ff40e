//! FEN parsing and serialization tests.

use super::{sq, KIWIPETE, START_FEN};
use crate::board::{Color, FenError, Piece, Position, PositionError};

#[test]
fn test_start_position_round_trips() {
    let position = Position::from_fen(START_FEN);
    assert_eq!(position, Position::new());
    assert_eq!(position.to_fen(), START_FEN);
    assert_eq!(Position::new().to_fen(), START_FEN);
}

#[test]
fn test_round_trip_keeps_every_field() {
    for fen in [
        KIWIPETE,
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 17 42",
    ] {
        assert_eq!(Position::from_fen(fen).to_fen(), fen);
    }
}

#[test]
fn test_game_info_fields() {
    let position =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 7 3");
    assert_eq!(position.turn(), Color::White);
    assert_eq!(position.en_passant(), Some(sq("f6")));
    assert_eq!(position.halfmove_clock(), 7);
    assert_eq!(position.fullmove_number(), 3);
    assert_eq!(position.piece_at(sq("e5")), Some((Color::White, Piece::Pawn)));
    assert_eq!(position.piece_at(sq("f5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(position.piece_at(sq("e4")), None);
}

#[test]
fn test_from_str() {
    let position: Position = START_FEN.parse().unwrap();
    assert_eq!(position, Position::new());
}

#[test]
fn test_pawn_advance_from_placement() {
    assert_eq!(Position::new().side(Color::White).pawn_advance(), 0xFF);
    let position = Position::from_fen("4k3/7p/8/8/8/4P3/P7/4K3 w - - 0 1");
    assert_eq!(position.side(Color::White).pawn_advance(), 0b0000_0001);
    assert_eq!(position.side(Color::Black).pawn_advance(), 0b1000_0000);
}

#[test]
fn test_castle_rights_from_fen() {
    let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
    let white = position.side(Color::White).castle_rights();
    let black = position.side(Color::Black).castle_rights();
    assert!(white.has(crate::board::CastleSide::King));
    assert!(!white.has(crate::board::CastleSide::Queen));
    assert!(!black.has(crate::board::CastleSide::King));
    assert!(black.has(crate::board::CastleSide::Queen));
}

#[test]
fn test_kingless_placement_is_accepted() {
    let position = Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 1");
    assert!(position.blockers().is_empty());
    assert_eq!(position.to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
}

#[test]
fn test_structural_errors() {
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq"),
        Err(FenError::WrongFieldCount { found: 3 })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::WrongRankCount { found: 7 })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::InvalidPiece { char: 'x' })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::BadRankWidth { rank: 7, files: 9 })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/7/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::BadRankWidth { rank: 3, files: 7 })
    );
    assert_eq!(
        Position::try_from_fen("4k3/8/8/8/8/8/8/04K2R w - - 0 1"),
        Err(FenError::InvalidSkip {
            rank: 1,
            skip: "0".to_string()
        })
    );
    assert_eq!(
        Position::try_from_fen("4k3/8/8/8/44/8/8/4K2R w - - 0 1"),
        Err(FenError::InvalidSkip {
            rank: 4,
            skip: "4".to_string()
        })
    );
    assert_eq!(
        Position::try_from_fen("4k3/8/8/8/9/8/8/4K2R w - - 0 1"),
        Err(FenError::InvalidSkip {
            rank: 4,
            skip: "9".to_string()
        })
    );
}

#[test]
fn test_field_errors() {
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
        Err(FenError::InvalidSideToMove {
            found: "x".to_string()
        })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX - 0 1"),
        Err(FenError::InvalidCastling { char: 'X' })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
        Err(FenError::InvalidEnPassant {
            found: "z9".to_string()
        })
    );
    assert_eq!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - a 1"),
        Err(FenError::InvalidCounter {
            field: "half-move clock",
            found: "a".to_string()
        })
    );
    assert!(matches!(
        Position::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1"),
        Err(FenError::InvalidCounter {
            field: "full-move number",
            ..
        })
    ));
}

#[test]
fn test_side_that_just_moved_cannot_be_in_check() {
    assert_eq!(
        Position::try_from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1"),
        Err(FenError::OpponentInCheck {
            color: Color::Black
        })
    );
    // The side to move may be in check
    assert!(Position::try_from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").is_ok());
}

#[test]
#[should_panic(expected = "Invalid FEN string")]
fn test_from_fen_panics_on_garbage() {
    let _ = Position::from_fen("not a position");
}

#[test]
fn test_export_refuses_dual_occupancy() {
    let mut position = Position::new();
    position.side_mut(Color::White).put(Piece::Knight, sq("e4"));
    position.side_mut(Color::Black).put(Piece::Queen, sq("e4"));
    assert_eq!(
        position.try_to_fen(),
        Err(PositionError::DualOccupancy { square: sq("e4") })
    );
}

#[test]
fn test_export_refuses_overlapping_pieces() {
    let mut position = Position::new();
    position.side_mut(Color::White).put(Piece::Queen, sq("a1"));
    assert_eq!(
        position.try_to_fen(),
        Err(PositionError::OverlappingPieces {
            color: Color::White,
            square: sq("a1")
        })
    );
}
