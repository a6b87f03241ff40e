//! Game-over detection and phase classification.

use log::warn;

use super::state::Position;
use super::types::{Bitboard, Color, Piece};

/// Rough stage of the game; `GameEnd` once an end condition is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    EarlyGame,
    MiddleGame,
    EndGame,
    GameEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndCondition {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// The half-move clock reached 100
    Draw50Move,
    DrawInsufficientMaterial,
    InProgress,
}

impl EndCondition {
    const fn win_for(color: Color) -> Self {
        match color {
            Color::White => EndCondition::WhiteWinCheckmate,
            Color::Black => EndCondition::BlackWinCheckmate,
        }
    }
}

impl Position {
    /// Classify the position. Repetition is not tracked.
    #[must_use]
    pub fn game_state(&self) -> (GamePhase, EndCondition) {
        if self.info.halfmove_clock >= 100 {
            return (GamePhase::GameEnd, EndCondition::Draw50Move);
        }
        for color in Color::BOTH {
            if self.side(color).king().is_empty() {
                warn!("{color} has no king");
                return (GamePhase::GameEnd, EndCondition::win_for(color.opponent()));
            }
        }

        let to_move = self.info.turn;
        if !self.has_legal_moves(to_move) {
            let end = if self.in_check(to_move) {
                EndCondition::win_for(to_move.opponent())
            } else {
                EndCondition::DrawStalemate
            };
            return (GamePhase::GameEnd, end);
        }
        if self.is_insufficient_material() {
            return (GamePhase::GameEnd, EndCondition::DrawInsufficientMaterial);
        }

        let phase = if self.info.fullmove_number <= 10 {
            GamePhase::EarlyGame
        } else if self.pieces_of_both(Piece::Queen).is_empty() {
            GamePhase::EndGame
        } else {
            GamePhase::MiddleGame
        };
        (phase, EndCondition::InProgress)
    }

    /// King gone, or no legal move while in check
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.side(color).king().is_empty()
            || (!self.has_legal_moves(color) && self.in_check(color))
    }

    /// No legal move and not in check
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.has_legal_moves(color) && !self.in_check(color)
    }

    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        let generator = self.generator();
        self.side(color)
            .occupancy()
            .iter()
            .any(|sq| !generator.valid_moves_for(sq).is_empty())
    }

    fn pieces_of_both(&self, piece: Piece) -> Bitboard {
        self.side(Color::White).pieces(piece) | self.side(Color::Black).pieces(piece)
    }

    /// Bare kings, a single minor piece, or bishops that all share a square color
    fn is_insufficient_material(&self) -> bool {
        let heavy = self.pieces_of_both(Piece::Pawn)
            | self.pieces_of_both(Piece::Rook)
            | self.pieces_of_both(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = self.pieces_of_both(Piece::Knight);
        let bishops = self.pieces_of_both(Piece::Bishop);
        match (knights.popcount(), bishops.popcount()) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (0, _) => bishops_all_same_color(bishops),
            _ => false,
        }
    }
}

fn bishops_all_same_color(bishops: Bitboard) -> bool {
    (bishops & Bitboard::LIGHT_SQUARES).is_empty() || (bishops & Bitboard::DARK_SQUARES).is_empty()
}
