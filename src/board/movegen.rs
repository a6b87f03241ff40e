//! Legal destination enumeration.

use super::attack_tables::ATTACKS;
use super::state::{CheckMethod, Position};
use super::types::{CastleSide, Color, Move, Piece, Square};

/// Pawn candidates as square offsets: the eight neighbours plus both double
/// steps. Pawn attacks depend on color, so they cannot come from the table.
const PAWN_OFFSETS: [i32; 10] = [1, 7, 8, 9, 16, -1, -7, -8, -9, -16];

/// Enumerates legal moves of a position by filtering candidates through
/// [`Position::can_move`].
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    position: &'a Position,
}

impl Position {
    #[must_use]
    pub fn generator(&self) -> MoveGenerator<'_> {
        MoveGenerator { position: self }
    }

    /// Count leaf positions `depth` plies below this one.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generator().all_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.fork();
                match child.update(mv) {
                    Ok(_) => child.perft(depth - 1),
                    Err(_) => 0,
                }
            })
            .sum()
    }
}

impl MoveGenerator<'_> {
    /// Legal destinations for the piece on `sq`, through the path the
    /// position's [`CheckMethod`] selects. The turn is not considered.
    #[must_use]
    pub fn valid_moves_for(&self, sq: Square) -> Vec<Square> {
        match self.position.check_method() {
            CheckMethod::Bits => self.bitboard_moves_for(sq),
            CheckMethod::Manual => self.exhaustive_moves_for(sq),
        }
    }

    /// Decode candidate squares from the attack table (or the pawn offsets)
    /// and keep the legal ones.
    #[must_use]
    pub fn bitboard_moves_for(&self, sq: Square) -> Vec<Square> {
        let Some((color, piece)) = self.position.piece_at(sq) else {
            return Vec::new();
        };
        let candidates: Vec<Square> = match piece {
            Piece::Pawn => PAWN_OFFSETS
                .iter()
                .filter_map(|&off| sq.offset(off))
                .collect(),
            Piece::King => {
                let mut squares: Vec<Square> = ATTACKS.get_direct(piece, sq).iter().collect();
                squares.extend(castle_candidates(color, sq));
                squares
            }
            _ => ATTACKS.get_direct(piece, sq).iter().collect(),
        };
        candidates
            .into_iter()
            .filter(|&to| self.position.can_move(sq, to, false))
            .collect()
    }

    /// Try every square on the board. Slow, but it makes no assumption
    /// about where a piece can go.
    #[must_use]
    pub fn exhaustive_moves_for(&self, sq: Square) -> Vec<Square> {
        if self.position.piece_at(sq).is_none() {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.position.can_move(sq, to, false))
            .collect()
    }

    /// Every legal move of `color`, whether or not it is on move.
    #[must_use]
    pub fn moves_for_color(&self, color: Color) -> Vec<Move> {
        self.position
            .side(color)
            .occupancy()
            .iter()
            .flat_map(|from| {
                self.valid_moves_for(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn all_valid_moves(&self) -> Vec<Move> {
        self.moves_for_color(self.position.turn())
    }
}

/// Rook corners a king on its home square may castle onto
fn castle_candidates(color: Color, king: Square) -> impl Iterator<Item = Square> {
    let home = Move::castle(color, CastleSide::King).from();
    CastleSide::BOTH
        .into_iter()
        .filter(move |_| king == home)
        .map(move |side| side.rook_home(color))
}
