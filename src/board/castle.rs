//! Castling, written as the king moving onto its own rook.

use log::debug;

use super::state::Position;
use super::types::{CastleSide, Color, Piece, Square};

impl Position {
    /// Every precondition for `color` castling toward `side`. Shared by the
    /// legality probe and the commit path.
    #[must_use]
    pub fn castle_allowed(&self, color: Color, side: CastleSide) -> bool {
        let own = self.side(color);
        let king_home = king_home(color);
        if !own.castle_rights().has(side)
            || !own.king().contains(king_home)
            || !own.pieces(Piece::Rook).contains(side.rook_home(color))
        {
            return false;
        }
        if self.in_check(color) {
            return false;
        }
        let attacked = self.attack_mask(color.opponent());
        (side.unattacked(color) & attacked).is_empty()
            && (side.unoccupied(color) & self.blockers()).is_empty()
    }

    /// Move king and rook to their castled squares and drop both rights.
    /// Callers must have checked [`Position::castle_allowed`].
    pub(crate) fn castle(&mut self, color: Color, side: CastleSide) {
        let king_from = king_home(color);
        let rook_from = side.rook_home(color);
        let (king_to, rook_to) = match side {
            CastleSide::King => (king_from.offset(2), king_from.offset(1)),
            CastleSide::Queen => (king_from.offset(-2), king_from.offset(-1)),
        };
        let (Some(king_to), Some(rook_to)) = (king_to, rook_to) else {
            return;
        };
        let own = self.side_mut(color);
        own.relocate(Piece::King, king_from, king_to);
        own.relocate(Piece::Rook, rook_from, rook_to);
        own.castle.clear();
        debug!("{color} castled {side:?}: king {king_to}, rook {rook_to}");
    }
}

const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}
