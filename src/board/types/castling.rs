//! Castling rights and the fixed squares each castle depends on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Corner the rook starts on for this castle
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::King) => Square::H1,
            (Color::White, CastleSide::Queen) => Square::A1,
            (Color::Black, CastleSide::King) => Square::H8,
            (Color::Black, CastleSide::Queen) => Square::A8,
        }
    }

    /// Castle whose rook starts on `sq`, if any
    #[must_use]
    pub fn from_rook_home(color: Color, sq: Square) -> Option<CastleSide> {
        CastleSide::BOTH
            .into_iter()
            .find(|side| side.rook_home(color) == sq)
    }

    /// Squares the enemy must not attack while castling
    #[must_use]
    pub(crate) const fn unattacked(self, color: Color) -> Bitboard {
        let white = match self {
            CastleSide::King => 0b0110_0000,
            CastleSide::Queen => 0b0000_1100,
        };
        Bitboard(relative(white, color))
    }

    /// Squares that must be empty between king and rook
    #[must_use]
    pub(crate) const fn unoccupied(self, color: Color) -> Bitboard {
        let white = match self {
            CastleSide::King => 0b0110_0000,
            CastleSide::Queen => 0b0000_1110,
        };
        Bitboard(relative(white, color))
    }
}

const fn relative(white_mask: u64, color: Color) -> u64 {
    match color {
        Color::White => white_mask,
        Color::Black => white_mask << 56,
    }
}

const KING_SIDE_BITS: u8 = 0xF0;
const QUEEN_SIDE_BITS: u8 = 0x0F;

/// One side's castling rights: a king-side nibble and a queen-side nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights(u8);

impl CastleRights {
    #[must_use]
    pub const fn none() -> Self {
        CastleRights(0)
    }

    #[must_use]
    pub const fn both() -> Self {
        CastleRights(KING_SIDE_BITS | QUEEN_SIDE_BITS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, side: CastleSide) -> bool {
        self.0 & Self::bits_for(side) != 0
    }

    #[inline]
    pub fn grant(&mut self, side: CastleSide) {
        self.0 |= Self::bits_for(side);
    }

    #[inline]
    pub fn revoke(&mut self, side: CastleSide) {
        self.0 &= !Self::bits_for(side);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw field
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bits_for(side: CastleSide) -> u8 {
        match side {
            CastleSide::King => KING_SIDE_BITS,
            CastleSide::Queen => QUEEN_SIDE_BITS,
        }
    }
}
