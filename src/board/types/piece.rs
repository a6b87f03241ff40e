//! Piece kinds and colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six piece kinds. The set is closed, so every match over it is
/// exhaustive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Notation letters in `Piece::ALL` order
const LETTERS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];

impl Piece {
    /// Index order; a side stores one bitboard per entry
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Piece for a notation letter of either case
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .position(|&letter| letter == lower)
            .map(|i| Piece::ALL[i])
    }

    /// Lowercase notation letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        LETTERS[self.index()]
    }

    /// Notation letter, uppercase for White
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.to_char().to_ascii_uppercase(),
            Color::Black => self.to_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Piece::Pawn => "pawn",
            Piece::Knight => "knight",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::King => "king",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// White first, matching the side storage order
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Board rank of the `n`th rank counted from this color's side
    #[inline]
    const fn relative_rank(self, n: usize) -> usize {
        match self {
            Color::White => n,
            Color::Black => 7 - n,
        }
    }

    #[inline]
    pub(crate) const fn back_rank(self) -> usize {
        self.relative_rank(0)
    }

    #[inline]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        self.relative_rank(1)
    }

    /// Where this color's capturing pawn lands on an en-passant target
    #[inline]
    pub(crate) const fn en_passant_rank(self) -> usize {
        self.relative_rank(5)
    }

    #[inline]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        self.relative_rank(7)
    }

    /// Square-index offset of one pawn step forward
    #[inline]
    pub(crate) const fn pawn_step(self) -> i32 {
        match self {
            Color::White => 8,
            Color::Black => -8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
