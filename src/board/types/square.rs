//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use crate::board::error::SquareError;

/// A square on the chess board as an index 0-63 (a1 = 0, b1 = 1, ..., h8 = 63).
///
/// `file = index % 8`, `rank = index / 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index_unchecked(idx: usize) -> Self {
        Square((idx & 63) as u8)
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index_unchecked)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    #[inline]
    #[must_use]
    pub const fn bit(self) -> Bitboard {
        Bitboard::from_square(self)
    }

    /// Square reached by adding a raw index offset, if it stays on the board.
    ///
    /// No wraparound check is made; callers compare files themselves.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i32) -> Option<Square> {
        let target = self.0 as i32 + delta;
        if target >= 0 && target < 64 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Absolute rank and file distances to another square
    #[inline]
    #[must_use]
    pub(crate) const fn distance(self, other: Square) -> (usize, usize) {
        (
            self.rank().abs_diff(other.rank()),
            self.file().abs_diff(other.file()),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank * 8 + file) as u8))
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };
        Ok(Square((rank * 8 + file) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_layout() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(Square::new(7, 7), Some(Square::H8));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn test_display_round_trip() {
        for sq in Square::all() {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "i1".parse::<Square>(),
            Err(SquareError::InvalidNotation { .. })
        ));
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Square::try_from((0, 4)), Ok(Square::E1));
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
        assert_eq!(
            Square::try_from(64usize),
            Err(SquareError::IndexOutOfBounds { index: 64 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::A1.offset(-1), None);
        assert_eq!(Square::H8.offset(1), None);
        assert_eq!(Square::E1.offset(8).map(Square::index), Some(12));
    }
}
