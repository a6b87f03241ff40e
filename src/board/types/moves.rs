//! Move value types and move outcomes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// An immutable source/destination pair.
///
/// A castle is written as the king moving onto its own rook, so `e1,h1` is
/// white's king-side castle and `e1,a1` the queen-side one. Build those with
/// [`Move::castle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// The castle for `color` toward `side`, in king-takes-own-rook form
    #[must_use]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        let king = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        Move::new(king, side.rook_home(color))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The same pair with source and destination swapped
    #[inline]
    #[must_use]
    pub const fn invert(self) -> Self {
        Move::new(self.to, self.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `"e2,e4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| MoveParseError::MissingSeparator {
                notation: s.to_string(),
            })?;
        let square = |part: &str| {
            part.trim()
                .parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: part.to_string(),
                })
        };
        Ok(Move::new(square(from)?, square(to)?))
    }
}

/// A committed move: who moved what, and what it took.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveRecord {
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub mv: Move,
}

/// Why a move was refused. A refused move never changes the position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// Empty source, blocked path, or outside the piece's movement pattern
    Illegal,
    /// Destination holds a piece of the mover's color
    CapturingOwn,
    /// The piece belongs to the side not on move
    WrongTurn { to_play: Color },
    /// The mover's king would be attacked afterwards
    RevealsCheck,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Illegal => write!(f, "Illegal move"),
            Rejection::CapturingOwn => write!(f, "Cannot capture a piece of the same color"),
            Rejection::WrongTurn { to_play } => write!(f, "It is {to_play}'s turn"),
            Rejection::RevealsCheck => write!(f, "Move would leave the king in check"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Result of asking a position to apply a move.
pub type MoveOutcome = Result<MoveRecord, Rejection>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let mv: Move = "e2,e4".parse().unwrap();
        assert_eq!(mv.from().to_string(), "e2");
        assert_eq!(mv.to().to_string(), "e4");
        assert_eq!(mv.to_string(), "e2,e4");
        assert_eq!(" g1 , f3 ".parse::<Move>().unwrap().to_string(), "g1,f3");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "e2e4".parse::<Move>(),
            Err(MoveParseError::MissingSeparator { .. })
        ));
        assert_eq!(
            "e2,z9".parse::<Move>(),
            Err(MoveParseError::InvalidSquare {
                notation: "z9".to_string()
            })
        );
    }

    #[test]
    fn test_castle_notation() {
        assert_eq!(Move::castle(Color::White, CastleSide::King).to_string(), "e1,h1");
        assert_eq!(Move::castle(Color::White, CastleSide::Queen).to_string(), "e1,a1");
        assert_eq!(Move::castle(Color::Black, CastleSide::King).to_string(), "e8,h8");
        assert_eq!(Move::castle(Color::Black, CastleSide::Queen).to_string(), "e8,a8");
    }

    #[test]
    fn test_invert() {
        let mv: Move = "b1,c3".parse().unwrap();
        assert_eq!(mv.invert().to_string(), "c3,b1");
        assert_eq!(mv.invert().invert(), mv);
    }

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::WrongTurn {
            to_play: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
        assert!(Rejection::RevealsCheck.to_string().contains("check"));
    }
}
