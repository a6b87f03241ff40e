//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - board square as an index 0-63
//! - `Bitboard` - 64-bit set of squares
//! - `Move`, `MoveRecord`, `Rejection` - moves and their outcomes
//! - `CastleRights`, `CastleSide` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleRights, CastleSide};
pub use moves::{Move, MoveOutcome, MoveRecord, Rejection};
pub use piece::{Color, Piece};
pub use square::Square;
