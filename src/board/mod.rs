//! Chess position representation and rules.
//!
//! A [`Position`] owns both sides' bitboards plus the shared turn and clock
//! record. Moves are checked by per-piece verifiers and a self-check probe
//! before anything is mutated; a refused move comes back as a [`Rejection`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Rejection};
//!
//! let mut position = Position::new();
//! position.update_notation("e2,e4").unwrap().unwrap();
//! assert_eq!(
//!     position.update_notation("e4,e5").unwrap(),
//!     Err(Rejection::WrongTurn { to_play: chess_rules::board::Color::Black })
//! );
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
//! );
//! ```

mod attack_tables;
mod castle;
mod debug;
mod error;
mod fen;
mod legality;
mod make_move;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{
    magic_table, ray_scan, relevant_occupancy, subsets, AttackTable, Direction, MagicTable, RayScan,
    SlidingAttacks, ATTACKS, BISHOP_MAGICS, ROOK_MAGICS,
};
pub use debug::BoardView;
pub use error::{FenError, MagicError, MoveParseError, PositionError, SquareError};
pub use movegen::MoveGenerator;
pub use state::{CheckMethod, GameInfo, Position, Side};
pub use status::{EndCondition, GamePhase};
pub use types::{
    Bitboard, BitboardIter, CastleRights, CastleSide, Color, Move, MoveOutcome, MoveRecord, Piece,
    Rejection, Square,
};
