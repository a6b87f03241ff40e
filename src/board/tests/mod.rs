//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN parsing, serialization and corrupt-state detection
//! - `make_move.rs` - Applying, refusing and forcing moves
//! - `castling.rs` - King-onto-rook castling and rights bookkeeping
//! - `legality.rs` - Verifiers, attack masks and the self-check probe
//! - `status.rs` - Checkmate, stalemate, draws and game phase
//! - `movegen.rs` - Destination enumeration
//! - `perft.rs` - Node counts for move generation correctness
//! - `resolvers.rs` - Magic and ray-scan sliding attacks agree
//! - `proptest.rs` - Property-based tests

mod fen;
mod status;

use crate::board::{Move, Position, Square};

pub(super) const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub(super) const KIWIPETE: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Apply a sequence of moves that must all be accepted.
pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        position
            .update_notation(notation)
            .unwrap()
            .unwrap_or_else(|r| panic!("{notation} refused: {r}"));
    }
}
