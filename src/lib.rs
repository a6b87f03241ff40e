pub mod board;

pub use board::{Color, Move, MoveOutcome, Piece, Position, Rejection, Square};
