//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for position notation (FEN) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Notation must have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must list exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// A rank does not describe exactly eight files
    BadRankWidth { rank: usize, files: usize },
    /// Empty-square run outside 1..=8, or two runs written back to back
    InvalidSkip { rank: usize, skip: String },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { field: &'static str, found: String },
    /// The side that just moved is left in check
    OpponentInCheck { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files instead of 8")
            }
            FenError::InvalidSkip { rank, skip } => {
                write!(f, "Invalid empty-square run '{skip}' on rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
            FenError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for "e2,e4" move notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// No comma between the two squares
    MissingSeparator { notation: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::MissingSeparator { notation } => {
                write!(f, "Move '{notation}' must be written as 'from,to'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for magic table construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicError {
    /// Two blocker sets with different attacks hash to one slot
    Collision { piece: Piece, square: Square },
}

impl fmt::Display for MagicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagicError::Collision { piece, square } => {
                write!(f, "Magic number for {piece} on {square} collides")
            }
        }
    }
}

impl std::error::Error for MagicError {}

/// Corrupt position state found while exporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Both colors claim the square
    DualOccupancy { square: Square },
    /// Two piece kinds of one color claim the square
    OverlappingPieces { color: Color, square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::DualOccupancy { square } => {
                write!(f, "Both sides occupy {square}")
            }
            PositionError::OverlappingPieces { color, square } => {
                write!(f, "{color} has two pieces on {square}")
            }
        }
    }
}

impl std::error::Error for PositionError {}
