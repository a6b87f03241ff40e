use std::str::FromStr;

use log::{debug, error};

use super::error::{FenError, PositionError};
use super::legality::king_covered;
use super::state::Position;
use super::types::{Bitboard, CastleSide, Color, Piece, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. A position where the side that just
    /// moved is still in check is refused.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            let mut after_skip = false;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if after_skip || !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidSkip {
                            rank: rank + 1,
                            skip: c.to_string(),
                        });
                    }
                    file += skip as usize;
                    after_skip = true;
                    continue;
                }
                after_skip = false;
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                position.side_mut(color).put(piece, sq);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        position.info.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::King),
                    'Q' => (Color::White, CastleSide::Queen),
                    'k' => (Color::Black, CastleSide::King),
                    'q' => (Color::Black, CastleSide::Queen),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                position.side_mut(color).castle.grant(side);
            }
        }

        position.info.en_passant = match parts[3] {
            "-" => None,
            text => Some(text.parse().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        position.info.halfmove_clock = parse_counter(parts[4], "half-move clock")?;
        position.info.fullmove_number = parse_counter(parts[5], "full-move number")?;

        for color in Color::BOTH {
            let pawns = position.side(color).pieces(Piece::Pawn);
            let side = position.side_mut(color);
            for sq in pawns {
                if sq.rank() == color.pawn_start_rank() {
                    side.pawn_advance |= 1 << sq.file();
                }
            }
        }

        let waiting = position.info.turn.opponent();
        if !position.side(waiting).king().is_empty()
            && king_covered(&position.sides, waiting, position.resolver)
        {
            return Err(FenError::OpponentInCheck { color: waiting });
        }

        debug!("loaded position {fen}");
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation, refusing corrupt state.
    pub fn try_to_fen(&self) -> Result<String, PositionError> {
        self.validate_occupancy()?;

        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(rank, file).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.info.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.side(color).castle_rights().has(side) {
                    let letter = match side {
                        CastleSide::King => 'k',
                        CastleSide::Queen => 'q',
                    };
                    castling.push(match color {
                        Color::White => letter.to_ascii_uppercase(),
                        Color::Black => letter,
                    });
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .info
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        Ok(format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.info.halfmove_clock,
            self.info.fullmove_number
        ))
    }

    /// Convert the position to FEN notation.
    ///
    /// # Panics
    /// Panics if two pieces share a square, which only a corrupted position
    /// can produce. Use `try_to_fen` to handle that case.
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.try_to_fen().expect("Corrupt position")
    }

    fn validate_occupancy(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let side = self.side(color);
            let mut seen = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let bb = side.pieces(piece);
                if let Some(square) = (seen & bb).lsb() {
                    error!("{color} has two pieces on {square}");
                    return Err(PositionError::OverlappingPieces { color, square });
                }
                seen |= bb;
            }
        }
        let shared = self.side(Color::White).occupancy() & self.side(Color::Black).occupancy();
        if let Some(square) = shared.lsb() {
            error!("both sides occupy {square}");
            return Err(PositionError::DualOccupancy { square });
        }
        Ok(())
    }
}

fn parse_counter(text: &str, field: &'static str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
