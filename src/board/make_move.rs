//! Applying moves.

use log::{debug, trace};

use super::error::MoveParseError;
use super::legality::{Approval, Checked};
use super::state::Position;
use super::types::{CastleSide, Color, Move, MoveOutcome, MoveRecord, Piece, Square};

impl Position {
    /// Apply `mv` for the side to move. A rejected move changes nothing.
    pub fn update(&mut self, mv: Move) -> MoveOutcome {
        self.apply(mv, false)
    }

    /// Parse `"e2,e4"` and apply it.
    pub fn update_notation(&mut self, notation: &str) -> Result<MoveOutcome, MoveParseError> {
        let mv: Move = notation.parse()?;
        Ok(self.update(mv))
    }

    /// Apply `mv` for whichever color stands on its source square, ignoring
    /// the turn and the piece's movement pattern.
    ///
    /// Empty sources, same-color captures, refused castles and moves that
    /// leave the mover in check are still rejected.
    pub fn force_update(&mut self, mv: Move) -> MoveOutcome {
        self.apply(mv, true)
    }

    /// Move a piece back along `mv`. Captured pieces, rights and clocks are
    /// not restored, and castles cannot be taken back this way.
    pub fn unmake(&mut self, mv: Move) -> MoveOutcome {
        self.force_update(mv.invert())
    }

    fn apply(&mut self, mv: Move, forced: bool) -> MoveOutcome {
        match self.check_move(mv, !forced, forced) {
            Ok(checked) => Ok(self.commit(mv, checked)),
            Err(rejection) => {
                trace!("rejected {mv}: {rejection}");
                Err(rejection)
            }
        }
    }

    fn commit(&mut self, mv: Move, checked: Checked) -> MoveRecord {
        let Checked {
            color,
            piece,
            approval,
        } = checked;
        let them = color.opponent();
        let (from, to) = (mv.from(), mv.to());

        let mut captured = None;
        self.info.halfmove_clock = self.info.halfmove_clock.saturating_add(1);

        if let Approval::Castle(side) = approval {
            self.castle(color, side);
            self.info.en_passant = None;
        } else {
            captured = self.side(them).piece_at(to);
            if piece == Piece::Pawn || captured.is_some() {
                self.info.halfmove_clock = 0;
            }

            if approval == Approval::EnPassant {
                if let Some(victim) = to.offset(-color.pawn_step()) {
                    captured = self.side_mut(them).clear(victim);
                }
            }
            self.info.en_passant = match approval {
                Approval::DoublePush => self.en_passant_target(color, mv),
                _ => None,
            };

            self.revoke_rights(color, piece, mv, captured);

            self.side_mut(them).clear(to);
            if captured == Some(Piece::Pawn) && to.rank() == them.pawn_start_rank() {
                self.side_mut(them).pawn_advance &= !(1 << to.file());
            }
            let own = self.side_mut(color);
            if approval == Approval::Promotion {
                own.clear(from);
                own.put(Piece::Queen, to);
            } else {
                own.relocate(piece, from, to);
            }
            if piece == Piece::Pawn {
                if from.rank() == color.pawn_start_rank() {
                    own.pawn_advance &= !(1 << from.file());
                }
                if to.rank() == color.pawn_start_rank() {
                    own.pawn_advance |= 1 << to.file();
                }
            }
        }

        if color == Color::Black {
            self.info.fullmove_number = self.info.fullmove_number.saturating_add(1);
        }
        self.info.turn = them;

        debug!(
            "{color} {piece} {mv} captured={captured:?} halfmove={} fullmove={}",
            self.info.halfmove_clock, self.info.fullmove_number
        );
        MoveRecord {
            color,
            piece,
            captured,
            mv,
        }
    }

    /// The skipped square, recorded only when an enemy pawn stands beside the
    /// destination and could take en passant.
    fn en_passant_target(&self, color: Color, mv: Move) -> Option<Square> {
        let neighbours = mv.to().bit().shift_east() | mv.to().bit().shift_west();
        let enemy_pawns = self.side(color.opponent()).pieces(Piece::Pawn);
        if (neighbours & enemy_pawns).is_empty() {
            None
        } else {
            mv.from().offset(color.pawn_step())
        }
    }

    fn revoke_rights(&mut self, color: Color, piece: Piece, mv: Move, captured: Option<Piece>) {
        match piece {
            Piece::King => self.side_mut(color).castle.clear(),
            Piece::Rook => {
                if let Some(side) = CastleSide::from_rook_home(color, mv.from()) {
                    self.side_mut(color).revoke_castle(side);
                }
            }
            _ => {}
        }
        if captured == Some(Piece::Rook) {
            let them = color.opponent();
            if let Some(side) = CastleSide::from_rook_home(them, mv.to()) {
                self.side_mut(them).revoke_castle(side);
            }
        }
    }
}
