//! Move legality: per-piece verifiers, attack masks and the self-check probe.
//!
//! Nothing here mutates the position. A verifier either rejects a move or
//! returns an [`Approval`] describing the special handling the commit step
//! has to perform.

use log::trace;

use super::attack_tables::{SlidingAttacks, ATTACKS};
use super::state::{CheckMethod, Position, Side};
use super::types::{Bitboard, CastleSide, Color, Move, Piece, Rejection, Square};

/// What kind of move a verifier accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Approval {
    Quiet,
    DoublePush,
    EnPassant,
    Promotion,
    Castle(CastleSide),
}

type Verdict = Result<Approval, Rejection>;

/// A move that passed every check, ready to commit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Checked {
    pub color: Color,
    pub piece: Piece,
    pub approval: Approval,
}

/// Union of every square `color` attacks or defends on `sides`.
pub(crate) fn attack_mask(sides: &[Side; 2], color: Color, resolver: &dyn SlidingAttacks) -> Bitboard {
    let blockers = sides[0].occupancy() | sides[1].occupancy();
    let side = &sides[color.index()];
    let mut mask = Bitboard::EMPTY;
    for piece in Piece::ALL {
        for sq in side.pieces(piece) {
            mask |= match piece {
                Piece::Pawn => ATTACKS.pawn_attacks(color, sq),
                Piece::Knight | Piece::King => ATTACKS.get_direct(piece, sq),
                Piece::Bishop | Piece::Rook | Piece::Queen => {
                    resolver.attacks(piece, sq, blockers)
                }
            };
        }
    }
    mask
}

/// Every king bit of `color` covered by an enemy attack. Also true when the
/// king bitboard is empty.
pub(crate) fn king_covered(sides: &[Side; 2], color: Color, resolver: &dyn SlidingAttacks) -> bool {
    let enemy = attack_mask(sides, color.opponent(), resolver);
    (sides[color.index()].king() & !enemy).is_empty()
}

impl Position {
    /// Squares `color` currently attacks, including squares of its own pieces
    #[must_use]
    pub fn attack_mask(&self, color: Color) -> Bitboard {
        attack_mask(&self.sides, color, self.resolver)
    }

    /// True when every square of `color`'s king is attacked by the enemy
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        king_covered(&self.sides, color, self.resolver)
    }

    /// Pure legality predicate.
    ///
    /// With `respect_turn` false the piece's own color is treated as on move.
    #[must_use]
    pub fn can_move(&self, from: Square, to: Square, respect_turn: bool) -> bool {
        self.check_move(Move::new(from, to), respect_turn, false).is_ok()
    }

    /// Run every check `update` runs. With `forced`, pattern rejections are
    /// waived and the move is treated as a plain relocation.
    pub(crate) fn check_move(&self, mv: Move, respect_turn: bool, forced: bool) -> Result<Checked, Rejection> {
        let (from, to) = (mv.from(), mv.to());
        let Some((color, piece)) = self.piece_at(from) else {
            return Err(Rejection::Illegal);
        };
        if respect_turn && color != self.info.turn {
            return Err(Rejection::WrongTurn {
                to_play: self.info.turn,
            });
        }
        if from == to {
            return Err(Rejection::Illegal);
        }

        let own = self.side(color);
        if own.occupancy().contains(to) {
            if piece == Piece::King && own.pieces(Piece::Rook).contains(to) {
                let approval = self.castle_approval(color, to)?;
                return Ok(Checked {
                    color,
                    piece,
                    approval,
                });
            }
            return Err(Rejection::CapturingOwn);
        }

        let approval = match self.verify(color, piece, from, to) {
            Ok(approval) => approval,
            Err(Rejection::Illegal) if forced => self.forced_approval(color, piece, to),
            Err(rejection) => return Err(rejection),
        };

        if self.reveals_check(color, piece, mv, approval) {
            return Err(Rejection::RevealsCheck);
        }
        Ok(Checked {
            color,
            piece,
            approval,
        })
    }

    fn castle_approval(&self, color: Color, rook: Square) -> Verdict {
        match CastleSide::from_rook_home(color, rook) {
            Some(side) if self.castle_allowed(color, side) => Ok(Approval::Castle(side)),
            _ => {
                trace!("{color} castle onto {rook} refused");
                Err(Rejection::Illegal)
            }
        }
    }

    fn forced_approval(&self, color: Color, piece: Piece, to: Square) -> Approval {
        if piece == Piece::Pawn && to.rank() == color.pawn_promotion_rank() {
            Approval::Promotion
        } else {
            Approval::Quiet
        }
    }

    fn verify(&self, color: Color, piece: Piece, from: Square, to: Square) -> Verdict {
        match piece {
            Piece::Pawn => self.verify_pawn(color, from, to),
            Piece::Knight => self.verify_knight(from, to),
            Piece::Bishop => self.verify_bishop(from, to),
            Piece::Rook => self.verify_rook(from, to),
            Piece::Queen => self
                .verify_bishop(from, to)
                .or_else(|_| self.verify_rook(from, to)),
            Piece::King => self.verify_king(color, from, to),
        }
    }

    fn verify_pawn(&self, color: Color, from: Square, to: Square) -> Verdict {
        let (dr, df) = from.distance(to);
        let forward = match color {
            Color::White => to.rank() > from.rank(),
            Color::Black => to.rank() < from.rank(),
        };
        if df > 1 || !forward {
            return Err(Rejection::Illegal);
        }
        let blockers = self.blockers();
        let enemy = self.side(color.opponent());
        let promote_or_quiet = || {
            if to.rank() == color.pawn_promotion_rank() {
                Approval::Promotion
            } else {
                Approval::Quiet
            }
        };

        match (dr, df) {
            (1, 0) if !blockers.contains(to) => Ok(promote_or_quiet()),
            (1, 1) if enemy.occupancy().contains(to) => Ok(promote_or_quiet()),
            (1, 1) if self.en_passant_capturable(color, to) => Ok(Approval::EnPassant),
            (2, 0) => {
                let own = self.side(color);
                let eligible = from.rank() == color.pawn_start_rank()
                    && own.pawn_advance & (1 << from.file()) != 0;
                let clear = from
                    .offset(color.pawn_step())
                    .is_some_and(|mid| !blockers.contains(mid))
                    && !blockers.contains(to);
                if eligible && clear {
                    Ok(Approval::DoublePush)
                } else {
                    Err(Rejection::Illegal)
                }
            }
            _ => Err(Rejection::Illegal),
        }
    }

    fn en_passant_capturable(&self, color: Color, to: Square) -> bool {
        if self.info.en_passant != Some(to) || to.rank() != color.en_passant_rank() {
            return false;
        }
        let enemy_pawns = self.side(color.opponent()).pieces(Piece::Pawn);
        to.offset(-color.pawn_step())
            .is_some_and(|victim| enemy_pawns.contains(victim))
    }

    fn verify_knight(&self, from: Square, to: Square) -> Verdict {
        let ok = match self.check_method {
            CheckMethod::Bits => ATTACKS.get_direct(Piece::Knight, from).contains(to),
            CheckMethod::Manual => matches!(from.distance(to), (1, 2) | (2, 1)),
        };
        if ok {
            Ok(Approval::Quiet)
        } else {
            Err(Rejection::Illegal)
        }
    }

    fn verify_bishop(&self, from: Square, to: Square) -> Verdict {
        let (dr, df) = from.distance(to);
        if dr != df || dr == 0 {
            return Err(Rejection::Illegal);
        }
        self.path_clear(from, to)
    }

    fn verify_rook(&self, from: Square, to: Square) -> Verdict {
        let (dr, df) = from.distance(to);
        if (dr == 0) == (df == 0) {
            return Err(Rejection::Illegal);
        }
        self.path_clear(from, to)
    }

    /// Scan the squares strictly between `from` and `to` on a line
    fn path_clear(&self, from: Square, to: Square) -> Verdict {
        let rank_step = (to.rank() as i32 - from.rank() as i32).signum();
        let file_step = (to.file() as i32 - from.file() as i32).signum();
        let step = rank_step * 8 + file_step;
        let blockers = self.blockers();

        let mut current = from;
        while let Some(next) = current.offset(step) {
            if next == to {
                return Ok(Approval::Quiet);
            }
            if blockers.contains(next) {
                return Err(Rejection::Illegal);
            }
            current = next;
        }
        Err(Rejection::Illegal)
    }

    fn verify_king(&self, color: Color, from: Square, to: Square) -> Verdict {
        let adjacent = match self.check_method {
            CheckMethod::Bits => ATTACKS.get_direct(Piece::King, from).contains(to),
            CheckMethod::Manual => {
                let (dr, df) = from.distance(to);
                dr.max(df) == 1
            }
        };
        if !adjacent {
            return Err(Rejection::Illegal);
        }
        if self.attack_mask(color.opponent()).contains(to) {
            return Err(Rejection::RevealsCheck);
        }
        Ok(Approval::Quiet)
    }

    /// Apply the move to a scratch copy of the sides and test the mover's king.
    fn reveals_check(&self, color: Color, piece: Piece, mv: Move, approval: Approval) -> bool {
        let mut sides = self.sides;
        let them = color.opponent();
        sides[them.index()].clear(mv.to());
        sides[color.index()].relocate(piece, mv.from(), mv.to());
        if approval == Approval::EnPassant {
            if let Some(victim) = mv.to().offset(-color.pawn_step()) {
                sides[them.index()].clear(victim);
            }
        }
        let exposed = king_covered(&sides, color, self.resolver);
        if exposed {
            trace!("{mv} would leave the {color} king in check");
        }
        exposed
    }
}
