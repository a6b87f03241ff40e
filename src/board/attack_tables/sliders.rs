//! Blocker-aware sliding attacks.

use std::fmt;

use super::{Direction, ATTACKS};
use crate::board::types::{Bitboard, Piece, Square};

/// Resolves the squares a slider actually reaches given the combined
/// occupancy of both sides. The first blocker in each direction is included,
/// since it may be a capture.
///
/// Implementations must agree bit-for-bit with [`RayScan`].
pub trait SlidingAttacks: fmt::Debug + Send + Sync {
    fn rook_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard;

    fn bishop_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard;

    fn queen_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard {
        self.rook_attacks(sq, blockers) | self.bishop_attacks(sq, blockers)
    }

    /// Dispatch on piece kind; non-sliders resolve to an empty set.
    fn attacks(&self, piece: Piece, sq: Square, blockers: Bitboard) -> Bitboard {
        match piece {
            Piece::Bishop => self.bishop_attacks(sq, blockers),
            Piece::Rook => self.rook_attacks(sq, blockers),
            Piece::Queen => self.queen_attacks(sq, blockers),
            Piece::Pawn | Piece::Knight | Piece::King => Bitboard::EMPTY,
        }
    }
}

/// Classical resolver: scan each ray to its nearest blocker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayScan;

static RAY_SCAN: RayScan = RayScan;

/// Shared classical resolver.
#[must_use]
pub fn ray_scan() -> &'static RayScan {
    &RAY_SCAN
}

impl RayScan {
    /// Attacks along one ray, stopping at (and including) the first blocker.
    #[inline]
    #[must_use]
    pub fn ray_attacks(sq: Square, dir: Direction, blockers: Bitboard) -> Bitboard {
        let ray = ATTACKS.ray(sq, dir);
        let hits = ray & blockers;
        let nearest = if dir.is_increasing() {
            hits.lsb()
        } else {
            hits.msb()
        };
        match nearest {
            Some(blocker) => ray ^ ATTACKS.ray(blocker, dir),
            None => ray,
        }
    }

    fn along(sq: Square, dirs: [Direction; 4], blockers: Bitboard) -> Bitboard {
        dirs.into_iter()
            .fold(Bitboard::EMPTY, |acc, dir| acc | Self::ray_attacks(sq, dir, blockers))
    }
}

impl SlidingAttacks for RayScan {
    fn rook_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard {
        Self::along(sq, Direction::STRAIGHT, blockers)
    }

    fn bishop_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard {
        Self::along(sq, Direction::DIAGONAL, blockers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn squares(list: &[&str]) -> Bitboard {
        list.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn test_rook_stops_at_first_blocker_each_way() {
        let blockers = squares(&["b4", "g4", "e6", "e1"]);
        let attacks = RayScan.rook_attacks(sq("e4"), blockers);
        assert_eq!(
            attacks,
            squares(&["e1", "e2", "e3", "e5", "e6", "b4", "c4", "d4", "f4", "g4"])
        );
    }

    #[test]
    fn test_bishop_on_empty_board_matches_table() {
        for s in Square::all() {
            assert_eq!(
                RayScan.bishop_attacks(s, Bitboard::EMPTY),
                ATTACKS.get_direct(Piece::Bishop, s)
            );
        }
    }

    #[test]
    fn test_decreasing_rays_use_highest_blocker() {
        let blockers = squares(&["b2", "c3"]);
        assert_eq!(
            RayScan::ray_attacks(sq("e5"), Direction::SouthWest, blockers),
            squares(&["d4", "c3"])
        );
    }

    #[test]
    fn test_non_sliders_resolve_empty() {
        assert!(RayScan
            .attacks(Piece::Knight, sq("d4"), Bitboard::EMPTY)
            .is_empty());
        assert_eq!(
            RayScan.attacks(Piece::Queen, sq("d4"), Bitboard::EMPTY),
            ATTACKS.get_direct(Piece::Queen, sq("d4"))
        );
    }
}
