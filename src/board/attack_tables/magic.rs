//! Magic-multiplication sliding attacks.
//!
//! For each square the relevant-occupancy mask (every ray minus its edge
//! square) selects the blockers that matter; multiplying by the square's magic
//! constant and keeping the top `popcount(mask)` bits hashes them straight to
//! a slot in one shared attack vector.

use std::fmt;

use log::debug;
use once_cell::sync::Lazy;

use super::magic_data::{BISHOP_MAGICS, ROOK_MAGICS};
use super::sliders::{RayScan, SlidingAttacks};
use super::{Direction, ATTACKS};
use crate::board::error::MagicError;
use crate::board::types::{Bitboard, Piece, Square};

#[derive(Clone, Copy, Debug)]
struct MagicEntry {
    mask: Bitboard,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl MagicEntry {
    const EMPTY: MagicEntry = MagicEntry {
        mask: Bitboard::EMPTY,
        magic: 0,
        shift: 64,
        offset: 0,
    };

    #[inline]
    fn slot(&self, blockers: Bitboard) -> usize {
        let relevant = (blockers & self.mask).0;
        self.offset + (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Rook and bishop lookups built from a pair of 64-entry constant tables.
pub struct MagicTable {
    rook: [MagicEntry; 64],
    bishop: [MagicEntry; 64],
    attacks: Vec<Bitboard>,
}

impl fmt::Debug for MagicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagicTable")
            .field("entries", &self.attacks.len())
            .finish_non_exhaustive()
    }
}

static MAGIC: Lazy<MagicTable> = Lazy::new(|| {
    MagicTable::new(&ROOK_MAGICS, &BISHOP_MAGICS).expect("shipped magic constants are collision-free")
});

/// Shared table built from the shipped constants.
#[must_use]
pub fn magic_table() -> &'static MagicTable {
    &MAGIC
}

impl MagicTable {
    /// Build a table from caller-supplied constants, indexed by square.
    ///
    /// Fails if any constant maps two blocker sets with different attacks to
    /// the same slot.
    pub fn new(rook_magics: &[u64; 64], bishop_magics: &[u64; 64]) -> Result<Self, MagicError> {
        let mut attacks = Vec::new();
        let rook = fill_entries(Piece::Rook, rook_magics, &mut attacks)?;
        let bishop = fill_entries(Piece::Bishop, bishop_magics, &mut attacks)?;
        debug!("built magic attack table with {} entries", attacks.len());
        Ok(MagicTable {
            rook,
            bishop,
            attacks,
        })
    }

    /// Total number of stored attack sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

impl SlidingAttacks for MagicTable {
    #[inline]
    fn rook_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard {
        self.attacks[self.rook[sq.index()].slot(blockers)]
    }

    #[inline]
    fn bishop_attacks(&self, sq: Square, blockers: Bitboard) -> Bitboard {
        self.attacks[self.bishop[sq.index()].slot(blockers)]
    }
}

/// Blockers on these squares can change a `piece`'s reach from `sq`: every
/// ray of the piece minus its edge square. Non-sliders use the rook rays.
#[must_use]
pub fn relevant_occupancy(piece: Piece, sq: Square) -> Bitboard {
    let dirs = match piece {
        Piece::Bishop => Direction::DIAGONAL,
        _ => Direction::STRAIGHT,
    };
    dirs.into_iter().fold(Bitboard::EMPTY, |mask, dir| {
        let ray = ATTACKS.ray(sq, dir);
        let edge = if dir.is_increasing() {
            ray.msb()
        } else {
            ray.lsb()
        };
        match edge {
            Some(edge) => mask | ray.without(edge),
            None => mask,
        }
    })
}

/// Every subset of `mask`, starting with the empty set (carry-rippler).
pub fn subsets(mask: Bitboard) -> impl Iterator<Item = Bitboard> {
    let mut next = Some(Bitboard::EMPTY);
    std::iter::from_fn(move || {
        let current = next?;
        let following = Bitboard(current.0.wrapping_sub(mask.0) & mask.0);
        next = if following.is_empty() {
            None
        } else {
            Some(following)
        };
        Some(current)
    })
}

fn fill_entries(
    piece: Piece,
    magics: &[u64; 64],
    attacks: &mut Vec<Bitboard>,
) -> Result<[MagicEntry; 64], MagicError> {
    let mut entries = [MagicEntry::EMPTY; 64];

    for sq in Square::all() {
        let mask = relevant_occupancy(piece, sq);
        let bits = mask.popcount();
        let entry = MagicEntry {
            mask,
            magic: magics[sq.index()],
            shift: 64 - bits,
            offset: attacks.len(),
        };

        let mut filled = vec![false; 1 << bits];
        attacks.resize(entry.offset + filled.len(), Bitboard::EMPTY);

        for blockers in subsets(mask) {
            let reach = RayScan.attacks(piece, sq, blockers);
            let slot = entry.slot(blockers);
            let seen = &mut filled[slot - entry.offset];
            if *seen && attacks[slot] != reach {
                return Err(MagicError::Collision { piece, square: sq });
            }
            *seen = true;
            attacks[slot] = reach;
        }
        entries[sq.index()] = entry;
    }
    Ok(entries)
}
