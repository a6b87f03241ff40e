//! Attack tables for move generation and legality.
//!
//! [`AttackTable`] holds the occupancy-independent data: leaper attacks,
//! unblocked slider attacks and the eight directional rays per square. The
//! blocker-aware slider lookups live behind the [`SlidingAttacks`] trait with
//! two interchangeable backends, [`RayScan`] and [`MagicTable`].

mod magic;
mod magic_data;
mod sliders;

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Piece, Square};

pub use magic::{magic_table, relevant_occupancy, subsets, MagicTable};
pub use magic_data::{BISHOP_MAGICS, ROOK_MAGICS};
pub use sliders::{ray_scan, RayScan, SlidingAttacks};

/// One of the eight compass directions a slider moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub const STRAIGHT: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Square-index step for one move in this direction
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::NorthEast => 9,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::SouthWest => -9,
        }
    }

    /// True when walking this way raises the square index, so the nearest
    /// square on a ray is its lowest set bit
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        self.offset() > 0
    }

    const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::NorthWest => 5,
            Direction::SouthEast => 6,
            Direction::SouthWest => 7,
        }
    }
}

const KNIGHT_OFFSETS: [i32; 8] = [6, 10, 15, 17, -6, -10, -15, -17];
const KING_OFFSETS: [i32; 8] = [1, 7, 8, 9, -1, -7, -8, -9];

const NO_ATTACKS: [Bitboard; 64] = [Bitboard::EMPTY; 64];

/// Per-square attack bitboards that do not depend on occupancy.
#[derive(Debug)]
pub struct AttackTable {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    bishop: [Bitboard; 64],
    rook: [Bitboard; 64],
    queen: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    rays: [[Bitboard; 64]; 8],
}

/// The process-wide table, built on first use.
pub static ATTACKS: Lazy<AttackTable> = Lazy::new(AttackTable::build);

impl AttackTable {
    fn build() -> Self {
        let mut table = AttackTable {
            knight: NO_ATTACKS,
            king: NO_ATTACKS,
            bishop: NO_ATTACKS,
            rook: NO_ATTACKS,
            queen: NO_ATTACKS,
            pawn: [NO_ATTACKS; 2],
            rays: [NO_ATTACKS; 8],
        };

        for sq in Square::all() {
            let i = sq.index();
            table.knight[i] = leaper_attacks(sq, &KNIGHT_OFFSETS, |dr, df| {
                matches!((dr, df), (1, 2) | (2, 1))
            });
            table.king[i] = leaper_attacks(sq, &KING_OFFSETS, |dr, df| dr.max(df) == 1);
            table.pawn[Color::White.index()][i] =
                leaper_attacks(sq, &[7, 9], |dr, df| dr == 1 && df == 1);
            table.pawn[Color::Black.index()][i] =
                leaper_attacks(sq, &[-7, -9], |dr, df| dr == 1 && df == 1);

            for dir in Direction::ALL {
                table.rays[dir.index()][i] = walk_ray(sq, dir);
            }
            table.rook[i] = Direction::STRAIGHT
                .iter()
                .fold(Bitboard::EMPTY, |acc, &d| acc | table.rays[d.index()][i]);
            table.bishop[i] = Direction::DIAGONAL
                .iter()
                .fold(Bitboard::EMPTY, |acc, &d| acc | table.rays[d.index()][i]);
            table.queen[i] = table.rook[i] | table.bishop[i];
        }
        table
    }

    /// The whole per-square table for a piece kind. Pawns get an empty table;
    /// their attacks depend on color, see [`AttackTable::pawn_attacks`].
    #[must_use]
    pub fn get(&self, piece: Piece) -> &[Bitboard; 64] {
        match piece {
            Piece::Pawn => &NO_ATTACKS,
            Piece::Knight => &self.knight,
            Piece::Bishop => &self.bishop,
            Piece::Rook => &self.rook,
            Piece::Queen => &self.queen,
            Piece::King => &self.king,
        }
    }

    /// Direct lookup of a single entry; empty for pawns.
    #[inline]
    #[must_use]
    pub fn get_direct(&self, piece: Piece, sq: Square) -> Bitboard {
        match piece {
            Piece::Pawn => Bitboard::EMPTY,
            Piece::Knight => self.knight[sq.index()],
            Piece::Bishop => self.bishop[sq.index()],
            Piece::Rook => self.rook[sq.index()],
            Piece::Queen => self.queen[sq.index()],
            Piece::King => self.king[sq.index()],
        }
    }

    /// Squares strictly beyond `sq` up to the board edge in `dir`.
    #[inline]
    #[must_use]
    pub fn ray(&self, sq: Square, dir: Direction) -> Bitboard {
        self.rays[dir.index()][sq.index()]
    }

    /// Diagonal capture squares of a `color` pawn standing on `sq`.
    #[inline]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index()]
    }
}

/// Tries every offset and keeps the targets whose rank/file distance passes
/// `keep`, which drops anything that wrapped around a board edge.
fn leaper_attacks(sq: Square, offsets: &[i32], keep: impl Fn(usize, usize) -> bool) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&off| sq.offset(off))
        .filter(|&target| {
            let (dr, df) = sq.distance(target);
            keep(dr, df)
        })
        .collect()
}

fn walk_ray(sq: Square, dir: Direction) -> Bitboard {
    let mut ray = Bitboard::EMPTY;
    let mut current = sq;
    while let Some(next) = current.offset(dir.offset()) {
        // A file jump of more than one means the step wrapped to the other edge
        if current.file().abs_diff(next.file()) > 1 {
            break;
        }
        ray = ray.with(next);
        current = next;
    }
    ray
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
    fn test_knight_corner_does_not_wrap() {
        assert_eq!(ATTACKS.get_direct(Piece::Knight, sq("a1")), squares(&["b3", "c2"]));
        assert_eq!(
            ATTACKS.get_direct(Piece::Knight, sq("h4")),
            squares(&["g2", "f3", "f5", "g6"])
        );
        assert_eq!(ATTACKS.get_direct(Piece::Knight, sq("d4")).popcount(), 8);
    }

    #[test]
    fn test_king_edge_does_not_wrap() {
        assert_eq!(
            ATTACKS.get_direct(Piece::King, sq("h1")),
            squares(&["g1", "g2", "h2"])
        );
        assert_eq!(ATTACKS.get_direct(Piece::King, sq("e4")).popcount(), 8);
    }

    #[test]
    fn test_no_leaper_target_is_a_discontinuity() {
        for s in Square::all() {
            for piece in [Piece::Knight, Piece::King] {
                for target in ATTACKS.get_direct(piece, s) {
                    let (dr, df) = s.distance(target);
                    assert!(dr <= 2 && df <= 2, "{piece} {s} -> {target}");
                }
            }
        }
    }

    #[test]
    fn test_rays() {
        assert_eq!(
            ATTACKS.ray(sq("e4"), Direction::North),
            squares(&["e5", "e6", "e7", "e8"])
        );
        assert_eq!(ATTACKS.ray(sq("h3"), Direction::East), Bitboard::EMPTY);
        assert_eq!(ATTACKS.ray(sq("a3"), Direction::West), Bitboard::EMPTY);
        assert_eq!(
            ATTACKS.ray(sq("c1"), Direction::NorthWest),
            squares(&["b2", "a3"])
        );
        assert_eq!(
            ATTACKS.ray(sq("f2"), Direction::SouthEast),
            squares(&["g1"])
        );
    }

    #[test]
    fn test_unblocked_slider_counts() {
        assert_eq!(ATTACKS.get_direct(Piece::Rook, sq("a1")).popcount(), 14);
        assert_eq!(ATTACKS.get_direct(Piece::Bishop, sq("d4")).popcount(), 13);
        assert_eq!(ATTACKS.get_direct(Piece::Queen, sq("d4")).popcount(), 27);
        assert_eq!(ATTACKS.get(Piece::Queen)[0], ATTACKS.get_direct(Piece::Queen, sq("a1")));
    }

    #[test]
    fn test_pawns_have_no_static_table() {
        assert!(ATTACKS.get(Piece::Pawn).iter().all(|bb| bb.is_empty()));
        assert_eq!(ATTACKS.get_direct(Piece::Pawn, sq("e4")), Bitboard::EMPTY);
    }

    #[test]
    fn test_pawn_attacks() {
        assert_eq!(
            ATTACKS.pawn_attacks(Color::White, sq("e4")),
            squares(&["d5", "f5"])
        );
        assert_eq!(ATTACKS.pawn_attacks(Color::White, sq("a2")), squares(&["b3"]));
        assert_eq!(ATTACKS.pawn_attacks(Color::Black, sq("h7")), squares(&["g6"]));
        assert_eq!(ATTACKS.pawn_attacks(Color::White, sq("c8")), Bitboard::EMPTY);
    }
}
