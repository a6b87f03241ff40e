//! Search for collision-free magic multipliers and print them as Rust tables.
//!
//! usage: find_magics [seed]

use std::env;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use chess_rules::board::{
    ray_scan, relevant_occupancy, subsets, Bitboard, MagicTable, Piece, SlidingAttacks, Square,
};

const MAX_TRIES: usize = 100_000_000;

/// Sparse candidates hash far better than uniform ones.
fn sparse_random(rng: &mut StdRng) -> u64 {
    rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>()
}

/// Every subset of `mask` paired with the slider's reach for it.
fn reference_attacks(piece: Piece, sq: Square, mask: Bitboard) -> Vec<(u64, Bitboard)> {
    subsets(mask)
        .map(|blockers| (blockers.0, ray_scan().attacks(piece, sq, blockers)))
        .collect()
}

fn find_magic(piece: Piece, sq: Square, rng: &mut StdRng) -> Option<u64> {
    let mask = relevant_occupancy(piece, sq);
    let bits = mask.popcount();
    let pairs = reference_attacks(piece, sq, mask);
    let mut table: Vec<Option<Bitboard>> = vec![None; 1 << bits];

    'candidates: for _ in 0..MAX_TRIES {
        let magic = sparse_random(rng);
        // Too few high bits in the product rarely spreads indices well
        if (mask.0.wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }
        table.iter_mut().for_each(|slot| *slot = None);
        for &(blockers, reach) in &pairs {
            let index = (blockers.wrapping_mul(magic) >> (64 - bits)) as usize;
            match table[index] {
                None => table[index] = Some(reach),
                Some(existing) if existing == reach => {}
                Some(_) => continue 'candidates,
            }
        }
        return Some(magic);
    }
    None
}

fn print_table(name: &str, magics: &[u64; 64]) {
    println!("#[rustfmt::skip]");
    println!("pub const {name}: [u64; 64] = [");
    for row in magics.chunks(4) {
        let cells: Vec<String> = row.iter().map(|m| format!("0x{m:016x},")).collect();
        println!("    {}", cells.join(" "));
    }
    println!("];");
}

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x5eed_u64);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut rook = [0u64; 64];
    let mut bishop = [0u64; 64];
    for sq in Square::all() {
        for (piece, out) in [(Piece::Rook, &mut rook), (Piece::Bishop, &mut bishop)] {
            match find_magic(piece, sq, &mut rng) {
                Some(magic) => out[sq.index()] = magic,
                None => {
                    eprintln!("no {piece} magic found for {sq}");
                    std::process::exit(1);
                }
            }
        }
    }

    if let Err(err) = MagicTable::new(&rook, &bishop) {
        eprintln!("generated table failed verification: {err}");
        std::process::exit(1);
    }

    println!("// seed {seed}");
    print_table("ROOK_MAGICS", &rook);
    println!();
    print_table("BISHOP_MAGICS", &bishop);
}
