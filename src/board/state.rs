use super::attack_tables::{magic_table, SlidingAttacks};
use super::types::{Bitboard, CastleRights, CastleSide, Color, Piece, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One color's pieces and rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Side {
    color: Color,
    pieces: [Bitboard; 6],
    pub(crate) castle: CastleRights,
    /// One bit per file, set while that file's pawn may still double-push
    pub(crate) pawn_advance: u8,
}

impl Side {
    pub(crate) const fn empty(color: Color) -> Self {
        Side {
            color,
            pieces: [Bitboard::EMPTY; 6],
            castle: CastleRights::none(),
            pawn_advance: 0,
        }
    }

    fn starting(color: Color) -> Self {
        let mut side = Side::empty(color);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            if let Some(sq) = Square::new(color.back_rank(), file) {
                side.put(piece, sq);
            }
            if let Some(sq) = Square::new(color.pawn_start_rank(), file) {
                side.put(Piece::Pawn, sq);
            }
        }
        side.castle = CastleRights::both();
        side.pawn_advance = 0xFF;
        side
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn pieces(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    #[inline]
    #[must_use]
    pub const fn king(&self) -> Bitboard {
        self.pieces(Piece::King)
    }

    /// Every square this side occupies
    #[must_use]
    pub fn occupancy(&self) -> Bitboard {
        self.pieces.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    #[must_use]
    pub const fn castle_rights(&self) -> CastleRights {
        self.castle
    }

    #[inline]
    #[must_use]
    pub const fn pawn_advance(&self) -> u8 {
        self.pawn_advance
    }

    /// Piece kind this side has on `sq`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(piece).contains(sq))
    }

    #[inline]
    pub(crate) fn put(&mut self, piece: Piece, sq: Square) {
        let bb = &mut self.pieces[piece.index()];
        *bb = bb.with(sq);
    }

    /// Remove whatever this side has on `sq`, returning its kind
    pub(crate) fn clear(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let bb = &mut self.pieces[piece.index()];
        *bb = bb.without(sq);
        Some(piece)
    }

    pub(crate) fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        let bb = &mut self.pieces[piece.index()];
        *bb = bb.without(from).with(to);
    }

    pub(crate) fn revoke_castle(&mut self, side: CastleSide) {
        self.castle.revoke(side);
    }
}

/// Turn and clock state shared by both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameInfo {
    pub turn: Color,
    pub en_passant: Option<Square>,
    /// Half-moves since the last pawn move or capture
    pub halfmove_clock: u32,
    /// Starts at 1, incremented after each Black move
    pub fullmove_number: u32,
}

impl Default for GameInfo {
    fn default() -> Self {
        GameInfo {
            turn: Color::White,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

/// How the knight and king verifiers test a destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckMethod {
    /// Rank/file arithmetic
    #[default]
    Manual,
    /// Lookup in the precomputed attack table
    Bits,
}

/// Both sides plus the shared game info.
///
/// Cloning (see [`Position::fork`]) yields a fully independent copy.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) sides: [Side; 2],
    pub(crate) info: GameInfo,
    pub(crate) resolver: &'static dyn SlidingAttacks,
    pub(crate) check_method: CheckMethod,
}

impl Position {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        Position {
            sides: [Side::starting(Color::White), Side::starting(Color::Black)],
            ..Position::empty()
        }
    }

    pub(crate) fn empty() -> Self {
        Position {
            sides: [Side::empty(Color::White), Side::empty(Color::Black)],
            info: GameInfo::default(),
            resolver: magic_table(),
            check_method: CheckMethod::default(),
        }
    }

    /// Use a different sliding-attack backend.
    ///
    /// A table built at runtime with [`MagicTable::new`](super::MagicTable::new)
    /// can be passed after `Box::leak`.
    #[must_use]
    pub fn with_resolver(mut self, resolver: &'static dyn SlidingAttacks) -> Self {
        self.resolver = resolver;
        self
    }

    #[must_use]
    pub fn with_check_method(mut self, method: CheckMethod) -> Self {
        self.check_method = method;
        self
    }

    #[must_use]
    pub fn resolver(&self) -> &'static dyn SlidingAttacks {
        self.resolver
    }

    #[must_use]
    pub fn check_method(&self) -> CheckMethod {
        self.check_method
    }

    /// Independent copy for speculative play
    #[must_use]
    pub fn fork(&self) -> Position {
        self.clone()
    }

    #[inline]
    #[must_use]
    pub fn side(&self, color: Color) -> &Side {
        &self.sides[color.index()]
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, color: Color) -> &mut Side {
        &mut self.sides[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.info.turn
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.info.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.info.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.info.fullmove_number
    }

    /// Combined occupancy of both sides
    #[must_use]
    pub fn blockers(&self) -> Bitboard {
        self.sides[0].occupancy() | self.sides[1].occupancy()
    }

    /// The piece on `sq`, looking at the side to move first
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let us = self.info.turn;
        let them = us.opponent();
        self.side(us)
            .piece_at(sq)
            .map(|piece| (us, piece))
            .or_else(|| self.side(them).piece_at(sq).map(|piece| (them, piece)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl PartialEq for Position {
    /// Positions compare by pieces, rights and game info only.
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides && self.info == other.info
    }
}

impl Eq for Position {}
