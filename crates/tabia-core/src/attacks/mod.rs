//! Attack generation for every piece type.
//!
//! Leapers read straight from precomputed tables. Sliders walk a precomputed
//! open-board ray per direction and cut it at the nearest blocker, which stays
//! in the result (it may be an enemy piece to capture).

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, RAYS};

/// Squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a pawn of `color` on `sq` attacks.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// The ray from `sq` in `dir`, stopped at (and including) the first occupied square.
#[inline]
fn ray_attacks(sq: Square, dir: Direction, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir.index()][sq.index()];
    let blocker = if dir.is_positive() {
        (ray & occupied).lsb()
    } else {
        (ray & occupied).msb()
    };
    match blocker {
        Some(b) => ray ^ RAYS[dir.index()][b.index()],
        None => ray,
    }
}

/// Rook attacks from `sq` given `occupied`.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Direction::ORTHOGONAL
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | ray_attacks(sq, dir, occupied))
}

/// Bishop attacks from `sq` given `occupied`.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    Direction::DIAGONAL
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | ray_attacks(sq, dir, occupied))
}

/// Queen attacks from `sq` given `occupied`.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Attacks of any non-pawn piece kind. Occupancy is ignored for leapers.
///
/// # Panics
///
/// Panics when called with [`PieceKind::Pawn`]; pawn attacks depend on color,
/// use [`pawn_attacks`].
#[inline]
pub fn piece_attacks(kind: PieceKind, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
        PieceKind::Pawn => panic!("pawn attacks depend on color"),
    }
}
