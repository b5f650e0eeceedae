//! Zobrist keys. The position keeps its hash up to date on every make/unmake,
//! which makes the hash a cheap equality witness in reversibility tests.

use crate::castling::CastlingRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

const SEED: u64 = 0x7461_6269_615f_7a6b;

const PIECE_KEYS: usize = Piece::COUNT * 64;
const SIDE_KEY: usize = PIECE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EN_PASSANT_KEYS: usize = CASTLING_KEYS + 16;
const KEY_COUNT: usize = EN_PASSANT_KEYS + 8;

/// splitmix64 step: every key is a pure function of its slot.
const fn splitmix(n: u64) -> u64 {
    let mut z = SEED.wrapping_add(n.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

static KEYS: [u64; KEY_COUNT] = {
    let mut keys = [0u64; KEY_COUNT];
    let mut i = 0;
    while i < KEY_COUNT {
        keys[i] = splitmix(i as u64 + 1);
        i += 1;
    }
    keys
};

#[inline]
pub(crate) fn piece_key(piece: Piece, sq: Square) -> u64 {
    KEYS[piece.index() * 64 + sq.index()]
}

#[inline]
pub(crate) fn side_key() -> u64 {
    KEYS[SIDE_KEY]
}

#[inline]
pub(crate) fn castling_key(rights: CastlingRights) -> u64 {
    KEYS[CASTLING_KEYS + rights.bits() as usize]
}

#[inline]
pub(crate) fn en_passant_key(target: Square) -> u64 {
    KEYS[EN_PASSANT_KEYS + target.file() as usize]
}

/// Hash of `position` computed from its fields, ignoring the stored hash.
pub(crate) fn hash_from_scratch(position: &Position) -> u64 {
    let mut hash = Square::all()
        .filter_map(|sq| position.piece_on(sq).map(|piece| piece_key(piece, sq)))
        .fold(0, |acc, key| acc ^ key);
    if position.side_to_move() == Color::Black {
        hash ^= side_key();
    }
    hash ^= castling_key(position.castling());
    if let Some(target) = position.en_passant() {
        hash ^= en_passant_key(target);
    }
    hash
}
