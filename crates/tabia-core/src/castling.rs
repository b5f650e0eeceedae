//! Castling: the four individual rights, their board geometry, and the 4-bit set a
//! position carries.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// One of the four castling moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingRight {
    WhiteKingSide = 0,
    WhiteQueenSide = 1,
    BlackKingSide = 2,
    BlackQueenSide = 3,
}

impl CastlingRight {
    pub const ALL: [CastlingRight; 4] = [
        CastlingRight::WhiteKingSide,
        CastlingRight::WhiteQueenSide,
        CastlingRight::BlackKingSide,
        CastlingRight::BlackQueenSide,
    ];

    /// King-side right first, then queen-side.
    #[inline]
    pub const fn for_color(color: Color) -> [CastlingRight; 2] {
        match color {
            Color::White => [CastlingRight::WhiteKingSide, CastlingRight::WhiteQueenSide],
            Color::Black => [CastlingRight::BlackKingSide, CastlingRight::BlackQueenSide],
        }
    }

    #[inline]
    pub const fn from_parts(color: Color, king_side: bool) -> CastlingRight {
        match (color, king_side) {
            (Color::White, true) => CastlingRight::WhiteKingSide,
            (Color::White, false) => CastlingRight::WhiteQueenSide,
            (Color::Black, true) => CastlingRight::BlackKingSide,
            (Color::Black, false) => CastlingRight::BlackQueenSide,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingSide | CastlingRight::WhiteQueenSide => Color::White,
            CastlingRight::BlackKingSide | CastlingRight::BlackQueenSide => Color::Black,
        }
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingRight::WhiteKingSide | CastlingRight::BlackKingSide)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    #[inline]
    const fn back_rank(self) -> u8 {
        match self.color() {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    const fn on_back_rank(self, file: u8) -> Square {
        Square::from_index_unchecked(self.back_rank() * 8 + file)
    }

    #[inline]
    pub const fn king_from(self) -> Square {
        self.on_back_rank(4)
    }

    #[inline]
    pub const fn king_to(self) -> Square {
        self.on_back_rank(if self.is_king_side() { 6 } else { 2 })
    }

    #[inline]
    pub const fn rook_from(self) -> Square {
        self.on_back_rank(if self.is_king_side() { 7 } else { 0 })
    }

    #[inline]
    pub const fn rook_to(self) -> Square {
        self.on_back_rank(if self.is_king_side() { 5 } else { 3 })
    }

    /// Squares strictly between king and rook. All of them must be empty.
    pub const fn between(self) -> Bitboard {
        let rank = Bitboard::rank_mask(self.back_rank()).inner();
        let files = if self.is_king_side() { 0x60 } else { 0x0E };
        Bitboard::new(rank & (files * 0x0101_0101_0101_0101))
    }

    /// Squares the king stands on or crosses: origin, transit and landing.
    /// None of them may be attacked.
    pub const fn king_path(self) -> Bitboard {
        let rank = Bitboard::rank_mask(self.back_rank()).inner();
        let files = if self.is_king_side() { 0x70 } else { 0x1C };
        Bitboard::new(rank & (files * 0x0101_0101_0101_0101))
    }

    pub const fn fen_char(self) -> char {
        match self {
            CastlingRight::WhiteKingSide => 'K',
            CastlingRight::WhiteQueenSide => 'Q',
            CastlingRight::BlackKingSide => 'k',
            CastlingRight::BlackQueenSide => 'q',
        }
    }
}

/// The set of castling rights still held, one bit per [`CastlingRight`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

/// Rights that survive a move touching each square. Moving from or capturing
/// on a king or rook origin clears the matching rights.
static REVOKE_MASK: [u8; 64] = {
    let mut table = [0b1111u8; 64];
    let mut i = 0;
    while i < 4 {
        let right = CastlingRight::ALL[i];
        table[right.king_from().index()] &= !right.bit();
        table[right.rook_from().index()] &= !right.bit();
        i += 1;
    }
    table
};

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Build from raw bits; anything above the low four is dropped.
    #[inline]
    pub const fn from_bits(bits: u8) -> CastlingRights {
        CastlingRights(bits & 0b1111)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn has(self, right: CastlingRight) -> bool {
        self.0 & right.bit() != 0
    }

    #[inline]
    pub const fn with(self, right: CastlingRight) -> CastlingRights {
        CastlingRights(self.0 | right.bit())
    }

    #[inline]
    pub const fn without(self, right: CastlingRight) -> CastlingRights {
        CastlingRights(self.0 & !right.bit())
    }

    /// Rights left after a move from `from` to `to`.
    #[inline]
    pub fn revoke_for_move(self, from: Square, to: Square) -> CastlingRights {
        CastlingRights(self.0 & REVOKE_MASK[from.index()] & REVOKE_MASK[to.index()])
    }

    /// Iterate the held rights in `KQkq` order.
    pub fn iter(self) -> impl Iterator<Item = CastlingRight> {
        CastlingRight::ALL.into_iter().filter(move |&r| self.has(r))
    }

    /// Parse the FEN castling field: `-` or a subset of `KQkq`.
    pub fn from_fen(s: &str) -> Result<CastlingRights, FenError> {
        if s == "-" {
            return Ok(CastlingRights::NONE);
        }
        if s.is_empty() {
            return Err(FenError::InvalidCastling { found: s.to_string() });
        }
        s.chars().try_fold(CastlingRights::NONE, |rights, c| {
            CastlingRight::ALL
                .into_iter()
                .find(|r| r.fen_char() == c)
                .map(|r| rights.with(r))
                .ok_or_else(|| FenError::InvalidCastling { found: s.to_string() })
        })
    }
}

impl BitAnd for CastlingRights {
    type Output = CastlingRights;
    #[inline]
    fn bitand(self, rhs: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & rhs.0)
    }
}

impl BitOr for CastlingRights {
    type Output = CastlingRights;
    #[inline]
    fn bitor(self, rhs: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | rhs.0)
    }
}

impl Not for CastlingRights {
    type Output = CastlingRights;
    #[inline]
    fn not(self) -> CastlingRights {
        CastlingRights(!self.0 & 0b1111)
    }
}

/// FEN castling field.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for right in self.iter() {
            write!(f, "{}", right.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastlingRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastlingRight, CastlingRights};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn geometry() {
        let wk = CastlingRight::WhiteKingSide;
        assert_eq!((wk.king_from(), wk.king_to()), (Square::E1, Square::G1));
        assert_eq!((wk.rook_from(), wk.rook_to()), (Square::H1, Square::F1));
        assert_eq!(wk.between(), Square::F1.bitboard() | Square::G1.bitboard());
        assert_eq!(
            wk.king_path(),
            Square::E1.bitboard() | Square::F1.bitboard() | Square::G1.bitboard()
        );

        let bq = CastlingRight::BlackQueenSide;
        assert_eq!((bq.king_from(), bq.king_to()), (Square::E8, Square::C8));
        assert_eq!((bq.rook_from(), bq.rook_to()), (Square::A8, Square::D8));
        assert_eq!(
            bq.between(),
            Square::B8.bitboard() | Square::C8.bitboard() | Square::D8.bitboard()
        );
        // b8 must be empty but the king never crosses it.
        assert!(!bq.king_path().contains(Square::B8));
        assert_eq!(bq.king_path().count(), 3);
    }

    #[test]
    fn for_color_is_king_side_first() {
        assert_eq!(
            CastlingRight::for_color(Color::Black),
            [CastlingRight::BlackKingSide, CastlingRight::BlackQueenSide]
        );
        for right in CastlingRight::ALL {
            assert!(CastlingRight::for_color(right.color()).contains(&right));
        }
    }

    #[test]
    fn fen_field() {
        for text in ["KQkq", "Kq", "k", "-", "KQ", "q"] {
            let rights = CastlingRights::from_fen(text).unwrap();
            assert_eq!(rights.to_string(), text);
        }
        // Out-of-order input is normalised.
        assert_eq!(CastlingRights::from_fen("qK").unwrap().to_string(), "Kq");
        assert_eq!(CastlingRights::from_fen("KQkq").unwrap(), CastlingRights::ALL);
        assert!(CastlingRights::from_fen("KQxq").is_err());
        assert!(CastlingRights::from_fen("").is_err());
    }

    #[test]
    fn king_move_revokes_both_rights() {
        let rights = CastlingRights::ALL.revoke_for_move(Square::E1, Square::E2);
        assert_eq!(rights.to_string(), "kq");
    }

    #[test]
    fn rook_capture_revokes_that_right_only() {
        let rights = CastlingRights::ALL.revoke_for_move(Square::B7, Square::A8);
        assert_eq!(rights.to_string(), "KQk");
        let untouched = CastlingRights::ALL.revoke_for_move(Square::D2, Square::D4);
        assert_eq!(untouched, CastlingRights::ALL);
    }

    #[test]
    fn set_operations() {
        let rights = CastlingRights::NONE
            .with(CastlingRight::WhiteKingSide)
            .with(CastlingRight::BlackQueenSide);
        assert!(rights.has(CastlingRight::WhiteKingSide));
        assert!(!rights.has(CastlingRight::WhiteQueenSide));
        assert_eq!(!rights, CastlingRights::from_fen("Qk").unwrap());
        assert_eq!(rights.without(CastlingRight::WhiteKingSide).to_string(), "q");
        assert_eq!(CastlingRights::from_bits(0xFF), CastlingRights::ALL);
    }
}
