//! Compile-time selectors for move generation: which moves to produce, and for
//! which side.

use crate::bitboard::Bitboard;
use crate::castling::CastlingRight;
use crate::color::Color;
use crate::direction::Direction;

/// Which moves a generation pass produces.
pub trait GenType {
    /// Produce only moves that take a piece: captures, capturing promotions and
    /// en passant. Quiet check evasions are not included.
    const CAPTURES_ONLY: bool;
}

/// Every legal move.
pub struct All;
impl GenType for All {
    const CAPTURES_ONLY: bool = false;
}

/// Capturing moves only.
pub struct Captures;
impl GenType for Captures {
    const CAPTURES_ONLY: bool = true;
}

/// Per-color constants for the side being generated for.
pub(crate) trait Side {
    const US: Color;
    const THEM: Color;
    const PUSH: Direction;
    /// Capture toward the h-file.
    const CAPTURE_EAST: Direction;
    /// Capture toward the a-file.
    const CAPTURE_WEST: Direction;
    /// Where a single push lands when a double push may follow.
    const DOUBLE_PUSH_RANK: Bitboard;
    /// Pawns here promote on their next move.
    const PRE_PROMOTION_RANK: Bitboard;
    const KING_SIDE: CastlingRight;
    const QUEEN_SIDE: CastlingRight;
}

pub(crate) struct White;
impl Side for White {
    const US: Color = Color::White;
    const THEM: Color = Color::Black;
    const PUSH: Direction = Direction::North;
    const CAPTURE_EAST: Direction = Direction::NorthEast;
    const CAPTURE_WEST: Direction = Direction::NorthWest;
    const DOUBLE_PUSH_RANK: Bitboard = Bitboard::RANK_3;
    const PRE_PROMOTION_RANK: Bitboard = Bitboard::RANK_7;
    const KING_SIDE: CastlingRight = CastlingRight::WhiteKingSide;
    const QUEEN_SIDE: CastlingRight = CastlingRight::WhiteQueenSide;
}

pub(crate) struct Black;
impl Side for Black {
    const US: Color = Color::Black;
    const THEM: Color = Color::White;
    const PUSH: Direction = Direction::South;
    const CAPTURE_EAST: Direction = Direction::SouthEast;
    const CAPTURE_WEST: Direction = Direction::SouthWest;
    const DOUBLE_PUSH_RANK: Bitboard = Bitboard::RANK_6;
    const PRE_PROMOTION_RANK: Bitboard = Bitboard::RANK_2;
    const KING_SIDE: CastlingRight = CastlingRight::BlackKingSide;
    const QUEEN_SIDE: CastlingRight = CastlingRight::BlackQueenSide;
}
