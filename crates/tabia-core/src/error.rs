//! Error types for FEN parsing, position validation and move text.

use crate::castling::CastlingRight;
use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Fewer than 4 or more than 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },
    /// A rank describes more or fewer than 8 squares. `rank_index` 0 is rank 8.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling { found: String },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },
    /// The fields parsed but describe an impossible position.
    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
}

/// Structural problems with a [`Position`](crate::position::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("expected 1 king for {color:?}, found {count}")]
    InvalidKingCount { color: Color, count: u32 },
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side that just moved left its own king attacked.
    #[error("side not to move is in check")]
    OpponentInCheck,
    /// A castling right is held but the king or rook is not on its origin square.
    #[error("castling right {right:?} without king and rook in place")]
    CastlingWithoutPieces { right: CastlingRight },
    /// The en passant target is not on the right rank or has no pawn in front of it.
    #[error("en passant target {square} is not behind a double-pushed pawn")]
    BadEnPassantTarget { square: Square },
}

/// Errors from resolving UCI move text against a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    #[error("malformed move text: \"{text}\"")]
    Malformed { text: String },
    #[error("illegal move in this position: \"{text}\"")]
    Illegal { text: String },
}
