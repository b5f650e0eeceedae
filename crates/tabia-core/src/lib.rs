//! Chess position representation and legal move generation.

mod attacks;
mod bitboard;
mod castling;
mod chess_move;
mod color;
mod direction;
mod error;
mod fen;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod uci;
mod zobrist;

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks, queen_attacks,
    rook_attacks,
};
pub use bitboard::Bitboard;
pub use castling::{CastlingRight, CastlingRights};
pub use chess_move::{Move, MoveFlag};
pub use color::Color;
pub use direction::Direction;
pub use error::{FenError, MoveParseError, PositionError};
pub use fen::STARTING_FEN;
pub use movegen::{All, Captures, GenType, MAX_MOVES, MoveList, generate_moves, legal_moves};
pub use perft::{PerftReport, divide, divide_with, perft, perft_with};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition, RevertState, TurnGuard};
pub use square::Square;
