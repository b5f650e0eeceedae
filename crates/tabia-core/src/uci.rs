//! Resolving UCI long algebraic move text (`e2e4`, `e7e8q`) against a position.

use crate::chess_move::Move;
use crate::error::MoveParseError;
use crate::movegen::{All, legal_moves};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Origin, destination and optional promotion piece, before legality is known.
fn split_uci(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c @ ('q' | 'r' | 'b' | 'n')) => PieceKind::from_fen_char(c),
        Some(_) => return None,
    };
    Some((from, to, promotion))
}

impl Position {
    /// Find the legal move written as `text`.
    ///
    /// The flag (capture, castle, en passant, double push) is taken from the
    /// matching generated move, so the result can be passed straight to
    /// [`make_turn`](Position::make_turn).
    pub fn parse_uci_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let (from, to, promotion) =
            split_uci(text).ok_or_else(|| MoveParseError::Malformed { text: text.to_string() })?;
        legal_moves::<All>(self)
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
            .ok_or_else(|| MoveParseError::Illegal { text: text.to_string() })
    }
}
