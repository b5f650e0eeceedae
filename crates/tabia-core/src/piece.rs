//! Colored pieces, as stored in the position's mailbox.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece of a given kind and color, packed as `color << 3 | kind`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct colored pieces.
    pub const COUNT: usize = 12;

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | kind as u8)
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    #[inline]
    pub const fn color(self) -> Color {
        if self.0 >> 3 == 0 { Color::White } else { Color::Black }
    }

    /// Dense index 0..12 (White pawn..king, then Black pawn..king) for hash tables.
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 >> 3) as usize * PieceKind::COUNT + (self.0 & 0x07) as usize
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }

    pub fn fen_char(self) -> char {
        match self.color() {
            Color::White => self.kind().fen_char().to_ascii_uppercase(),
            Color::Black => self.kind().fen_char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({})", self.fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn kind_and_color_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), kind);
                assert_eq!(piece.color(), color);
            }
        }
    }

    #[test]
    fn dense_indices_cover_all_pieces() {
        let mut seen = [false; Piece::COUNT];
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                seen[Piece::new(kind, color).index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn fen_letters() {
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(Piece::from_fen_char('?'), None);
        assert_eq!(Piece::new(PieceKind::King, Color::White).to_string(), "K");
        assert_eq!(format!("{:?}", Piece::new(PieceKind::Pawn, Color::Black)), "Piece(p)");
    }
}
