//! Moves packed into 16 bits: origin, destination and a four-bit flag.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

const FROM_MASK: u16 = 0x003F;
const TO_MASK: u16 = 0x0FC0;
const TO_SHIFT: u32 = 6;
const FLAG_SHIFT: u32 = 12;

const CAPTURE_BIT: u8 = 0b0100;
const PROMOTION_BIT: u8 = 0b1000;

/// What kind of move this is.
///
/// Bit 2 marks captures and bit 3 marks promotions, so the eight promotion
/// flags are the four promotion pieces times quiet/capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePush = 1,
    KingCastle = 2,
    QueenCastle = 3,
    Capture = 4,
    EnPassant = 5,
    KnightPromotion = 8,
    BishopPromotion = 9,
    RookPromotion = 10,
    QueenPromotion = 11,
    KnightPromotionCapture = 12,
    BishopPromotionCapture = 13,
    RookPromotionCapture = 14,
    QueenPromotionCapture = 15,
}

impl MoveFlag {
    /// Promotion pieces in emission order.
    pub const PROMOTION_PIECES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    const fn from_bits(bits: u8) -> MoveFlag {
        match bits & 0x0F {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::KingCastle,
            3 => MoveFlag::QueenCastle,
            4 => MoveFlag::Capture,
            5 => MoveFlag::EnPassant,
            8 => MoveFlag::KnightPromotion,
            9 => MoveFlag::BishopPromotion,
            10 => MoveFlag::RookPromotion,
            11 => MoveFlag::QueenPromotion,
            12 => MoveFlag::KnightPromotionCapture,
            13 => MoveFlag::BishopPromotionCapture,
            14 => MoveFlag::RookPromotionCapture,
            15 => MoveFlag::QueenPromotionCapture,
            // 6 and 7 are never encoded.
            _ => MoveFlag::Quiet,
        }
    }

    /// The promotion flag for `kind`, as a capture or not.
    ///
    /// `kind` must be a knight, bishop, rook or queen.
    pub const fn promotion(kind: PieceKind, capture: bool) -> MoveFlag {
        let piece_bits = match kind {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            _ => 3,
        };
        let capture_bits = if capture { CAPTURE_BIT } else { 0 };
        MoveFlag::from_bits(PROMOTION_BIT | capture_bits | piece_bits)
    }

    /// Plain capture or quiet move, depending on `capture`.
    #[inline]
    pub const fn normal(capture: bool) -> MoveFlag {
        if capture { MoveFlag::Capture } else { MoveFlag::Quiet }
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        (self as u8) & CAPTURE_BIT != 0
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        (self as u8) & PROMOTION_BIT != 0
    }

    /// The piece a pawn becomes, for promotion flags.
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        if !self.is_promotion() {
            return None;
        }
        Some(match (self as u8) & 0b11 {
            0 => PieceKind::Knight,
            1 => PieceKind::Bishop,
            2 => PieceKind::Rook,
            _ => PieceKind::Queen,
        })
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveFlag::KingCastle | MoveFlag::QueenCastle)
    }
}

/// A move: origin square, destination square and [`MoveFlag`].
///
/// ```text
/// bits  0-5:  origin square
/// bits  6-11: destination square
/// bits 12-15: flag
/// ```
///
/// Equality compares all three fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// a1a1 quiet; never produced by move generation.
    pub const NULL: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Move {
        Move(from.index() as u16 | (to.index() as u16) << TO_SHIFT | (flag as u16) << FLAG_SHIFT)
    }

    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 & TO_MASK) >> TO_SHIFT) as u8)
    }

    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits((self.0 >> FLAG_SHIFT) as u8)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Captures, capturing promotions and en passant.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flag().is_capture()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flag().is_promotion()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.flag().is_castle()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag(), MoveFlag::EnPassant)
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        matches!(self.flag(), MoveFlag::DoublePush)
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        self.flag().promotion_piece()
    }
}

/// UCI long algebraic notation: `e2e4`, `e7e8q`, `0000` for the null move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion_piece() {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?})", self, self.flag())
    }
}
