//! The game state: piece placement, side to move, castling, en passant, clocks,
//! and the reversible move application that move generation probes with.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
use crate::bitboard::Bitboard;
use crate::castling::{CastlingRight, CastlingRights};
use crate::chess_move::{Move, MoveFlag};
use crate::color::Color;
use crate::error::PositionError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position.
///
/// Piece placement is stored twice: bitboards per kind and per side for set
/// queries, and a mailbox for `piece_on`. Both are updated together.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pieces: [Bitboard; PieceKind::COUNT],
    sides: [Bitboard; Color::COUNT],
    mailbox: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    hash: u64,
}

/// Everything [`Position::unmake_turn`] needs to take back one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertState {
    mv: Move,
    captured: Option<Piece>,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u16,
    hash: u64,
}

impl RevertState {
    /// The move this state takes back.
    #[inline]
    pub fn played(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl Position {
    /// An empty board with White to move and no rights. Filled in by FEN parsing.
    pub(crate) fn blank() -> Position {
        Position {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            mailbox: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        }
    }

    /// The standard starting position.
    pub fn starting_position() -> Position {
        let mut position = Position::blank();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            let on = |rank: u8| Square::from_index_unchecked(rank * 8 + file);
            position.put_piece(on(0), Piece::new(kind, Color::White));
            position.put_piece(on(1), Piece::new(PieceKind::Pawn, Color::White));
            position.put_piece(on(6), Piece::new(PieceKind::Pawn, Color::Black));
            position.put_piece(on(7), Piece::new(kind, Color::Black));
        }
        position.castling = CastlingRights::ALL;
        position.hash = zobrist::hash_from_scratch(&position);
        position
    }

    // Field access for FEN parsing. The hash is recomputed once at the end.

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    pub(crate) fn set_en_passant(&mut self, target: Option<Square>) {
        self.en_passant = target;
    }

    pub(crate) fn set_clocks(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    pub(crate) fn refresh_hash(&mut self) {
        self.hash = zobrist::hash_from_scratch(self);
    }

    /// Place `piece` on the empty square `sq`.
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.mailbox[sq.index()].is_none(), "{sq} is occupied");
        self.toggle(sq, piece);
        self.mailbox[sq.index()] = Some(piece);
    }

    /// Lift the piece off `sq`.
    fn remove_piece(&mut self, sq: Square) -> Piece {
        let Some(piece) = self.mailbox[sq.index()].take() else {
            panic!("no piece on {sq} in {self}");
        };
        self.toggle(sq, piece);
        piece
    }

    fn move_piece(&mut self, from: Square, to: Square) -> Piece {
        let piece = self.remove_piece(from);
        self.put_piece(to, piece);
        piece
    }

    #[inline]
    fn toggle(&mut self, sq: Square, piece: Piece) {
        let mask = sq.bitboard();
        self.pieces[piece.kind().index()] ^= mask;
        self.sides[piece.color().index()] ^= mask;
        self.hash ^= zobrist::piece_key(piece, sq);
    }

    /// Pieces of `kind` belonging to `color`.
    #[inline]
    pub fn pieces(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[kind.index()] & self.sides[color.index()]
    }

    /// Pieces of `kind` of both colors.
    #[inline]
    pub fn pieces_of_kind(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    #[inline]
    pub fn empty(&self) -> Bitboard {
        !self.occupied()
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.mailbox[sq.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRight) -> bool {
        self.castling.has(right)
    }

    /// No piece stands between the king and rook of `right`.
    #[inline]
    pub fn castling_path_free(&self, right: CastlingRight) -> bool {
        (right.between() & self.occupied()).is_empty()
    }

    /// Squares that must not be attacked for `right` to be played.
    #[inline]
    pub fn castling_king_path(&self, right: CastlingRight) -> Bitboard {
        right.king_path()
    }

    #[inline]
    pub fn castling_king_to(&self, right: CastlingRight) -> Square {
        right.king_to()
    }

    /// The square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king, which [`validate`](Self::validate) rules out.
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces(PieceKind::King, color)
            .lsb()
            .expect("position must have a king for each side")
    }

    /// Return `true` if `sq` is attacked by any piece of `by`.
    ///
    /// Attack patterns are cast from the target square and intersected with
    /// the attacker's pieces of each type.
    pub fn is_square_attacked_by(&self, sq: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let them = self.side(by);
        let queens = self.pieces_of_kind(PieceKind::Queen);
        let diagonal = self.pieces_of_kind(PieceKind::Bishop) | queens;
        let orthogonal = self.pieces_of_kind(PieceKind::Rook) | queens;

        // A pawn of `by` attacks `sq` iff a pawn of the other color on `sq` would attack it back.
        (pawn_attacks(!by, sq) & self.pieces_of_kind(PieceKind::Pawn) & them).is_nonempty()
            || (knight_attacks(sq) & self.pieces_of_kind(PieceKind::Knight) & them).is_nonempty()
            || (king_attacks(sq) & self.pieces_of_kind(PieceKind::King) & them).is_nonempty()
            || (bishop_attacks(sq, occupied) & diagonal & them).is_nonempty()
            || (rook_attacks(sq, occupied) & orthogonal & them).is_nonempty()
    }

    /// Every square attacked by `by`.
    ///
    /// With `xray_king` the opposing king is taken off the board first, so
    /// squares behind it along a slider's line count as attacked. That is the
    /// set a king in check must not step into.
    pub fn attacked_squares(&self, by: Color, xray_king: bool) -> Bitboard {
        let mut occupied = self.occupied();
        if xray_king {
            occupied ^= self.pieces(PieceKind::King, !by);
        }

        let mut attacked = Bitboard::EMPTY;
        for sq in self.pieces(PieceKind::Pawn, by) {
            attacked |= pawn_attacks(by, sq);
        }
        for sq in self.pieces(PieceKind::Knight, by) {
            attacked |= knight_attacks(sq);
        }
        for sq in self.pieces(PieceKind::Bishop, by) {
            attacked |= bishop_attacks(sq, occupied);
        }
        for sq in self.pieces(PieceKind::Rook, by) {
            attacked |= rook_attacks(sq, occupied);
        }
        for sq in self.pieces(PieceKind::Queen, by) {
            attacked |= queen_attacks(sq, occupied);
        }
        for sq in self.pieces(PieceKind::King, by) {
            attacked |= king_attacks(sq);
        }
        attacked
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move;
        self.is_square_attacked_by(self.king_square(us), !us)
    }

    /// Play `mv` in place and return what is needed to take it back.
    ///
    /// `mv` must be pseudo-legal for the side to move; no legality check is
    /// made here.
    ///
    /// # Panics
    ///
    /// Panics if the origin square (or the captured square of a capture) is empty.
    pub fn make_turn(&mut self, mv: Move) -> RevertState {
        let us = self.side_to_move;
        let from = mv.from();
        let to = mv.to();
        let mut revert = RevertState {
            mv,
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            hash: self.hash,
        };

        if let Some(target) = self.en_passant.take() {
            self.hash ^= zobrist::en_passant_key(target);
        }

        if mv.is_en_passant() {
            revert.captured = Some(self.remove_piece(to.shifted_unchecked((!us).forward())));
        } else if mv.is_capture() {
            revert.captured = Some(self.remove_piece(to));
        }

        let moved = self.move_piece(from, to);

        if let Some(kind) = mv.promotion_piece() {
            self.remove_piece(to);
            self.put_piece(to, Piece::new(kind, us));
        }

        if mv.is_castle() {
            let right = CastlingRight::from_parts(us, mv.flag() == MoveFlag::KingCastle);
            self.move_piece(right.rook_from(), right.rook_to());
        }

        if mv.is_double_push() {
            let target = from.shifted_unchecked(us.forward());
            self.en_passant = Some(target);
            self.hash ^= zobrist::en_passant_key(target);
        }

        let castling = self.castling.revoke_for_move(from, to);
        if castling != self.castling {
            self.hash ^= zobrist::castling_key(self.castling) ^ zobrist::castling_key(castling);
            self.castling = castling;
        }

        if moved.kind() == PieceKind::Pawn || revert.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.wrapping_add(1);
        }
        // Wrapping keeps the counters exactly reversible at `u16::MAX`.
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.wrapping_add(1);
        }
        self.side_to_move = !us;
        self.hash ^= zobrist::side_key();

        revert
    }

    /// Take back the move recorded in `revert`, which must be the last move
    /// made and not yet taken back.
    pub fn unmake_turn(&mut self, revert: RevertState) {
        let mv = revert.mv;
        let us = !self.side_to_move;
        let from = mv.from();
        let to = mv.to();
        debug_assert_eq!(
            self.piece_on(to).map(Piece::color),
            Some(us),
            "unmake_turn({mv}) does not match the last move played"
        );

        self.side_to_move = us;
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.wrapping_sub(1);
        }

        if mv.is_castle() {
            let right = CastlingRight::from_parts(us, mv.flag() == MoveFlag::KingCastle);
            self.move_piece(right.rook_to(), right.rook_from());
        }

        if mv.is_promotion() {
            self.remove_piece(to);
            self.put_piece(to, Piece::new(PieceKind::Pawn, us));
        }

        self.move_piece(to, from);

        if let Some(captured) = revert.captured {
            let sq = if mv.is_en_passant() {
                to.shifted_unchecked((!us).forward())
            } else {
                to
            };
            self.put_piece(sq, captured);
        }

        self.castling = revert.castling;
        self.en_passant = revert.en_passant;
        self.halfmove_clock = revert.halfmove_clock;
        self.hash = revert.hash;
    }

    /// Play `mv` for as long as the returned guard lives.
    ///
    /// The guard derefs to the position after `mv` and takes the move back
    /// when dropped, so the position cannot be left with a half-finished probe.
    pub fn play(&mut self, mv: Move) -> TurnGuard<'_> {
        let revert = self.make_turn(mv);
        TurnGuard { position: self, revert }
    }

    /// Check the structural invariants move generation relies on.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let count = self.pieces(PieceKind::King, color).count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        if (self.pieces[PieceKind::Pawn.index()] & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        let mover = self.side_to_move;
        if self.is_square_attacked_by(self.king_square(!mover), mover) {
            return Err(PositionError::OpponentInCheck);
        }

        for right in self.castling.iter() {
            let color = right.color();
            let king = Piece::new(PieceKind::King, color);
            let rook = Piece::new(PieceKind::Rook, color);
            if self.piece_on(right.king_from()) != Some(king)
                || self.piece_on(right.rook_from()) != Some(rook)
            {
                return Err(PositionError::CastlingWithoutPieces { right });
            }
        }

        if let Some(square) = self.en_passant {
            // The target sits on the third rank from the pusher's side, with
            // the pushed pawn one step beyond it.
            let pusher = !mover;
            let expected_rank = match pusher {
                Color::White => 2,
                Color::Black => 5,
            };
            let pawn_sq = square.offset(pusher.forward());
            let pushed = pawn_sq.and_then(|sq| self.piece_on(sq));
            if square.rank() != expected_rank
                || self.piece_on(square).is_some()
                || pushed != Some(Piece::new(PieceKind::Pawn, pusher))
            {
                return Err(PositionError::BadEnPassantTarget { square });
            }
        }

        Ok(())
    }

    /// A displayable 8x8 diagram of the board.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::starting_position()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// A move played on a [`Position`], taken back on drop.
///
/// Returned by [`Position::play`].
pub struct TurnGuard<'a> {
    position: &'a mut Position,
    revert: RevertState,
}

impl TurnGuard<'_> {
    /// The move this guard will take back.
    #[inline]
    pub fn played(&self) -> Move {
        self.revert.mv
    }
}

impl Deref for TurnGuard<'_> {
    type Target = Position;

    #[inline]
    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for TurnGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.position.unmake_turn(self.revert);
    }
}

/// Board diagram, rank 8 at the top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let c = self.0.piece_on(sq).map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    writeln!(f, "{c}")?;
                }
            }
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::castling::CastlingRight;
    use crate::chess_move::{Move, MoveFlag};
    use crate::color::Color;
    use crate::error::PositionError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn pos(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_queries() {
        let p = Position::starting_position();
        p.validate().unwrap();
        assert_eq!(p.occupied().count(), 32);
        assert_eq!(p.empty().count(), 32);
        assert_eq!(p.piece_on(Square::D1), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(p.piece_on(Square::G8), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(p.piece_on(Square::E4), None);
        assert_eq!(p.pieces(PieceKind::Pawn, Color::Black).count(), 8);
        assert_eq!(p.king_square(Color::Black), Square::E8);
        assert!(!p.in_check());
        assert!(!p.castling_path_free(CastlingRight::WhiteKingSide));
    }

    #[test]
    fn attacked_squares_from_start() {
        let p = Position::starting_position();
        let attacked = p.attacked_squares(Color::White, false);
        // Every third-rank square is covered by a pawn; knights add nothing new.
        assert!(attacked.contains(Square::A3));
        assert!(attacked.contains(Square::H3));
        assert!(!attacked.contains(Square::E4));
        // Pieces defending their own side count too.
        assert!(attacked.contains(Square::E1));
    }

    #[test]
    fn xray_through_king() {
        let p = pos("4k3/8/8/8/4K3/8/8/4r3 w - - 0 1");
        // The rook stops at the king without x-ray.
        assert!(!p.attacked_squares(Color::Black, false).contains(Square::E5));
        assert!(p.attacked_squares(Color::Black, true).contains(Square::E5));
        assert!(p.in_check());
    }

    #[test]
    fn square_attacked_by_each_piece_kind() {
        let p = pos("4k3/8/8/3p4/8/5n2/8/R3K3 w - - 0 1");
        assert!(p.is_square_attacked_by(Square::E4, Color::Black));
        assert!(p.is_square_attacked_by(Square::C4, Color::Black));
        assert!(p.is_square_attacked_by(Square::G1, Color::Black));
        assert!(p.is_square_attacked_by(Square::A8, Color::White));
        assert!(!p.is_square_attacked_by(Square::D3, Color::Black));
    }

    #[test]
    fn make_unmake_restores_every_field() {
        let mut p = pos("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let before = p.clone();
        let moves = [
            Move::new(Square::E1, Square::G1, MoveFlag::KingCastle),
            Move::new(Square::E1, Square::C1, MoveFlag::QueenCastle),
            Move::new(Square::E5, Square::F7, MoveFlag::Capture),
            Move::new(Square::A2, Square::A4, MoveFlag::DoublePush),
            Move::new(Square::D5, Square::D6, MoveFlag::Quiet),
        ];
        for mv in moves {
            let revert = p.make_turn(mv);
            assert_ne!(p, before);
            p.unmake_turn(revert);
            assert_eq!(p, before, "after {mv}");
        }
    }

    #[test]
    fn revert_state_records_move_and_capture() {
        let mut p = pos("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let mv = Move::new(Square::E4, Square::D5, MoveFlag::Capture);
        {
            let after = p.play(mv);
            assert_eq!(after.played(), mv);
            assert_eq!(after.pieces_of_kind(PieceKind::Pawn).count(), 1);
        }
        let revert = p.make_turn(mv);
        assert_eq!(revert.played(), mv);
        assert_eq!(revert.captured(), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        p.unmake_turn(revert);
        assert_eq!(p.pieces_of_kind(PieceKind::Pawn).count(), 2);
    }

    #[test]
    fn clocks_at_u16_max_wrap_and_restore() {
        let mut p = pos("4k3/8/8/8/8/8/8/R3K3 w - - 65535 1");
        let before = p.clone();
        let revert = p.make_turn(Move::new(Square::A1, Square::A2, MoveFlag::Quiet));
        assert_eq!(p.halfmove_clock(), 0);
        p.unmake_turn(revert);
        assert_eq!(p, before);

        let mut p = pos("4k3/8/8/8/8/8/8/R3K3 b - - 0 65535");
        let before = p.clone();
        let revert = p.make_turn(Move::new(Square::E8, Square::D8, MoveFlag::Quiet));
        assert_eq!(p.fullmove_number(), 0);
        p.unmake_turn(revert);
        assert_eq!(p, before);
    }

    #[test]
    fn castling_moves_rook_and_revokes_rights() {
        let mut p = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
        let revert = p.make_turn(Move::new(Square::E1, Square::C1, MoveFlag::QueenCastle));
        assert_eq!(p.piece_on(Square::D1), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(p.piece_on(Square::A1), None);
        assert_eq!(p.castling().to_string(), "kq");
        assert_eq!(p.halfmove_clock(), 4);
        assert_eq!(p.side_to_move(), Color::Black);
        p.unmake_turn(revert);
        assert_eq!(p.castling().to_string(), "KQkq");
        assert_eq!(p.piece_on(Square::A1), Some(Piece::new(PieceKind::Rook, Color::White)));
    }

    #[test]
    fn en_passant_removes_pawn_behind_target() {
        let mut p = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let mv = Move::new(Square::E5, Square::D6, MoveFlag::EnPassant);
        {
            let after = p.play(mv);
            assert_eq!(after.piece_on(Square::D5), None);
            assert_eq!(after.piece_on(Square::D6), Some(Piece::new(PieceKind::Pawn, Color::White)));
            assert_eq!(after.halfmove_clock(), 0);
            assert_eq!(after.en_passant(), None);
        }
        assert_eq!(p.piece_on(Square::D5), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(p.en_passant(), Some(Square::D6));
    }

    #[test]
    fn double_push_sets_target_and_hash_tracks() {
        let mut p = Position::starting_position();
        let after = p.play(Move::new(Square::E2, Square::E4, MoveFlag::DoublePush));
        assert_eq!(after.en_passant(), Some(Square::E3));
        assert_eq!(after.hash(), crate::zobrist::hash_from_scratch(&after));
    }

    #[test]
    fn promotion_capture_and_fullmove() {
        let mut p = pos("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 7");
        let mut after = p.play(Move::new(Square::A7, Square::B8, MoveFlag::RookPromotionCapture));
        assert_eq!(after.piece_on(Square::B8), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(after.pieces(PieceKind::Pawn, Color::White).count(), 0);
        assert_eq!(after.fullmove_number(), 7);
        {
            let black = after.play(Move::new(Square::E8, Square::E7, MoveFlag::Quiet));
            assert_eq!(black.fullmove_number(), 8);
        }
        assert_eq!(after.fullmove_number(), 7);
    }

    #[test]
    fn validate_rejects_broken_positions() {
        assert_eq!(
            pos_unchecked("8/8/8/8/8/8/8/4K3 w - - 0 1").validate(),
            Err(PositionError::InvalidKingCount { color: Color::Black, count: 0 })
        );
        assert_eq!(
            pos_unchecked("4k3/8/8/8/8/8/8/P3K3 w - - 0 1").validate(),
            Err(PositionError::PawnsOnBackRank)
        );
        assert_eq!(
            pos_unchecked("4k3/8/8/8/8/8/8/4K2R w - - 0 1").validate(),
            Ok(())
        );
        assert_eq!(
            pos_unchecked("4k3/4R3/8/8/8/8/8/4K3 w - - 0 1").validate(),
            Err(PositionError::OpponentInCheck)
        );
        assert_eq!(
            pos_unchecked("4k3/8/8/8/8/8/8/4K3 w K - 0 1").validate(),
            Err(PositionError::CastlingWithoutPieces { right: CastlingRight::WhiteKingSide })
        );
        assert_eq!(
            pos_unchecked("4k3/8/8/8/8/8/8/4K3 w - e6 0 1").validate(),
            Err(PositionError::BadEnPassantTarget { square: Square::E6 })
        );
    }

    /// Parse without running validation, to test `validate` itself.
    fn pos_unchecked(fen: &str) -> Position {
        crate::fen::parse_unchecked(fen).unwrap()
    }

    #[test]
    fn pretty_print() {
        let output = Position::starting_position().pretty().to_string();
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.ends_with("a b c d e f g h"));
    }
}
