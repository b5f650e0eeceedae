//! Pseudo-legal pawn moves, generated set-wise with shifts.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::chess_move::{Move, MoveFlag};
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::ScratchList;
use super::gen_type::{GenType, Side};

/// Emit one move per destination in `targets`, with the origin one `dir` step back.
#[inline]
fn push_each(list: &mut ScratchList, targets: Bitboard, dir: Direction, steps: u8, flag: MoveFlag) {
    for to in targets {
        let mut from = to;
        for _ in 0..steps {
            from = from.shifted_unchecked(dir.reverse());
        }
        list.push(Move::new(from, to, flag));
    }
}

/// Four promotions per destination, queen first.
#[inline]
fn promote_each(list: &mut ScratchList, targets: Bitboard, dir: Direction, capture: bool) {
    for to in targets {
        let from = to.shifted_unchecked(dir.reverse());
        for kind in MoveFlag::PROMOTION_PIECES {
            list.push(Move::new(from, to, MoveFlag::promotion(kind, capture)));
        }
    }
}

pub(super) fn gen_pawns<G: GenType, S: Side>(position: &Position, list: &mut ScratchList) {
    let pawns = position.pieces(PieceKind::Pawn, S::US);
    let empty = position.empty();
    let enemies = position.side(S::THEM);

    let promoting = pawns & S::PRE_PROMOTION_RANK;
    let others = pawns & !S::PRE_PROMOTION_RANK;

    if !G::CAPTURES_ONLY {
        let pushes = others.shift(S::PUSH) & empty;
        let doubles = (pushes & S::DOUBLE_PUSH_RANK).shift(S::PUSH) & empty;
        push_each(list, pushes, S::PUSH, 1, MoveFlag::Quiet);
        push_each(list, doubles, S::PUSH, 2, MoveFlag::DoublePush);
    }

    let east = others.shift(S::CAPTURE_EAST) & enemies;
    let west = others.shift(S::CAPTURE_WEST) & enemies;
    push_each(list, east, S::CAPTURE_EAST, 1, MoveFlag::Capture);
    push_each(list, west, S::CAPTURE_WEST, 1, MoveFlag::Capture);

    if !G::CAPTURES_ONLY {
        promote_each(list, promoting.shift(S::PUSH) & empty, S::PUSH, false);
    }
    promote_each(list, promoting.shift(S::CAPTURE_EAST) & enemies, S::CAPTURE_EAST, true);
    promote_each(list, promoting.shift(S::CAPTURE_WEST) & enemies, S::CAPTURE_WEST, true);

    if let Some(target) = position.en_passant() {
        // Our pawns that attack the target are the squares an enemy pawn on it would attack.
        for from in others & pawn_attacks(S::THEM, target) {
            list.push(Move::new(from, target, MoveFlag::EnPassant));
        }
    }
}
