//! Pseudo-legal knight, bishop, rook and queen moves.

use crate::attacks::piece_attacks;
use crate::chess_move::{Move, MoveFlag};
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::ScratchList;
use super::gen_type::{GenType, Side};

/// Generation order for the non-pawn, non-king pieces.
pub(super) const PIECE_ORDER: [PieceKind; 4] =
    [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

pub(super) fn gen_pieces<G: GenType, S: Side>(
    position: &Position,
    kind: PieceKind,
    list: &mut ScratchList,
) {
    let enemies = position.side(S::THEM);
    let target = if G::CAPTURES_ONLY { enemies } else { !position.side(S::US) };
    let occupied = position.occupied();

    for from in position.pieces(kind, S::US) {
        for to in piece_attacks(kind, from, occupied) & target {
            list.push(Move::new(from, to, MoveFlag::normal(enemies.contains(to))));
        }
    }
}
