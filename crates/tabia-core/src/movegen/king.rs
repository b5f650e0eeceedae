//! King moves and castling.
//!
//! King moves are checked here directly against the enemy's attacked squares
//! instead of being played and probed like the other pieces.

use crate::attacks::king_attacks;
use crate::bitboard::Bitboard;
use crate::castling::CastlingRight;
use crate::chess_move::{Move, MoveFlag};
use crate::position::Position;
use crate::square::Square;

use super::MoveList;
use super::gen_type::{GenType, Side};

pub(super) fn gen_king<G: GenType, S: Side>(position: &Position, king_sq: Square, list: &mut MoveList) {
    let enemies = position.side(S::THEM);
    let target = if G::CAPTURES_ONLY { enemies } else { !position.side(S::US) };
    // X-ray through our own king so it cannot retreat along a checking line.
    let attacked = position.attacked_squares(S::THEM, true);

    for to in king_attacks(king_sq) & target & !attacked {
        list.push(Move::new(king_sq, to, MoveFlag::normal(enemies.contains(to))));
    }

    if G::CAPTURES_ONLY {
        return;
    }

    for (right, flag) in [(S::KING_SIDE, MoveFlag::KingCastle), (S::QUEEN_SIDE, MoveFlag::QueenCastle)] {
        if can_castle(position, right, attacked) {
            list.push(Move::new(king_sq, position.castling_king_to(right), flag));
        }
    }
}

/// The right is held, nothing stands between king and rook, and the king
/// neither starts in, passes through nor lands on an attacked square.
#[inline]
fn can_castle(position: &Position, right: CastlingRight, attacked: Bitboard) -> bool {
    position.has_castling_right(right)
        && position.castling_path_free(right)
        && (position.castling_king_path(right) & attacked).is_empty()
}
