//! Filtering pseudo-legal non-king moves down to legal ones.

use crate::position::Position;
use crate::square::Square;

use super::{MoveList, ScratchList};

/// Append to `out` every move of `pseudo` that does not leave the king on
/// `king_sq` attacked. None of the moves in `pseudo` may move the king.
///
/// Each candidate is played and taken back through a [`TurnGuard`], so
/// `position` is unchanged on return.
///
/// [`TurnGuard`]: crate::position::TurnGuard
pub(super) fn retain_legal(
    position: &mut Position,
    king_sq: Square,
    pseudo: &ScratchList,
    out: &mut MoveList,
) {
    let them = !position.side_to_move();
    for &mv in pseudo {
        debug_assert_ne!(mv.from(), king_sq, "king move {mv} in the probe list");
        let after = position.play(mv);
        if !after.is_square_attacked_by(king_sq, them) {
            out.push(mv);
        }
    }
}
