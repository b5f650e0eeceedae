//! Legal move generation.
//!
//! Pawn, knight, bishop, rook and queen moves are generated pseudo-legally
//! into a scratch list, then each one is played and the king probed for
//! attack. King moves are generated already legal, from the squares the
//! enemy attacks.

mod gen_type;
mod king;
mod legal;
mod pawns;
mod pieces;

use std::fmt;
use std::ops::Index;

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

pub use self::gen_type::{All, Captures, GenType};

use self::gen_type::{Black, Side, White};
use self::king::gen_king;
use self::legal::retain_legal;
use self::pawns::gen_pawns;
use self::pieces::{PIECE_ORDER, gen_pieces};

/// The most legal moves any reachable chess position has.
pub const MAX_MOVES: usize = 218;

/// Capacity of the pseudo-legal scratch list. Pseudo-legal counts are not
/// bounded by [`MAX_MOVES`].
pub(crate) const SCRATCH_CAPACITY: usize = 256;

pub(crate) type ScratchList = MoveList<SCRATCH_CAPACITY>;

/// Fixed-capacity, stack-allocated list of moves in insertion order.
#[derive(Clone)]
pub struct MoveList<const CAP: usize = MAX_MOVES> {
    moves: [Move; CAP],
    len: usize,
}

impl MoveList {
    /// An empty list with room for [`MAX_MOVES`] moves.
    pub fn new() -> MoveList {
        MoveList::default()
    }
}

impl<const CAP: usize> MoveList<CAP> {
    /// Append `mv`.
    ///
    /// # Panics
    ///
    /// Panics if the list is already full. Moves are never dropped silently.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!(self.len < CAP, "move list overflow: more than {CAP} moves");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        CAP
    }

    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<const CAP: usize> Default for MoveList<CAP> {
    fn default() -> Self {
        MoveList { moves: [Move::NULL; CAP], len: 0 }
    }
}

impl<const CAP: usize> Index<usize> for MoveList<CAP> {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a, const CAP: usize> IntoIterator for &'a MoveList<CAP> {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const CAP: usize> fmt::Debug for MoveList<CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Append every legal move of the selected kind for the side to move to `list`.
///
/// Non-king moves come first in the order pawns, knights, bishops, rooks,
/// queens, followed by king moves and then king-side and queen-side castling.
/// `position` is used for probing and is restored before this returns.
///
/// # Panics
///
/// Panics if the side to move has no king, or if `list` overflows.
pub fn generate_moves<G: GenType>(position: &mut Position, list: &mut MoveList) {
    match position.side_to_move() {
        Color::White => generate_for::<G, White>(position, list),
        Color::Black => generate_for::<G, Black>(position, list),
    }
}

/// The legal moves of the selected kind, in [`generate_moves`] order.
pub fn legal_moves<G: GenType>(position: &mut Position) -> MoveList {
    let mut list = MoveList::new();
    generate_moves::<G>(position, &mut list);
    list
}

fn generate_for<G: GenType, S: Side>(position: &mut Position, list: &mut MoveList) {
    let king_sq = position.king_square(S::US);

    let mut pseudo = ScratchList::default();
    gen_pawns::<G, S>(position, &mut pseudo);
    for kind in PIECE_ORDER {
        gen_pieces::<G, S>(position, kind, &mut pseudo);
    }

    retain_legal(position, king_sq, &pseudo, list);
    gen_king::<G, S>(position, king_sq, list);
}
