//! Perft: exhaustive leaf counting to verify move generation.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::chess_move::Move;
use crate::movegen::{All, GenType, legal_moves};
use crate::position::Position;

/// Count the leaf nodes `depth` plies below `position`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    perft_with::<All>(position, depth)
}

/// [`perft`] restricted to the moves `G` generates at every node.
pub fn perft_with<G: GenType>(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves::<G>(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft_with::<G>(&mut position.play(mv), depth - 1))
        .sum()
}

/// Leaf counts below each root move, in generation order.
///
/// Depth 0 explores no moves and returns an empty breakdown.
pub fn divide(position: &mut Position, depth: usize) -> Vec<(Move, u64)> {
    divide_with::<All>(position, depth)
}

pub fn divide_with<G: GenType>(position: &mut Position, depth: usize) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    legal_moves::<G>(position)
        .iter()
        .map(|&mv| (mv, perft_with::<G>(&mut position.play(mv), depth - 1)))
        .collect()
}

/// A timed perft run with its per-root-move breakdown.
///
/// Displays as `move: count` lines, a blank line and `Total: N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftReport {
    pub depth: usize,
    pub moves: Vec<(Move, u64)>,
    pub total: u64,
    pub elapsed: Duration,
}

impl PerftReport {
    pub fn run<G: GenType>(position: &mut Position, depth: usize) -> PerftReport {
        debug!(depth, fen = %position, "perft started");
        let start = Instant::now();
        let moves = divide_with::<G>(position, depth);
        let total: u64 = if depth == 0 { 1 } else { moves.iter().map(|(_, n)| n).sum() };
        let elapsed = start.elapsed();
        debug!(depth, total, elapsed_ms = elapsed.as_millis() as u64, "perft finished");
        PerftReport { depth, moves, total, elapsed }
    }

    /// Leaf nodes per second; 0 when the run was too fast to time.
    pub fn nodes_per_second(&self) -> u64 {
        let micros = self.elapsed.as_micros();
        if micros == 0 {
            return 0;
        }
        (u128::from(self.total) * 1_000_000 / micros) as u64
    }
}

impl fmt::Display for PerftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mv, count) in &self.moves {
            writeln!(f, "{mv}: {count}")?;
        }
        writeln!(f)?;
        write!(f, "Total: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::Captures;

    #[test]
    fn perft_depth_0() {
        let mut position = Position::starting_position();
        assert_eq!(perft(&mut position, 0), 1);
        assert!(divide(&mut position, 0).is_empty());
    }

    #[test]
    fn perft_startpos_shallow() {
        let mut position = Position::starting_position();
        assert_eq!(perft(&mut position, 1), 20);
        assert_eq!(perft(&mut position, 2), 400);
        assert_eq!(perft(&mut position, 3), 8_902);
        assert_eq!(position, Position::starting_position());
    }

    #[test]
    fn divide_matches_perft() {
        let mut position: Position =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1".parse().unwrap();
        let breakdown = divide(&mut position, 2);
        assert_eq!(breakdown.len(), 48);
        assert_eq!(breakdown.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
        let expected_order: Vec<_> = legal_moves::<All>(&mut position).iter().copied().collect();
        let order: Vec<_> = breakdown.iter().map(|(mv, _)| *mv).collect();
        assert_eq!(order, expected_order);
    }

    #[test]
    fn captures_only_perft() {
        // From the start no captures exist at the root.
        let mut position = Position::starting_position();
        assert_eq!(perft_with::<Captures>(&mut position, 2), 0);
    }

    #[test]
    fn report_display() {
        let mut position: Position = "4k3/8/8/8/8/8/8/R3K3 b - - 0 1".parse().unwrap();
        let report = PerftReport::run::<All>(&mut position, 1);
        assert_eq!(report.total, 5);
        let text = report.to_string();
        assert!(text.starts_with("e8d7: 1\n"));
        assert!(text.ends_with("\n\nTotal: 5"));
    }
}
