//! Perft (performance test): recursive legal-move-tree enumeration.
//!
//! The canonical correctness harness for the generator and make-move.
//! Expansion is pseudo-legal with a post-move mover-in-check filter, so the
//! legality test runs exactly once per tree edge.

use super::error::MoveGenError;
use super::types::Move;
use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&self, depth: usize) -> Result<u64, MoveGenError> {
        if depth == 0 {
            return Ok(1);
        }

        let us = self.side_to_move();
        let moves = self.generate(false, false)?;
        let mut nodes = 0;
        for &mv in &moves {
            let next = self.make_move(mv);
            if next.in_check(us) {
                continue;
            }
            nodes += next.perft(depth - 1)?;
        }
        Ok(nodes)
    }

    /// Perft split by root move: each legal root move with the leaf count of
    /// its subtree. The per-move sums equal `perft(depth)`.
    pub fn perft_divide(&self, depth: usize) -> Result<Vec<(Move, u64)>, MoveGenError> {
        let us = self.side_to_move();
        let moves = self.generate(false, false)?;
        let mut results = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let next = self.make_move(mv);
            if next.in_check(us) {
                continue;
            }
            let nodes = if depth <= 1 { 1 } else { next.perft(depth - 1)? };
            #[cfg(feature = "logging")]
            log::debug!("divide {mv}: {nodes}");
            results.push((mv, nodes));
        }
        Ok(results)
    }
}
