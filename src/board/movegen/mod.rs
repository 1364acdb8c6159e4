mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::MoveGenError;
use super::types::{pop_lsb, Color, Move, MoveList, Piece, Square};
use super::Position;

impl Position {
    /// Generate moves for the side to move.
    ///
    /// Emits pseudo-legal moves in a fixed order (king, knights, pawns,
    /// sliders). With `tactical_only` the target mask shrinks to enemy
    /// pieces, quiet pawn advances are dropped (promotions stay), and
    /// castling is skipped. With `legal` every pseudo-legal move is played
    /// out and kept only if the mover's king is not left in check.
    pub fn generate(&self, legal: bool, tactical_only: bool) -> Result<MoveList, MoveGenError> {
        let us = self.side_to_move();
        let target = if tactical_only {
            self.occupancy(us.opponent())
        } else {
            !self.occupancy(us)
        };

        let mut moves = MoveList::new();
        self.generate_king_moves(us, target, tactical_only, &mut moves)?;
        self.generate_knight_moves(us, target, &mut moves)?;
        self.generate_pawn_moves(us, tactical_only, &mut moves)?;
        self.generate_slider_moves(us, target, &mut moves)?;

        if !legal {
            return Ok(moves);
        }

        let mut legal_moves = MoveList::new();
        for &mv in &moves {
            let next = self.make_move(mv);
            if !next.in_check(us) {
                legal_moves.push(mv)?;
            }
        }
        Ok(legal_moves)
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&self) -> Result<MoveList, MoveGenError> {
        self.generate(true, false)
    }

    /// Legal captures and promotions for the side to move
    pub fn tactical_moves(&self) -> Result<MoveList, MoveGenError> {
        self.generate(true, true)
    }

    /// Returns true if the side to move is checkmated
    pub fn is_checkmate(&self) -> Result<bool, MoveGenError> {
        Ok(self.in_check(self.side_to_move()) && self.legal_moves()?.is_empty())
    }

    /// Returns true if the side to move is stalemated
    pub fn is_stalemate(&self) -> Result<bool, MoveGenError> {
        Ok(!self.in_check(self.side_to_move()) && self.legal_moves()?.is_empty())
    }

    /// Emit one move per set bit of `targets`, probing the destination for
    /// the captured-piece field.
    pub(crate) fn push_piece_moves(
        &self,
        from: Square,
        mut targets: u64,
        moving: (Color, Piece),
        moves: &mut MoveList,
    ) -> Result<(), MoveGenError> {
        while targets != 0 {
            let to = Square::from_index(pop_lsb(&mut targets));
            moves.push(Move::new(from, to, moving, self.piece_at(to), None))?;
        }
        Ok(())
    }
}
