use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::error::MoveGenError;
use super::super::types::{pop_lsb, Color, MoveList, Piece, Square};
use super::super::Position;

impl Position {
    pub(crate) fn generate_knight_moves(
        &self,
        us: Color,
        target: u64,
        moves: &mut MoveList,
    ) -> Result<(), MoveGenError> {
        let mut knights = self.pieces(us, Piece::Knight);
        while knights != 0 {
            let from = Square::from_index(pop_lsb(&mut knights));
            self.push_piece_moves(
                from,
                KNIGHT_ATTACKS[from.index()] & target,
                (us, Piece::Knight),
                moves,
            )?;
        }
        Ok(())
    }
}
