use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::error::MoveGenError;
use super::super::types::{pop_lsb, Color, MoveList, Piece, Square};
use super::super::Position;

impl Position {
    /// Queens, rooks, bishops, in that order
    pub(crate) fn generate_slider_moves(
        &self,
        us: Color,
        target: u64,
        moves: &mut MoveList,
    ) -> Result<(), MoveGenError> {
        let occupied = self.occupied();

        let mut queens = self.pieces(us, Piece::Queen);
        while queens != 0 {
            let from = Square::from_index(pop_lsb(&mut queens));
            self.push_piece_moves(
                from,
                queen_attacks(from.index(), occupied) & target,
                (us, Piece::Queen),
                moves,
            )?;
        }

        let mut rooks = self.pieces(us, Piece::Rook);
        while rooks != 0 {
            let from = Square::from_index(pop_lsb(&mut rooks));
            self.push_piece_moves(
                from,
                rook_attacks(from.index(), occupied) & target,
                (us, Piece::Rook),
                moves,
            )?;
        }

        let mut bishops = self.pieces(us, Piece::Bishop);
        while bishops != 0 {
            let from = Square::from_index(pop_lsb(&mut bishops));
            self.push_piece_moves(
                from,
                bishop_attacks(from.index(), occupied) & target,
                (us, Piece::Bishop),
                moves,
            )?;
        }

        Ok(())
    }
}
