use super::super::attack_tables::{PAWN_ATTACKS, PAWN_PUSHES};
use super::super::error::MoveGenError;
use super::super::types::bitboard::{RANK_1, RANK_2, RANK_7, RANK_8};
use super::super::types::{bit, pop_lsb, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};
use super::super::Position;

impl Position {
    pub(crate) fn generate_pawn_moves(
        &self,
        us: Color,
        tactical_only: bool,
        moves: &mut MoveList,
    ) -> Result<(), MoveGenError> {
        let them = us.opponent();
        let empty = !self.occupied();
        let c = us.index();
        let promotion_rank = if us == Color::White { RANK_8 } else { RANK_1 };
        let start_rank = if us == Color::White { RANK_2 } else { RANK_7 };
        let ep_mask = self.en_passant_target().map_or(0, |sq| bit(sq.index()));
        let capture_targets = self.occupancy(them) | ep_mask;

        let mut pawns = self.pieces(us, Piece::Pawn);
        while pawns != 0 {
            let from_idx = pop_lsb(&mut pawns);
            let from = Square::from_index(from_idx);

            // Advances. A push to the last rank is a promotion and is
            // emitted even in tactical mode; plain advances are not.
            let one = PAWN_PUSHES[c][from_idx] & empty;
            if one != 0 {
                let to_idx = one.trailing_zeros() as usize;
                let to = Square::from_index(to_idx);
                if one & promotion_rank != 0 {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new(from, to, (us, Piece::Pawn), None, Some(promo)))?;
                    }
                } else if !tactical_only {
                    moves.push(Move::new(from, to, (us, Piece::Pawn), None, None))?;
                    if bit(from_idx) & start_rank != 0 {
                        let two = PAWN_PUSHES[c][to_idx] & empty;
                        if two != 0 {
                            let to2 = Square::from_index(two.trailing_zeros() as usize);
                            moves.push(Move::new(from, to2, (us, Piece::Pawn), None, None))?;
                        }
                    }
                }
            }

            // Captures; the en passant square counts as a capture target.
            // Probing it finds nothing, which is exactly the encoding an en
            // passant capture wants.
            let mut caps = PAWN_ATTACKS[c][from_idx] & capture_targets;
            while caps != 0 {
                let to_idx = pop_lsb(&mut caps);
                let to = Square::from_index(to_idx);
                let captured = self.piece_at(to);
                if bit(to_idx) & promotion_rank != 0 {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new(from, to, (us, Piece::Pawn), captured, Some(promo)))?;
                    }
                } else {
                    moves.push(Move::new(from, to, (us, Piece::Pawn), captured, None))?;
                }
            }
        }
        Ok(())
    }
}
