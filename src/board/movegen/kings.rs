use super::super::attack_tables::{
    bishop_attacks, rook_attacks, CASTLE_PATH_BK, CASTLE_PATH_BQ, CASTLE_PATH_WK, CASTLE_PATH_WQ,
    KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::super::error::MoveGenError;
use super::super::position::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use super::super::types::{Color, Move, MoveList, Piece, Square};
use super::super::Position;

impl Position {
    pub(crate) fn generate_king_moves(
        &self,
        us: Color,
        target: u64,
        tactical_only: bool,
        moves: &mut MoveList,
    ) -> Result<(), MoveGenError> {
        let from = self.king_square(us);
        self.push_piece_moves(from, KING_ATTACKS[from.index()] & target, (us, Piece::King), moves)?;

        if tactical_only {
            return Ok(());
        }

        // Castling. The king's square and the square it passes over must be
        // unattacked; the destination is left to the post-move legality
        // filter.
        let them = us.opponent();
        let occupied = self.occupied();
        let wings = match us {
            Color::White => [
                (CASTLE_WK, CASTLE_PATH_WK, 5usize, 6usize),
                (CASTLE_WQ, CASTLE_PATH_WQ, 3, 2),
            ],
            Color::Black => [
                (CASTLE_BK, CASTLE_PATH_BK, 61, 62),
                (CASTLE_BQ, CASTLE_PATH_BQ, 59, 58),
            ],
        };
        for (right, path, mid, to) in wings {
            if !self.has_castling(right) || occupied & path != 0 {
                continue;
            }
            if self.is_square_attacked(from, them)
                || self.is_square_attacked(Square::from_index(mid), them)
            {
                continue;
            }
            moves.push(Move::new(
                from,
                Square::from_index(to),
                (us, Piece::King),
                None,
                None,
            ))?;
        }
        Ok(())
    }

    /// Returns true if any piece of `attacker` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let sq = square.index();

        // A pawn of the attacker reaches this square exactly when a pawn of
        // the defender standing here would attack it back.
        let pawn_sources = PAWN_ATTACKS[attacker.opponent().index()][sq];
        if self.pieces(attacker, Piece::Pawn) & pawn_sources != 0 {
            return true;
        }

        if self.pieces(attacker, Piece::Knight) & KNIGHT_ATTACKS[sq] != 0 {
            return true;
        }

        if self.pieces(attacker, Piece::King) & KING_ATTACKS[sq] != 0 {
            return true;
        }

        let occupied = self.occupied();
        let rook_like = self.pieces(attacker, Piece::Rook) | self.pieces(attacker, Piece::Queen);
        if rook_attacks(sq, occupied) & rook_like != 0 {
            return true;
        }
        let bishop_like =
            self.pieces(attacker, Piece::Bishop) | self.pieces(attacker, Piece::Queen);
        if bishop_attacks(sq, occupied) & bishop_like != 0 {
            return true;
        }

        false
    }

    /// Returns true if `color`'s king is attacked
    #[inline]
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
