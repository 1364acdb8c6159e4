use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::position::{
    pack_status, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, KEY, STATUS,
};
use super::types::bitboard::{RANK_1, RANK_3, RANK_6, RANK_8};
use super::types::{bit, file_to_index, piece_code, rank_to_index, Color, Move, Piece, Square};
use super::Position;

/// Drop an en passant square that no double pawn push could have produced:
/// it must sit on the mover-relative rank with the pushed pawn behind it and
/// empty squares on it and in front of it.
fn validated_ep(position: &Position, side: Color, sq: Square) -> Option<Square> {
    let s = sq.index();
    let occupied = position.occupied();
    match side {
        Color::White => {
            if bit(s) & RANK_6 == 0 {
                return None;
            }
            let pawn_behind = position.pieces(Color::Black, Piece::Pawn) & bit(s - 8) != 0;
            let clear = occupied & (bit(s) | bit(s + 8)) == 0;
            (pawn_behind && clear).then_some(sq)
        }
        Color::Black => {
            if bit(s) & RANK_3 == 0 {
                return None;
            }
            let pawn_behind = position.pieces(Color::White, Piece::Pawn) & bit(s + 8) != 0;
            let clear = occupied & (bit(s) | bit(s - 8)) == 0;
            (pawn_behind && clear).then_some(sq)
        }
    }
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid or describes a board no
    /// valid position can represent (missing kings, pawns on the back
    /// ranks). Castling rights without the matching king and rook on their
    /// home squares are silently dropped, as is an implausible en passant
    /// square.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Parse piece placement
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if c.is_ascii_digit() {
                    file += c.to_digit(10).unwrap() as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    let b = bit(Square::new(7 - rank_idx, file).index());
                    position.0[piece_code(color, piece)] |= b;
                    position.0[color.base()] |= b;
                    file += 1;
                }
            }
        }

        // A position must hold exactly one king per side and no pawn on a
        // back rank, or the core invariants cannot hold.
        for color in [Color::White, Color::Black] {
            let kings = position.pieces(color, Piece::King).count_ones();
            if kings != 1 {
                return Err(FenError::InvalidKingCount { color, count: kings });
            }
        }
        let pawns =
            position.pieces(Color::White, Piece::Pawn) | position.pieces(Color::Black, Piece::Pawn);
        let stranded = pawns & (RANK_1 | RANK_8);
        if stranded != 0 {
            return Err(FenError::PawnOnBackRank {
                square: Square::from_index(stranded.trailing_zeros() as usize),
            });
        }

        // Parse side to move
        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Parse castling rights
        let mut castle_bits = 0u64;
        for c in parts[2].chars() {
            match c {
                'K' => castle_bits |= CASTLE_WK,
                'Q' => castle_bits |= CASTLE_WQ,
                'k' => castle_bits |= CASTLE_BK,
                'q' => castle_bits |= CASTLE_BQ,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        // A right is only meaningful with king and rook on their home squares
        if position.pieces(Color::White, Piece::King) & bit(4) == 0 {
            castle_bits &= !(CASTLE_WK | CASTLE_WQ);
        }
        if position.pieces(Color::White, Piece::Rook) & bit(7) == 0 {
            castle_bits &= !CASTLE_WK;
        }
        if position.pieces(Color::White, Piece::Rook) & bit(0) == 0 {
            castle_bits &= !CASTLE_WQ;
        }
        if position.pieces(Color::Black, Piece::King) & bit(60) == 0 {
            castle_bits &= !(CASTLE_BK | CASTLE_BQ);
        }
        if position.pieces(Color::Black, Piece::Rook) & bit(63) == 0 {
            castle_bits &= !CASTLE_BK;
        }
        if position.pieces(Color::Black, Piece::Rook) & bit(56) == 0 {
            castle_bits &= !CASTLE_BQ;
        }

        // Parse en passant target
        let ep = if parts[3] == "-" {
            None
        } else {
            let chars: Vec<char> = parts[3].chars().collect();
            if chars.len() == 2
                && ('a'..='h').contains(&chars[0])
                && ('1'..='8').contains(&chars[1])
            {
                let sq = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
                validated_ep(&position, side, sq)
            } else {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
        };

        // Parse clocks (optional)
        let halfmove = if parts.len() >= 5 {
            parts[4].parse().unwrap_or(0)
        } else {
            0
        };
        let fullmove = if parts.len() >= 6 {
            parts[5].parse().unwrap_or(1)
        } else {
            1
        };

        position.0[STATUS] = pack_status(side, castle_bits, ep, halfmove, fullmove);
        position.0[KEY] = position.compute_key();
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible
    /// parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.side_to_move() == Color::White {
            "w"
        } else {
            "b"
        };
        let mut castling = String::new();
        if self.has_castling(CASTLE_WK) {
            castling.push('K');
        }
        if self.has_castling(CASTLE_WQ) {
            castling.push('Q');
        }
        if self.has_castling(CASTLE_BK) {
            castling.push('k');
        }
        if self.has_castling(CASTLE_BQ) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why
    /// parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_core::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();

        // Validate square characters
        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from_sq = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to_sq = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        // Parse promotion piece if present
        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4]).ok_or(MoveParseError::InvalidPromotion {
                char: chars[4],
            })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        // Find matching legal move
        let legal_moves = self.legal_moves().map_err(|_| MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })?;
        for legal_move in &legal_moves {
            if legal_move.from() == from_sq
                && legal_move.to() == to_sq
                && legal_move.promotion() == promotion
            {
                return Ok(*legal_move);
            }
        }

        Err(MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and apply it in one call, returning the successor
    /// position.
    ///
    /// # Example
    /// ```
    /// use chess_core::Position;
    ///
    /// let position = Position::new();
    /// let after = position.make_move_uci("e2e4").unwrap();
    /// assert_eq!(after.make_move_uci("e7e5").unwrap().fullmove_number(), 2);
    /// ```
    pub fn make_move_uci(&self, uci: &str) -> Result<Position, MoveParseError> {
        let mv = self.parse_move(uci)?;
        Ok(self.make_move(mv))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
