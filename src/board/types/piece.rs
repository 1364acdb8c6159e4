//! Piece and color types.
//!
//! A `(Color, Piece)` pair packs into a 4-bit code, `color_bit(8) | type`,
//! which doubles as the index of that piece's bitboard in the position
//! word array.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
///
/// Discriminants are the 4-bit piece codes for white; OR-ing in the black
/// color bit (8) yields the black codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Piece {
    King = 1,
    Queen = 2,
    Rook = 3,
    Bishop = 4,
    Knight = 5,
    Pawn = 6,
}

impl Piece {
    /// The piece-type half of the 4-bit code (1-6)
    #[inline]
    #[must_use]
    pub(crate) const fn code(self) -> usize {
        self as usize
    }

    /// Decode a piece type from the low 3 bits of a piece code
    #[must_use]
    pub(crate) const fn from_code(code: usize) -> Option<Piece> {
        match code & 7 {
            1 => Some(Piece::King),
            2 => Some(Piece::Queen),
            3 => Some(Piece::Rook),
            4 => Some(Piece::Bishop),
            5 => Some(Piece::Knight),
            6 => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// Parse a piece from a character (case-insensitive)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Promotion piece choices in order of typical preference (queen first)
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The color's word-array base: 0 for White, 8 for Black. This is both
    /// the occupancy index and the color bit of the piece codes.
    #[inline]
    #[must_use]
    pub(crate) const fn base(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 8,
        }
    }

    /// Dense 0/1 index, used for the per-color key and attack tables
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Pack a `(Color, Piece)` pair into its 4-bit code
#[inline]
#[must_use]
pub(crate) const fn piece_code(color: Color, piece: Piece) -> usize {
    color.base() | piece.code()
}

/// Decode a 4-bit piece code; 0 (and the unused codes 7, 8, 15) decode to None
#[must_use]
pub(crate) const fn decode_piece(code: usize) -> Option<(Color, Piece)> {
    let color = if code & 8 != 0 {
        Color::Black
    } else {
        Color::White
    };
    match Piece::from_code(code) {
        Some(piece) => Some((color, piece)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_codes_roundtrip() {
        for color in [Color::White, Color::Black] {
            for piece in [
                Piece::King,
                Piece::Queen,
                Piece::Rook,
                Piece::Bishop,
                Piece::Knight,
                Piece::Pawn,
            ] {
                let code = piece_code(color, piece);
                assert_eq!(decode_piece(code), Some((color, piece)));
            }
        }
    }

    #[test]
    fn test_code_is_bitboard_index() {
        assert_eq!(piece_code(Color::White, Piece::King), 1);
        assert_eq!(piece_code(Color::White, Piece::Pawn), 6);
        assert_eq!(piece_code(Color::Black, Piece::King), 9);
        assert_eq!(piece_code(Color::Black, Piece::Pawn), 14);
    }

    #[test]
    fn test_invalid_codes_decode_to_none() {
        for code in [0usize, 7, 8, 15] {
            assert_eq!(decode_piece(code), None);
        }
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(Piece::Knight.to_fen_char(Color::White), 'N');
        assert_eq!(Piece::Knight.to_fen_char(Color::Black), 'n');
        assert_eq!(Piece::from_char('Q'), Some(Piece::Queen));
        assert_eq!(Piece::from_char('x'), None);
    }
}
