//! Zobrist hashing for chess positions.
//!
//! Provides the random key tables behind the incrementally-updated 64-bit
//! position KEY: one key per (piece code, square), one for the side to move,
//! one per castling right, and one per en-passant file.

use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_code][square_index]; piece codes are 4-bit
    // color|type values, so the same code indexes bitboards and keys
    pub(crate) piece_keys: [[u64; 64]; 16],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only the file matters for the EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Fixed seed for reproducibility
        let mut piece_keys = [[0; 64]; 16];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: std::sync::LazyLock<ZobristKeys> =
    std::sync::LazyLock::new(ZobristKeys::new);
