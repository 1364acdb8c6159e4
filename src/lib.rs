// Crate root - export modules
pub mod board;
mod zobrist;

pub use board::{
    Color, FenError, Move, MoveGenError, MoveList, MoveParseError, Piece, Position, Square,
    SquareError,
};
