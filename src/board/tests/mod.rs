//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN import/export and boundary validation
//! - `make_move.rs` - Make-move correctness and key maintenance
//! - `edge_cases.rs` - Special positions and moves
//! - `perft.rs` - Perft conformance suites
//! - `proptest.rs` - Property-based tests

mod perft;

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use crate::board::{Move, Position, Square};

    #[test]
    fn test_move_serde_roundtrip() {
        let position = Position::new();
        let mv = position.parse_move("g1f3").unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }

    #[test]
    fn test_square_serde_roundtrip() {
        let sq: Square = "e4".parse().unwrap();
        let json = serde_json::to_string(&sq).unwrap();
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sq);
    }
}
