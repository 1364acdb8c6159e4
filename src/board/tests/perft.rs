//! Perft (performance test) for move generation correctness.

use crate::board::Position;
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902), (4, 197_281)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039), (3, 97_862)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812), (4, 43_238), (5, 674_624)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(1, 6), (2, 264), (3, 9467), (4, 422_333)],
    },
    TestPosition {
        name: "Position 5",
        fen: "rnbqkb1r/pp1p1ppp/2p5/4P3/2B5/8/PPP1NnPP/RNBQK2R w KQkq - 0 6",
        depths: &[(1, 42), (2, 1352), (3, 53_392)],
    },
    TestPosition {
        name: "Position 5 (CPW)",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        depths: &[(1, 44), (2, 1486), (3, 62_379)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(1, 46), (2, 2079), (3, 89_890)],
    },
    TestPosition {
        name: "En Passant Capture",
        fen: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        depths: &[(1, 31), (2, 707), (3, 21_637)],
    },
    TestPosition {
        name: "Promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
    TestPosition {
        name: "Castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

/// Boundary scenarios around en passant, castling, promotion, and check
/// interactions; totals are the published reference counts.
const BOUNDARY_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "En passant gives check",
        fen: "8/5bk1/8/2Pp4/8/1K6/8/8 w - d6 0 1",
        depths: &[(6, 824_064)],
    },
    TestPosition {
        name: "En passant capture is pinned",
        fen: "3k4/3p4/8/K1P4r/8/8/8/8 b - - 0 1",
        depths: &[(6, 1_015_133)],
    },
    TestPosition {
        name: "Castling gives check",
        fen: "5k2/8/8/8/8/8/8/4K2R w K - 0 1",
        depths: &[(6, 661_072)],
    },
    TestPosition {
        name: "Promotion out of check",
        fen: "2K2r2/4P3/8/8/8/8/8/3k4 w - - 0 1",
        depths: &[(6, 3_821_001)],
    },
    TestPosition {
        name: "Underpromotion gives check",
        fen: "8/P1k5/K7/8/8/8/8/8 w - - 0 1",
        depths: &[(6, 92_683)],
    },
    TestPosition {
        name: "Promotion to give check",
        fen: "4k3/1P6/8/8/8/8/K7/8 w - - 0 1",
        depths: &[(6, 217_342)],
    },
    TestPosition {
        name: "Self stalemate",
        fen: "K1k5/8/P7/8/8/8/8/8 w - - 0 1",
        depths: &[(6, 567_584)],
    },
    TestPosition {
        name: "Stalemate and checkmate",
        fen: "8/k1P5/8/1K6/8/8/8/8 w - - 0 1",
        depths: &[(7, 567_584)],
    },
    TestPosition {
        name: "Double check",
        fen: "8/8/2k5/5q2/5n2/8/5K2/8 b - - 0 1",
        depths: &[(4, 23_527)],
    },
];

/// Full-depth conformance rows for the seed scenarios. These expand into the
/// hundreds of millions of nodes; run explicitly with `--ignored`.
const DEEP_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(5, 4_865_609), (6, 119_060_324)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(4, 4_085_603), (5, 193_690_690)],
    },
    TestPosition {
        name: "Position 3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(6, 11_030_083), (7, 178_633_661)],
    },
    TestPosition {
        name: "Position 4",
        fen: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        depths: &[(5, 15_833_292), (6, 706_045_033)],
    },
    TestPosition {
        name: "Position 6",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        depths: &[(4, 3_894_594), (5, 164_075_551), (6, 6_923_051_137)],
    },
];

fn run_suite(suite: &[TestPosition]) {
    for position in suite {
        let board = Position::from_fen(position.fen);

        for &(depth, expected) in position.depths {
            let start = Instant::now();
            let nodes = board.perft(depth).unwrap();
            let duration = start.elapsed();

            println!(
                "  {} depth {}: {} nodes in {:?}",
                position.name, depth, nodes, duration
            );

            assert_eq!(
                nodes, expected,
                "Perft failed for position '{}' at depth {}. Expected: {}, Got: {}",
                position.name, depth, expected, nodes
            );
        }
    }
}

#[test]
fn test_perft_positions() {
    run_suite(TEST_POSITIONS);
}

#[test]
fn test_perft_boundary_positions() {
    run_suite(BOUNDARY_POSITIONS);
}

#[test]
#[ignore = "expands hundreds of millions of nodes; run with --ignored"]
fn test_perft_deep_conformance() {
    run_suite(DEEP_POSITIONS);
}
