use std::env;
use std::time::Instant;

use chess_core::Position;

const DEFAULT_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn main() {
    let args: Vec<String> = env::args().collect();
    let fen = args.get(1).map_or(DEFAULT_FEN, String::as_str);
    let depth: usize = args.get(2).and_then(|d| d.parse().ok()).unwrap_or(3);

    let board = match Position::try_from_fen(fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Bad FEN: {err}");
            std::process::exit(1);
        }
    };

    println!("Perft divide at depth {depth}");
    println!("{}", board.to_fen());
    let start = Instant::now();
    let divide = board.perft_divide(depth).expect("move generation failed");
    let mut total = 0u64;
    for (mv, count) in &divide {
        println!("  {mv}: {count}");
        total += count;
    }
    let duration = start.elapsed();
    println!("Total: {total} in {duration:?}");
}
