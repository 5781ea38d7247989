use clap::Parser;
use rayon::prelude::*;
use std::time::Instant;
use unimax::board::{Board, Side};
use unimax::perft::perft;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Pseudo-legal move-tree counter for the unimax board")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Side to move first: 'white' or 'black'
    #[arg(long, default_value = "white")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print the node count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn parse_side(s: &str) -> anyhow::Result<Side> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("invalid side {s:?}: use 'white' or 'black'"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let side = parse_side(&args.side)?;
    let board = Board::startpos();
    if args.depth == 0 {
        println!("nodes: 1");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let per_move: Vec<(String, u64)> = pool.install(|| {
        board
            .legal_moves(side)
            .par_iter()
            .map(|&mv| {
                let mut child = board.clone();
                child.apply(mv);
                (mv.to_string(), perft(&child, side.opposite(), args.depth - 1))
            })
            .collect()
    });
    let dt = t0.elapsed().as_secs_f64();
    let nodes: u64 = per_move.iter().map(|(_, n)| n).sum();

    if args.divide {
        for (mv, n) in &per_move { println!("{mv}: {n}"); }
    }
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
