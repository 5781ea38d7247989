use clap::Parser;
use std::time::Instant;
use unimax::search::unimax::{SearchParams, Searcher};
use unimax::{GameState, Side};

#[derive(Parser, Debug)]
#[command(name = "unimax-bench", version, about = "Benchmark unimax search speed from the start position")]
struct Args {
    /// Fixed search depth
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Mobility denominator
    #[arg(long, default_value_t = unimax::config::DEFAULT_MOBILITY_DENOMINATOR)]
    denominator: f64,

    /// Shuffle seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Repeat the search this many times
    #[arg(long, default_value_t = 10)]
    iterations: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let game = GameState::from_board(unimax::Board::startpos(), args.denominator);

    let mut s = Searcher::seeded(args.seed);
    let mut nodes = 0u64;
    let mut last = None;
    let t0 = Instant::now();
    for _ in 0..args.iterations.max(1) {
        let r = s.search(&game, Side::White, SearchParams { depth: args.depth });
        nodes += r.nodes;
        last = Some(r);
    }
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    if let Some(r) = last {
        println!(
            "bestmove={} value={:.3} nodes={} pruned={} elapsed={:.3}s nps={:.1}",
            r.best_move.map_or_else(|| "(none)".to_string(), |m| m.to_string()),
            r.value, nodes, r.pruned, dt.as_secs_f64(), nps
        );
    }
}
