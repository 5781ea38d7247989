use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;
use unimax::search::shuffle::{game_seed, make_rng};
use unimax::selfplay::{play_game, play_game_with, write_jsonl, GameRecord, Outcome};
use unimax::EngineConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Watch two unimax searchers play chess against each other", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Mobility denominator of the unimax score
    #[arg(long)]
    denominator: Option<f64>,

    /// Stop each game after this many plies
    #[arg(long)]
    max_plies: Option<usize>,

    /// Seed for move-order shuffling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Avoid returning to boards seen since the last capture
    #[arg(long, default_value_t = false)]
    repetition_guard: bool,

    /// Opening moves in coordinate notation, comma separated (e.g. e2e4,e7e5)
    #[arg(long, value_delimiter = ',')]
    opening: Vec<String>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Write game records as JSON lines
    #[arg(long)]
    jsonl_out: Option<PathBuf>,

    /// Do not print the board after every ply
    #[arg(long)]
    quiet: bool,
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut cfg = match &args.config {
        Some(p) => EngineConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.depth { cfg.depth = d; }
    if let Some(d) = args.denominator { cfg.mobility_denominator = d; }
    if let Some(m) = args.max_plies { cfg.max_plies = m; }
    if args.seed.is_some() { cfg.seed = args.seed; }
    if args.repetition_guard { cfg.repetition_guard = true; }
    if !args.opening.is_empty() { cfg.opening = args.opening.clone(); }
    cfg.validate()?;
    Ok(cfg)
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::KingCaptured { winner } => format!("{:?} captured the king", winner),
        Outcome::Stuck { side } => format!("{:?} has no moves", side),
        Outcome::NoMoveFound { side } => format!("search found no move for {:?}", side),
        Outcome::PlyLimit => "ply limit reached".to_string(),
    }
}

fn watch_one(cfg: &EngineConfig) -> Result<GameRecord> {
    let mut rng = make_rng(cfg.seed);
    println!("{}\n", unimax::create_game().board());
    let record = play_game_with(cfg, &mut rng, |game, ply| {
        println!("Turn {} ({:?}): {}  score={:.3}", ply.ply + 1, ply.side, ply.mv, game.score());
        println!("{}", game.board());
        if let Some(p) = ply.captured {
            println!("Captured {}", p.glyph());
        }
        println!();
    })?;
    println!("Game over: {} after {} plies", describe(&record.outcome), record.plies.len());
    let captured: Vec<String> = record.captures().map(|p| p.glyph().to_string()).collect();
    if !captured.is_empty() {
        println!("Captured pieces: {}", captured.join(" "));
    }
    Ok(record)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = build_config(&args)?;

    let t0 = Instant::now();
    let records = if args.games == 1 && !args.quiet {
        vec![watch_one(&cfg)?]
    } else {
        let base = cfg.seed.unwrap_or_else(rand::random);
        let pb = ProgressBar::new(args.games as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let mut out = Vec::with_capacity(args.games);
        for gi in 0..args.games {
            let seed = game_seed(base, gi);
            let mut rng = SmallRng::seed_from_u64(seed);
            let game_cfg = EngineConfig { seed: Some(seed), ..cfg.clone() };
            let rec = play_game(&game_cfg, &mut rng)?;
            pb.set_message(describe(&rec.outcome));
            pb.inc(1);
            out.push(rec);
        }
        pb.finish_and_clear();
        out
    };
    let elapsed = t0.elapsed();

    if records.len() > 1 {
        let mut white = 0; let mut black = 0; let mut stuck = 0; let mut limit = 0;
        for r in &records {
            match r.outcome {
                Outcome::KingCaptured { winner: unimax::Side::White } => white += 1,
                Outcome::KingCaptured { winner: unimax::Side::Black } => black += 1,
                Outcome::Stuck { .. } | Outcome::NoMoveFound { .. } => stuck += 1,
                Outcome::PlyLimit => limit += 1,
            }
        }
        let plies: usize = records.iter().map(|r| r.plies.len()).sum();
        println!(
            "games={} white_wins={} black_wins={} stuck={} ply_limit={} avg_plies={:.1} elapsed={:.2}s",
            records.len(), white, black, stuck, limit, plies as f64 / records.len() as f64, elapsed.as_secs_f64()
        );
    }

    if let Some(path) = &args.jsonl_out {
        write_jsonl(&records, path).with_context(|| format!("writing {}", path.display()))?;
        println!("wrote {} game record(s) to {}", records.len(), path.display());
    }
    Ok(())
}
