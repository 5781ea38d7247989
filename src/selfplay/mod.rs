use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Move, Piece, PieceKind, Side};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::game::GameState;
use crate::search::shuffle::game_seed;
use crate::search::unimax::{SearchParams, Searcher};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlyRecord {
    pub ply: usize,
    pub side: Side,
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Played from the configured opening rather than chosen by the search.
    #[serde(default)]
    pub book: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    KingCaptured { winner: Side },
    /// The side to act had no pseudo-legal move.
    Stuck { side: Side },
    /// Moves existed but the search returned none, e.g. every root child
    /// was a previously visited board.
    NoMoveFound { side: Side },
    PlyLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: Option<u64>,
    pub plies: Vec<PlyRecord>,
    pub outcome: Outcome,
    /// Cached score of the final state (incrementally maintained).
    pub final_score: f64,
}

impl GameRecord {
    pub fn captures(&self) -> impl Iterator<Item = Piece> + '_ {
        self.plies.iter().filter_map(|p| p.captured)
    }
}

/// Plays one automated game, white first, with the search picking every
/// move after the opening.
pub fn play_game<R: Rng>(config: &EngineConfig, rng: &mut R) -> Result<GameRecord> {
    play_game_with(config, rng, |_, _| {})
}

/// Same as [`play_game`], calling `on_ply` with the state after each move.
pub fn play_game_with<R, F>(config: &EngineConfig, rng: &mut R, mut on_ply: F) -> Result<GameRecord>
where
    R: Rng,
    F: FnMut(&GameState, &PlyRecord),
{
    config.validate()?;
    let mut game = GameState::with_config(config);
    let mut plies: Vec<PlyRecord> = Vec::new();
    let mut side = Side::White;

    for raw in &config.opening {
        let mv: Move = raw.parse()?;
        let captured = game.play_checked(side, mv)?;
        let rec = PlyRecord { ply: plies.len(), side, mv, captured, book: true };
        on_ply(&game, &rec);
        plies.push(rec);
        side = side.opposite();
    }

    let mut searcher = Searcher::with_rng(rng);
    let params = SearchParams { depth: config.depth };
    let outcome = loop {
        if game.is_game_over() {
            break Outcome::KingCaptured { winner: surviving_king(&game).unwrap_or(side.opposite()) };
        }
        if plies.len() >= config.max_plies {
            break Outcome::PlyLimit;
        }
        let Some(mv) = searcher.search(&game, side, params).best_move else {
            break no_move_outcome(&game, side);
        };
        if config.repetition_guard {
            game.remember_position();
        }
        let captured = game.perform_move(mv);
        // A capture makes every earlier board unreachable.
        if captured.is_some() && config.repetition_guard {
            game.forget_positions();
        }
        let rec = PlyRecord { ply: plies.len(), side, mv, captured, book: false };
        on_ply(&game, &rec);
        plies.push(rec);
        side = side.opposite();
    };

    info!("game finished after {} plies: {:?} (score {:.3})", plies.len(), outcome, game.score());
    Ok(GameRecord { seed: config.seed, plies, outcome, final_score: game.score() })
}

/// Plays `games` games, the i-th seeded from `game_seed(base_seed, i)`.
pub fn play_games(config: &EngineConfig, games: usize, base_seed: u64) -> Result<Vec<GameRecord>> {
    let mut out = Vec::with_capacity(games);
    for gi in 0..games {
        let seed = game_seed(base_seed, gi);
        let mut rng = SmallRng::seed_from_u64(seed);
        let cfg = EngineConfig { seed: Some(seed), ..config.clone() };
        out.push(play_game(&cfg, &mut rng)?);
    }
    Ok(out)
}

fn no_move_outcome(game: &GameState, side: Side) -> Outcome {
    if game.count_legal_moves(side) == 0 {
        Outcome::Stuck { side }
    } else {
        Outcome::NoMoveFound { side }
    }
}

fn surviving_king(game: &GameState) -> Option<Side> {
    game.board().pieces().find(|(_, p)| p.kind() == PieceKind::King).map(|(_, p)| p.side())
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(records: &[GameRecord], path: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for r in records {
        serde_json::to_writer(&mut w, r)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
