// Unimax self-play chess: board model, evaluator and bounded-depth search
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, Move, Piece, PieceKind, Side, Square};
pub use config::EngineConfig;
pub use error::UnimaxError;
pub use game::{create_game, GameState};
