use thiserror::Error;

use crate::board::Move;

#[derive(Debug, Error)]
pub enum UnimaxError {
    #[error("invalid square: {0:?} (expected file a-h and rank 1-8)")]
    InvalidSquare(String),

    #[error("invalid move: {0:?} (expected coordinate notation such as e2e4)")]
    InvalidMove(String),

    #[error("illegal move {0} in the current position")]
    IllegalMove(Move),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = UnimaxError> = std::result::Result<T, E>;
