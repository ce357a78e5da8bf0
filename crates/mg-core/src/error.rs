//! Error types for MissionGacha

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum GachaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Reward pool is empty")]
    EmptyPool,

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

/// Result type alias
pub type GachaResult<T> = Result<T, GachaError>;
