//! Error types raised by repository implementations.

use hunt_core::PlayerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("player repository lock was poisoned")]
    LockPoisoned,

    #[error("player {0} is not registered")]
    PlayerNotFound(PlayerId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
