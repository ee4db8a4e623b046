//! Unified error types surfaced by the runtime API.
//!
//! Session rule violations and repository failures are kept apart so a chat
//! surface can show the former to the player and log the latter.

use thiserror::Error;

use hunt_core::{ErrorSeverity, GameError, SessionError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires a player repository before building")]
    MissingRepository,

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,
}

impl RuntimeError {
    /// The session rule that rejected the request, if that is what happened.
    pub fn as_session(&self) -> Option<&SessionError> {
        match self {
            Self::Session(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the message is meant for the player rather than an operator.
    pub fn is_player_facing(&self) -> bool {
        matches!(
            self,
            Self::Session(_) | Self::Repository(RepositoryError::PlayerNotFound(_))
        )
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Session(err) => err.severity(),
            Self::Repository(RepositoryError::PlayerNotFound(_)) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Session(err) => err.error_code(),
            Self::Repository(RepositoryError::PlayerNotFound(_)) => "PLAYER_NOT_FOUND",
            Self::Repository(_) => "REPOSITORY_FAILURE",
            Self::MissingRepository => "MISSING_REPOSITORY",
            Self::MissingOracles => "MISSING_ORACLES",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::PlayerId;

    #[test]
    fn session_errors_pass_through() {
        let err = RuntimeError::from(SessionError::NoActiveBattle);
        assert_eq!(err.to_string(), "no active battle");
        assert_eq!(err.error_code(), "NO_ACTIVE_BATTLE");
        assert!(err.is_player_facing());
        assert_eq!(err.as_session(), Some(&SessionError::NoActiveBattle));
    }

    #[test]
    fn io_failures_are_internal() {
        let err = RuntimeError::from(RepositoryError::Io(std::io::Error::other("disk")));
        assert_eq!(err.severity(), ErrorSeverity::Internal);
        assert!(!err.is_player_facing());

        let missing = RuntimeError::from(RepositoryError::PlayerNotFound(PlayerId(3)));
        assert!(missing.is_player_facing());
    }
}
