//! Common error infrastructure for hunt-core.
//!
//! Every failure this crate reports is per-player and locally recoverable: it is
//! returned upward as a value and rendered as a message by the chat layer, never
//! treated as fatal to the process.
//!
//! # Design Principles
//!
//! - **Type Safety**: Session conflicts carry the data the caller needs to render them
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Panics**: Nothing in the rules layer aborts on bad player input

use crate::combat::BattleStatus;
use crate::quest::QuestId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The player can act differently right now (wait, rest, fight on)
/// - **Validation**: The request itself was malformed or referenced nothing
/// - **Internal**: A collaborator (storage, configuration) failed; not the player's doing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same request may succeed once the session state changes.
    ///
    /// Examples: already in battle, still resting
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown action token, unknown quest id
    Validation,

    /// Internal error - raised outside the rules layer, surfaced for logging.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all hunt-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics, logging fields, and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Per-player session failures.
///
/// None of these change any state: the request is rejected and the existing
/// sessions are left exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    #[error("no active battle")]
    NoActiveBattle,

    #[error("no tracks to follow")]
    NoTrackLead,

    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error("already fighting {} ({} minutes left)", .0.enemy_name, .0.remaining_minutes)]
    InBattle(BattleStatus),

    #[error("still resting ({remaining_minutes} minutes left)")]
    Resting { remaining_minutes: i64 },

    #[error("too exhausted to explore, rest first")]
    Exhausted,

    #[error("quest #{0} not found")]
    UnknownQuest(QuestId),

    #[error("quest requires level {required}, player is level {actual}")]
    QuestLevelTooLow { required: u32, actual: u32 },

    #[error("quest #{0} already accepted")]
    QuestAlreadyAccepted(QuestId),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActiveBattle
            | Self::NoTrackLead
            | Self::InBattle(_)
            | Self::Resting { .. }
            | Self::Exhausted
            | Self::QuestLevelTooLow { .. } => ErrorSeverity::Recoverable,
            Self::UnknownAction(_) | Self::UnknownQuest(_) | Self::QuestAlreadyAccepted(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActiveBattle => "NO_ACTIVE_BATTLE",
            Self::NoTrackLead => "NO_TRACK_LEAD",
            Self::UnknownAction(_) => "UNKNOWN_ACTION",
            Self::InBattle(_) => "ALREADY_IN_BATTLE",
            Self::Resting { .. } => "ALREADY_RESTING",
            Self::Exhausted => "EXHAUSTED",
            Self::UnknownQuest(_) => "UNKNOWN_QUEST",
            Self::QuestLevelTooLow { .. } => "QUEST_LEVEL_TOO_LOW",
            Self::QuestAlreadyAccepted(_) => "QUEST_ALREADY_ACCEPTED",
        }
    }
}
