//! Engine error taxonomy.
//!
//! Every fallible engine operation returns [`EngineError`]. The variants map
//! one-to-one onto how a UI shell should react:
//!
//! | Variant | Reaction |
//! |---|---|
//! | `InsufficientContent` | fatal to session start, "try again later" |
//! | `ContentUnavailable` | retry the same operation |
//! | `RoundAlreadyResolved` | ignore silently |
//! | `CorruptRecord` | discard the record, start a fresh Daily session |
//! | `InvalidChoice` | reject, round stays active |

use thiserror::Error;

/// Errors produced by the daily game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The content source produced fewer than two eligible candidates.
    #[error("insufficient content: {eligible} eligible candidate(s), need at least 2")]
    InsufficientContent { eligible: usize },

    /// Fetching candidates or resolving an asset failed or timed out.
    #[error("content unavailable: {reason}")]
    ContentUnavailable { reason: String },

    /// A choice arrived for a round that already has an outcome.
    #[error("round {round} already resolved")]
    RoundAlreadyResolved { round: usize },

    /// A stored daily record could not be decoded.
    #[error("corrupt daily record: {reason}")]
    CorruptRecord { reason: String },

    /// A choice did not name a card of the active round.
    #[error("invalid choice {card:?} for round {round}")]
    InvalidChoice { round: usize, card: String },

    /// Configuration could not be parsed.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl EngineError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        EngineError::ContentUnavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        EngineError::CorruptRecord {
            reason: reason.into(),
        }
    }

    /// Whether re-invoking the failed operation may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::ContentUnavailable { .. })
    }

    /// Whether the error should be swallowed instead of surfaced to the player.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, EngineError::RoundAlreadyResolved { .. })
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
