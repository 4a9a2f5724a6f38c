//! Engine error types.
//!
//! Two families:
//! - `PlayBlock`: expected validation outcomes from `can_play`. Returned, never
//!   raised, and exhaustively enumerable so a UI can explain a blocked action.
//! - `EngineError`: precondition or data-integrity violations. These mean the
//!   caller skipped validation or passed an id the catalogs do not know.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;
use crate::geography::StateId;

/// Why a card cannot be played right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "kebab-case")]
pub enum PlayBlock {
    /// The per-turn play limit is reached.
    #[error("play-limit")]
    PlayLimit,
    /// The effective cost exceeds the current player's IP.
    #[error("insufficient-ip")]
    InsufficientIp,
    /// A ZONE card was offered without a target state.
    #[error("missing-target")]
    MissingTarget,
}

/// Precondition and data-integrity failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("card {0} is not in the current player's hand")]
    CardNotInHand(CardId),

    #[error("unknown card id {0}")]
    UnknownCard(CardId),

    #[error("unknown state id {0}")]
    UnknownState(StateId),

    #[error("ZONE card {0} requires a target state")]
    MissingTarget(CardId),

    #[error("play rejected: {0}")]
    PlayRejected(PlayBlock),

    #[error("invalid card {id}: {reason}")]
    InvalidCard { id: CardId, reason: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("snapshot error: {message}")]
    Snapshot { message: String },
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_block_reasons() {
        assert_eq!(PlayBlock::PlayLimit.to_string(), "play-limit");
        assert_eq!(PlayBlock::InsufficientIp.to_string(), "insufficient-ip");
        assert_eq!(PlayBlock::MissingTarget.to_string(), "missing-target");
        assert_eq!(
            serde_json::to_string(&PlayBlock::InsufficientIp).unwrap(),
            r#""insufficient-ip""#
        );
    }

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::PlayRejected(PlayBlock::PlayLimit);
        assert_eq!(err.to_string(), "play rejected: play-limit");

        let err = EngineError::UnknownState(StateId::new("ZZ"));
        assert_eq!(err.to_string(), "unknown state id ZZ");
    }
}
