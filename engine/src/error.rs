use thiserror::Error;
use touchgrass_store::StoreError;
use touchgrass_types::{ChallengeId, ChallengeStatus};
use touchgrass_validation::ValidationFault;

/// Errors surfaced by the lifecycle engine.
///
/// `Conflict`, `InvalidState`, and `NotFound` are terminal for the call.
/// `Validation` is retryable by the caller: the challenge stays active.
/// `Persistence` is surfaced only after the engine's own bounded retries.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("a challenge is already active for user {0}")]
    Conflict(String),

    #[error("challenge {id} is {actual}; the operation requires an active challenge")]
    InvalidState {
        id: ChallengeId,
        actual: ChallengeStatus,
    },

    #[error("validation fault: {0}")]
    Validation(#[from] ValidationFault),

    #[error("persistence fault: {0}")]
    Persistence(#[source] StoreError),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(key) => EngineError::NotFound(key),
            StoreError::Duplicate(key) => EngineError::Conflict(key),
            other => EngineError::Persistence(other),
        }
    }
}
