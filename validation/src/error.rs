use thiserror::Error;

/// The validator could not produce a verdict.
///
/// Faults are retryable from the caller's perspective and are distinct from
/// a negative verdict: they must never be coerced into one.
#[derive(Debug, Clone, Error)]
pub enum ValidationFault {
    #[error("validation service unavailable: {0}")]
    Unavailable(String),

    #[error("validation timed out after {0}s")]
    Timeout(u64),

    #[error("malformed proof submission: {0}")]
    MalformedInput(String),
}
