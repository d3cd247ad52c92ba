//! Challenge lifecycle engine: the sole authority for challenge state
//! transitions and the one-active-challenge-per-user invariant.
//!
//! The engine is constructed with injected collaborators (persistence,
//! validator, clock) and exposes four operations to the presentation layer:
//! [`ChallengeEngine::create_challenge`],
//! [`ChallengeEngine::active_challenge`],
//! [`ChallengeEngine::submit_proof`], and
//! [`ChallengeEngine::fail_challenge`]. Expiry is computed lazily at the
//! start of every operation that touches active-challenge state; no
//! background job is required.
//!
//! Terminal transitions settle through a journal in store metadata: the
//! computed challenge + profile writes are recorded first, applied, then
//! cleared, and any operation that finds a dangling journal entry re-applies
//! it before proceeding. The writes are idempotent puts of final values, so
//! a retried or reconciled settlement lands exactly once.

pub mod engine;
pub mod error;
pub mod settlement;

pub use engine::ChallengeEngine;
pub use error::EngineError;
pub use settlement::{ChallengeSettlement, Resolution};
