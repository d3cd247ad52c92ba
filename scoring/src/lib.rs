//! Scoring policy for the touchgrass core.
//!
//! Pure, stateless rules mapping challenge outcomes to FHI deltas, streak
//! transitions, and achievement unlocks. No I/O: the lifecycle engine feeds
//! these functions the current profile and persists whatever comes back.

pub mod achievements;
pub mod policy;

pub use achievements::evaluate_unlocks;
pub use policy::{settle_expiry, settle_failure, settle_success, ScoreOutcome};
