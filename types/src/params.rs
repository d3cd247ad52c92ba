//! Engine parameters: the scoring and lifecycle knobs.

use serde::{Deserialize, Serialize};

/// Tunable parameters of the challenge lifecycle and scoring policy.
///
/// Product tuning happens here, not in code: every constant the engine or the
/// scoring policy consults lives in this struct. Fields left out of a config
/// file fall back to the touchgrass defaults individually.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineParams {
    /// Length of the challenge window in seconds. Default: 1 hour.
    #[serde(default = "default_challenge_duration_secs")]
    pub challenge_duration_secs: u64,

    /// FHI awarded for a validated completion.
    #[serde(default = "default_success_base_award")]
    pub success_base_award: u32,

    /// Extra FHI when the validator's confidence clears the bonus threshold.
    #[serde(default = "default_confidence_bonus")]
    pub confidence_bonus: u32,

    /// Confidence (0 to 100) the verdict must strictly exceed for the bonus.
    #[serde(default = "default_confidence_bonus_threshold")]
    pub confidence_bonus_threshold: u8,

    /// FHI deducted on a failed challenge, floored so the score stays >= 0.
    #[serde(default = "default_failure_penalty")]
    pub failure_penalty: u32,

    /// Whether letting a challenge expire applies the failure penalty.
    /// When false, expiry terminates the challenge with zero points and
    /// leaves the profile untouched.
    #[serde(default = "default_penalize_expiry")]
    pub penalize_expiry: bool,

    /// Upper bound on a single photo-validation call, in seconds.
    /// Exceeding it is a retryable fault, not a verdict.
    #[serde(default = "default_validation_timeout_secs")]
    pub validation_timeout_secs: u64,

    /// How many times the engine retries the combined terminal-state +
    /// profile write before surfacing a persistence fault.
    #[serde(default = "default_settle_retry_limit")]
    pub settle_retry_limit: u32,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_challenge_duration_secs() -> u64 {
    3600
}

fn default_success_base_award() -> u32 {
    25
}

fn default_confidence_bonus() -> u32 {
    5
}

fn default_confidence_bonus_threshold() -> u8 {
    80
}

fn default_failure_penalty() -> u32 {
    15
}

fn default_penalize_expiry() -> bool {
    true
}

fn default_validation_timeout_secs() -> u64 {
    30
}

fn default_settle_retry_limit() -> u32 {
    3
}

// ── Impl ───────────────────────────────────────────────────────────────

impl EngineParams {
    /// Touchgrass defaults: the intended production configuration.
    pub fn touchgrass_defaults() -> Self {
        Self {
            challenge_duration_secs: default_challenge_duration_secs(),
            success_base_award: default_success_base_award(),
            confidence_bonus: default_confidence_bonus(),
            confidence_bonus_threshold: default_confidence_bonus_threshold(),
            failure_penalty: default_failure_penalty(),
            penalize_expiry: default_penalize_expiry(),
            validation_timeout_secs: default_validation_timeout_secs(),
            settle_retry_limit: default_settle_retry_limit(),
        }
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        Self::touchgrass_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_production_tuning() {
        let p = EngineParams::default();
        assert_eq!(p.challenge_duration_secs, 3600);
        assert_eq!(p.success_base_award, 25);
        assert_eq!(p.confidence_bonus, 5);
        assert_eq!(p.confidence_bonus_threshold, 80);
        assert_eq!(p.failure_penalty, 15);
        assert!(p.penalize_expiry);
    }
}
