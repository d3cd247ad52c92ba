//! Outcome settlement: how a terminal challenge mutates the profile.

use crate::achievements::evaluate_unlocks;
use touchgrass_types::{Achievement, EngineParams, Timestamp, UserProfile};

/// The computed result of settling one challenge outcome.
///
/// `profile` is the post-mutation aggregate; the caller persists it as-is.
#[derive(Clone, Debug)]
pub struct ScoreOutcome {
    /// Signed FHI delta applied to the profile.
    pub points: i32,
    pub profile: UserProfile,
    /// Achievements newly unlocked by this outcome, in rule order.
    pub unlocked: Vec<Achievement>,
}

/// Settle a validated completion.
///
/// Awards the base amount plus the confidence bonus when the verdict's
/// confidence strictly exceeds the threshold, increments the success
/// aggregates, and evaluates achievement thresholds on the post-increment
/// values.
pub fn settle_success(
    profile: &UserProfile,
    confidence: u8,
    now: Timestamp,
    params: &EngineParams,
) -> ScoreOutcome {
    let mut points = params.success_base_award;
    if confidence > params.confidence_bonus_threshold {
        points += params.confidence_bonus;
    }

    let mut profile = profile.clone();
    profile.fhi_score = profile.fhi_score.saturating_add(points);
    profile.total_grass_touched = profile.total_grass_touched.saturating_add(1);
    profile.streak = profile.streak.saturating_add(1);
    profile.longest_streak = profile.longest_streak.max(profile.streak);

    let unlocked = evaluate_unlocks(&mut profile, now);

    ScoreOutcome {
        points: points as i32,
        profile,
        unlocked,
    }
}

/// Settle a failed challenge.
///
/// Deducts the penalty with a floor at zero and resets the streak.
/// `total_grass_touched` and `longest_streak` are untouched.
pub fn settle_failure(profile: &UserProfile, params: &EngineParams) -> ScoreOutcome {
    let mut profile = profile.clone();
    profile.fhi_score = profile.fhi_score.saturating_sub(params.failure_penalty);
    profile.streak = 0;

    ScoreOutcome {
        points: -(params.failure_penalty as i32),
        profile,
        unlocked: Vec::new(),
    }
}

/// Settle an expired challenge.
///
/// With `penalize_expiry` set (the default), letting the window lapse costs
/// the same as failing outright. Otherwise expiry is score-neutral.
pub fn settle_expiry(profile: &UserProfile, params: &EngineParams) -> ScoreOutcome {
    if params.penalize_expiry {
        settle_failure(profile, params)
    } else {
        ScoreOutcome {
            points: 0,
            profile: profile.clone(),
            unlocked: Vec::new(),
        }
    }
}
