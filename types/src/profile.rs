//! User profile: identity plus the reputation aggregate.

use crate::achievement::{Achievement, AchievementType};
use crate::id::UserId;
use serde::{Deserialize, Serialize};

/// A user's reputation aggregate.
///
/// Invariants (maintained by the scoring policy, the sole writer):
/// - `fhi_score` never goes below zero (penalties saturate).
/// - `longest_streak >= streak`.
/// - `total_grass_touched` only increases.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    /// Functional Human Index: the scoring currency.
    pub fhi_score: u32,
    pub total_grass_touched: u32,
    /// Current consecutive-success count.
    pub streak: u32,
    /// High-water mark of `streak`.
    pub longest_streak: u32,
    /// Unlocked achievements, unique by type.
    pub achievements: Vec<Achievement>,
}

impl UserProfile {
    /// A fresh profile with zeroed aggregates. Signup flows seed these
    /// through the profile store.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            fhi_score: 0,
            total_grass_touched: 0,
            streak: 0,
            longest_streak: 0,
            achievements: Vec::new(),
        }
    }

    pub fn has_achievement(&self, achievement_type: AchievementType) -> bool {
        self.achievements
            .iter()
            .any(|a| a.achievement_type == achievement_type)
    }

    /// Record an unlock. Duplicate unlocks are no-ops, not errors; returns
    /// whether the achievement was newly added.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        if self.has_achievement(achievement.achievement_type) {
            return false;
        }
        self.achievements.push(achievement);
        true
    }
}
