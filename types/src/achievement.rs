//! Achievement unlock records.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How rare an achievement is, for badge rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// The closed set of unlockable achievements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementType {
    /// First successfully completed challenge.
    FirstGrass,
    /// Five consecutive successes.
    Streak5,
    /// Ten consecutive successes.
    Streak10,
    /// Thirty consecutive successes.
    Streak30,
}

impl AchievementType {
    pub fn rarity(&self) -> Rarity {
        match self {
            AchievementType::FirstGrass => Rarity::Common,
            AchievementType::Streak5 => Rarity::Rare,
            AchievementType::Streak10 => Rarity::Epic,
            AchievementType::Streak30 => Rarity::Legendary,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementType::FirstGrass => "First Grass",
            AchievementType::Streak5 => "Serial Toucher",
            AchievementType::Streak10 => "Grass Enjoyer",
            AchievementType::Streak30 => "One With Nature",
        }
    }
}

impl fmt::Display for AchievementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A single unlock. At most one exists per (user, type); identity is the
/// type within the owning profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Achievement {
    pub achievement_type: AchievementType,
    pub rarity: Rarity,
    pub unlocked_at: Timestamp,
}

impl Achievement {
    pub fn unlock(achievement_type: AchievementType, now: Timestamp) -> Self {
        Self {
            achievement_type,
            rarity: achievement_type.rarity(),
            unlocked_at: now,
        }
    }
}
