//! Achievement unlock rules.
//!
//! Thresholds fire when the tracked metric *becomes exactly* the target
//! value on the post-increment profile, so unlock timing stays tied to the
//! triggering challenge. A metric that jumps past a target through some
//! out-of-band write does not unlock retroactively.

use touchgrass_types::{Achievement, AchievementType, Timestamp, UserProfile};

/// Which profile aggregate a rule watches.
#[derive(Clone, Copy, Debug)]
enum Metric {
    TotalGrass,
    Streak,
}

/// The unlock table. Extending the ladder means adding a row here.
const UNLOCK_RULES: &[(AchievementType, Metric, u32)] = &[
    (AchievementType::FirstGrass, Metric::TotalGrass, 1),
    (AchievementType::Streak5, Metric::Streak, 5),
    (AchievementType::Streak10, Metric::Streak, 10),
    (AchievementType::Streak30, Metric::Streak, 30),
];

/// Evaluate all unlock rules against a freshly mutated profile.
///
/// Already-unlocked types are skipped, so re-running the evaluation (e.g. on
/// a retried settlement) is a no-op. Returns only the newly added records.
pub fn evaluate_unlocks(profile: &mut UserProfile, now: Timestamp) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    for (achievement_type, metric, target) in UNLOCK_RULES {
        let value = match metric {
            Metric::TotalGrass => profile.total_grass_touched,
            Metric::Streak => profile.streak,
        };
        if value != *target {
            continue;
        }
        let achievement = Achievement::unlock(*achievement_type, now);
        if profile.unlock(achievement.clone()) {
            unlocked.push(achievement);
        }
    }
    unlocked
}
