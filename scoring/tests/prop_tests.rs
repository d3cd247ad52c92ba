use proptest::prelude::*;

use touchgrass_scoring::{settle_failure, settle_success};
use touchgrass_types::{EngineParams, Timestamp, UserId, UserProfile};

#[derive(Clone, Copy, Debug)]
enum Outcome {
    Success(u8),
    Failure,
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        (0u8..=100).prop_map(Outcome::Success),
        Just(Outcome::Failure),
    ]
}

proptest! {
    /// Invariants hold across arbitrary outcome sequences: the score never
    /// underflows, the longest streak stays a high-water mark, and the
    /// total only moves on successes.
    #[test]
    fn aggregate_invariants_hold(outcomes in prop::collection::vec(arb_outcome(), 0..60)) {
        let params = EngineParams::touchgrass_defaults();
        let mut profile = UserProfile::new(UserId::new("u-prop"));
        let mut successes = 0u32;
        let mut run = 0u32;

        for (i, outcome) in outcomes.iter().enumerate() {
            let now = Timestamp::new(i as u64);
            let result = match outcome {
                Outcome::Success(confidence) => {
                    successes += 1;
                    run += 1;
                    settle_success(&profile, *confidence, now, &params)
                }
                Outcome::Failure => {
                    run = 0;
                    settle_failure(&profile, &params)
                }
            };
            profile = result.profile;

            prop_assert!(profile.longest_streak >= profile.streak);
            prop_assert_eq!(profile.streak, run);
            prop_assert_eq!(profile.total_grass_touched, successes);
        }
    }

    /// A failure always zeroes the streak and never drops the score below
    /// zero, whatever the starting point.
    #[test]
    fn failure_floors_and_resets(fhi in 0u32..1000, streak in 0u32..1000) {
        let params = EngineParams::touchgrass_defaults();
        let mut profile = UserProfile::new(UserId::new("u-prop"));
        profile.fhi_score = fhi;
        profile.streak = streak;
        profile.longest_streak = streak;

        let outcome = settle_failure(&profile, &params);
        prop_assert_eq!(outcome.profile.streak, 0);
        prop_assert_eq!(
            outcome.profile.fhi_score,
            fhi.saturating_sub(params.failure_penalty)
        );
    }

    /// Success awards are exactly base or base + bonus, decided strictly by
    /// the confidence threshold.
    #[test]
    fn success_award_is_two_valued(fhi in 0u32..10_000, confidence in 0u8..=100) {
        let params = EngineParams::touchgrass_defaults();
        let mut profile = UserProfile::new(UserId::new("u-prop"));
        profile.fhi_score = fhi;

        let outcome = settle_success(&profile, confidence, Timestamp::new(0), &params);
        let expected = if confidence > params.confidence_bonus_threshold {
            params.success_base_award + params.confidence_bonus
        } else {
            params.success_base_award
        };
        prop_assert_eq!(outcome.points, expected as i32);
        prop_assert_eq!(outcome.profile.fhi_score, fhi + expected);
    }

    /// No achievement type is ever duplicated, however long the run.
    #[test]
    fn achievements_stay_unique(successes in 0usize..40) {
        let params = EngineParams::touchgrass_defaults();
        let mut profile = UserProfile::new(UserId::new("u-prop"));
        for i in 0..successes {
            profile = settle_success(&profile, 90, Timestamp::new(i as u64), &params).profile;
        }
        let mut types: Vec<_> = profile
            .achievements
            .iter()
            .map(|a| a.achievement_type)
            .collect();
        types.sort_by_key(|t| *t as u8);
        types.dedup();
        prop_assert_eq!(types.len(), profile.achievements.len());
    }
}
