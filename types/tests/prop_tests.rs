use proptest::prelude::*;

use touchgrass_types::{
    Challenge, ChallengeId, ChallengeStatus, GeoPoint, GrassPatch, PatchId, PatchQuality,
    Timestamp, UserId,
};

fn arb_patch() -> GrassPatch {
    GrassPatch {
        id: PatchId::new("patch-prop"),
        name: "Prop Park".to_string(),
        location: GeoPoint::new(51.5074, -0.1278),
        address: "Somewhere, London".to_string(),
        distance_m: 500,
        difficulty: 3,
        quality: PatchQuality::Questionable,
        walk_time_secs: 357,
        description: String::new(),
    }
}

proptest! {
    /// Timestamp ordering agrees with the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// plus_secs is plain addition until it saturates.
    #[test]
    fn timestamp_plus_secs(base in 0u64..1_000_000, add in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        prop_assert_eq!(t.plus_secs(add), Timestamp::new(base + add));
        prop_assert_eq!(t.plus_secs(u64::MAX), Timestamp::new(u64::MAX));
    }

    /// remaining_until counts down to the target and floors at zero past it.
    #[test]
    fn timestamp_remaining_until(target in 0u64..1_000_000, probe in 0u64..2_000_000) {
        let t = Timestamp::new(target);
        let now = Timestamp::new(probe);
        prop_assert_eq!(t.remaining_until(now), target.saturating_sub(probe));
    }

    /// A fresh challenge's expiry window matches its duration exactly, and
    /// is_expired flips precisely at the boundary.
    #[test]
    fn challenge_expiry_boundary(
        start in 0u64..1_000_000,
        duration in 1u64..1_000_000,
        probe in 0u64..2_000_000,
    ) {
        let c = Challenge::open(
            ChallengeId::new(1),
            UserId::new("u-prop"),
            &arb_patch(),
            Timestamp::new(start),
            duration,
        );
        prop_assert_eq!(c.expires_at, Timestamp::new(start + duration));
        let now = Timestamp::new(probe);
        prop_assert_eq!(c.is_expired(now), probe >= start + duration);
    }

    /// remaining_secs is the exact complement of elapsed time within the
    /// window, and zero after it.
    #[test]
    fn challenge_remaining_secs(
        start in 0u64..500_000,
        duration in 1u64..500_000,
        offset in 0u64..1_000_000,
    ) {
        let c = Challenge::open(
            ChallengeId::new(1),
            UserId::new("u-prop"),
            &arb_patch(),
            Timestamp::new(start),
            duration,
        );
        let now = Timestamp::new(start + offset);
        prop_assert_eq!(c.remaining_secs(now), duration.saturating_sub(offset));
    }

    /// Terminal statuses never report as expired regardless of time.
    #[test]
    fn terminal_never_expired(probe in 0u64..u64::MAX) {
        for status in [
            ChallengeStatus::Completed,
            ChallengeStatus::Failed,
            ChallengeStatus::Expired,
        ] {
            let mut c = Challenge::open(
                ChallengeId::new(1),
                UserId::new("u-prop"),
                &arb_patch(),
                Timestamp::new(0),
                1,
            );
            c.status = status;
            prop_assert!(!c.is_expired(Timestamp::new(probe)));
        }
    }

    /// Haversine distance is symmetric and non-negative.
    #[test]
    fn geo_distance_symmetric(
        lat1 in -80.0f64..80.0, lng1 in -179.0f64..179.0,
        lat2 in -80.0f64..80.0, lng2 in -179.0f64..179.0,
    ) {
        let a = GeoPoint::new(lat1, lng1);
        let b = GeoPoint::new(lat2, lng2);
        let ab = a.distance_m(&b);
        let ba = b.distance_m(&a);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6 * (1.0 + ab));
    }

    /// Challenge records survive the journal encoding used by the engine.
    #[test]
    fn challenge_bincode_roundtrip(start in 0u64..1_000_000, attempts in 0u32..100) {
        let mut c = Challenge::open(
            ChallengeId::new(42),
            UserId::new("u-prop"),
            &arb_patch(),
            Timestamp::new(start),
            3600,
        );
        c.validation_attempts = attempts;
        let encoded = bincode::serialize(&c).unwrap();
        let decoded: Challenge = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded.id, c.id);
        prop_assert_eq!(decoded.status, c.status);
        prop_assert_eq!(decoded.expires_at, c.expires_at);
        prop_assert_eq!(decoded.validation_attempts, attempts);
    }
}
