//! Settlement types: how a terminal transition is recorded and reported.

use serde::{Deserialize, Serialize};
use std::fmt;
use touchgrass_types::{Achievement, Challenge, UserId, UserProfile};
use touchgrass_validation::ValidationReport;

/// Which terminal state a challenge settled into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Completed,
    Failed,
    Expired,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Resolution::Completed => "completed",
            Resolution::Failed => "failed",
            Resolution::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// The full result of a terminal transition, ready to render.
///
/// Carries the terminal challenge, the applied points delta, the updated
/// profile, and any newly unlocked achievements so the caller needs no
/// follow-up fetch. `report` is present only when a validator verdict drove
/// the settlement.
#[derive(Clone, Debug)]
pub struct ChallengeSettlement {
    pub resolution: Resolution,
    pub challenge: Challenge,
    pub points_delta: i32,
    pub profile: UserProfile,
    pub unlocked: Vec<Achievement>,
    pub report: Option<ValidationReport>,
}

/// The journaled unit of a settlement: the two writes that must land
/// together, stored in metadata until both have.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct SettlementRecord {
    pub challenge: Challenge,
    pub profile: UserProfile,
}

/// Journal key for a user's in-flight settlement. One per user suffices:
/// a user has at most one active challenge to settle.
pub(crate) fn journal_key(user: &UserId) -> Vec<u8> {
    let mut key = b"settlement:".to_vec();
    key.extend_from_slice(user.as_str().as_bytes());
    key
}
