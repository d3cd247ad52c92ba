//! Challenge: a time-boxed commitment to visit a patch and submit proof.

use crate::geo::GeoPoint;
use crate::id::{ChallengeId, PatchId, UserId};
use crate::patch::GrassPatch;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a challenge.
///
/// `Active` is the only initial state. `Completed`, `Failed`, and `Expired`
/// are terminal: once set, the record never transitions again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    Active,
    Completed,
    Failed,
    Expired,
}

impl ChallengeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChallengeStatus::Active)
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Failed => "failed",
            ChallengeStatus::Expired => "expired",
        };
        write!(f, "{s}")
    }
}

/// Denormalized patch fields embedded in the challenge record.
///
/// Patches are session-scoped and not independently persisted, so the
/// challenge carries everything needed to render itself after the discovery
/// results are gone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatchSnapshot {
    pub patch_id: PatchId,
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
}

impl From<&GrassPatch> for PatchSnapshot {
    fn from(patch: &GrassPatch) -> Self {
        Self {
            patch_id: patch.id.clone(),
            name: patch.name.clone(),
            location: patch.location,
            address: patch.address.clone(),
        }
    }
}

/// A user's time-boxed commitment to physically visit a patch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub user: UserId,
    pub patch: PatchSnapshot,
    pub status: ChallengeStatus,
    pub started_at: Timestamp,
    /// Fixed at creation (`started_at` + challenge duration); never mutated.
    pub expires_at: Timestamp,
    /// Set when the challenge reaches a terminal state.
    pub completed_at: Option<Timestamp>,
    /// Storage reference of the submitted proof photo, if any.
    pub submission_image: Option<String>,
    /// Whether a positive validation verdict was recorded.
    pub validated: bool,
    /// FHI delta applied at the terminal transition. Zero while active.
    pub points_awarded: i32,
    /// Number of proof submissions attempted, including faulted ones.
    pub validation_attempts: u32,
}

impl Challenge {
    /// Open a new challenge against `patch`, expiring after `duration_secs`.
    pub fn open(
        id: ChallengeId,
        user: UserId,
        patch: &GrassPatch,
        now: Timestamp,
        duration_secs: u64,
    ) -> Self {
        Self {
            id,
            user,
            patch: PatchSnapshot::from(patch),
            status: ChallengeStatus::Active,
            started_at: now,
            expires_at: now.plus_secs(duration_secs),
            completed_at: None,
            submission_image: None,
            validated: false,
            points_awarded: 0,
            validation_attempts: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Active
    }

    /// Whether the challenge window has elapsed.
    ///
    /// Expiry is a pure function of `(challenge, now)`; the engine invokes it
    /// at the start of every operation that touches active-challenge state.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.is_active() && now >= self.expires_at
    }

    /// Seconds left in the window, for the UI countdown. Zero once elapsed.
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        self.expires_at.remaining_until(now)
    }
}
