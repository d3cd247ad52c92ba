//! The challenge lifecycle engine.

use crate::error::EngineError;
use crate::settlement::{journal_key, ChallengeSettlement, Resolution, SettlementRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use touchgrass_scoring::{settle_expiry, settle_failure, settle_success, ScoreOutcome};
use touchgrass_store::{EngineStore, StoreError};
use touchgrass_types::{
    Challenge, ChallengeId, ChallengeStatus, Clock, EngineParams, GrassPatch, Timestamp, UserId,
};
use touchgrass_validation::{
    ExpectedLocation, ProofImage, ProofValidator, ValidationFault, ValidationReport,
};

/// Meta key holding the next challenge id to allocate.
const NEXT_ID_KEY: &[u8] = b"next_challenge_id";

/// Owns challenge state transitions, enforces the single-active-challenge
/// invariant, computes expiry, orchestrates validation, and applies the
/// scoring policy atomically from the caller's perspective.
pub struct ChallengeEngine {
    store: Arc<dyn EngineStore>,
    validator: Arc<dyn ProofValidator>,
    clock: Arc<dyn Clock>,
    params: EngineParams,
    next_id: AtomicU64,
}

impl ChallengeEngine {
    /// Build an engine over the injected collaborators, restoring the id
    /// counter from store metadata.
    pub fn new(
        store: Arc<dyn EngineStore>,
        validator: Arc<dyn ProofValidator>,
        clock: Arc<dyn Clock>,
        params: EngineParams,
    ) -> Result<Self, EngineError> {
        let next_id = match store.get_meta(NEXT_ID_KEY)? {
            Some(bytes) if bytes.len() >= 8 => {
                u64::from_be_bytes(bytes[..8].try_into().unwrap())
            }
            _ => 1,
        };
        Ok(Self {
            store,
            validator,
            clock,
            params,
            next_id: AtomicU64::new(next_id),
        })
    }

    /// Commit the user to a patch.
    ///
    /// Runs the lazy expiry sweep first, so a stale active challenge is
    /// settled as expired rather than blocking the create. A genuinely live
    /// active challenge conflicts; the engine never silently replaces one.
    /// The store's conditional create re-verifies the invariant at write
    /// time regardless of what the pre-check saw.
    pub async fn create_challenge(
        &self,
        user: &UserId,
        patch: &GrassPatch,
    ) -> Result<Challenge, EngineError> {
        if !self.store.profile_exists(user)? {
            return Err(EngineError::NotFound(user.to_string()));
        }
        self.reconcile(user)?;
        self.sweep(user)?;

        if self.store.active_for_user(user)?.is_some() {
            return Err(EngineError::Conflict(user.to_string()));
        }

        let id = self.allocate_id()?;
        let challenge = Challenge::open(
            id,
            user.clone(),
            patch,
            self.clock.now(),
            self.params.challenge_duration_secs,
        );
        self.store.create_active(&challenge)?;
        tracing::info!(
            user = %user,
            challenge = %challenge.id,
            patch = %challenge.patch.name,
            expires_at = %challenge.expires_at,
            "challenge created"
        );
        Ok(challenge)
    }

    /// The user's single active challenge, after reconcile + sweep.
    /// Side-effect-free beyond those.
    pub async fn active_challenge(&self, user: &UserId) -> Result<Option<Challenge>, EngineError> {
        self.reconcile(user)?;
        self.sweep(user)?;
        Ok(self.store.active_for_user(user)?)
    }

    /// The user's full challenge history, most recent first.
    pub async fn challenge_history(&self, user: &UserId) -> Result<Vec<Challenge>, EngineError> {
        self.reconcile(user)?;
        self.sweep(user)?;
        Ok(self.store.history_for_user(user)?)
    }

    /// Submit photographic proof for an active challenge.
    ///
    /// The attempt is counted and persisted before the validator is
    /// consulted, so a faulted call still increments `validation_attempts`
    /// while leaving the challenge active. A verdict (either way) settles
    /// the challenge terminally; a [`ValidationFault`] is surfaced for the
    /// caller to retry.
    pub async fn submit_proof(
        &self,
        challenge_id: ChallengeId,
        image: &ProofImage,
    ) -> Result<ChallengeSettlement, EngineError> {
        let owner = self.store.get_challenge(challenge_id)?.user;
        self.reconcile(&owner)?;
        // Re-read: the reconcile may have settled this very challenge.
        let mut challenge = self.store.get_challenge(challenge_id)?;

        let now = self.clock.now();
        if challenge.is_expired(now) {
            self.expire(challenge, now)?;
            return Err(EngineError::InvalidState {
                id: challenge_id,
                actual: ChallengeStatus::Expired,
            });
        }
        if challenge.status.is_terminal() {
            return Err(EngineError::InvalidState {
                id: challenge_id,
                actual: challenge.status,
            });
        }

        challenge.validation_attempts += 1;
        self.store.put_challenge(&challenge)?;

        let expected = ExpectedLocation {
            name: challenge.patch.name.clone(),
            location: challenge.patch.location,
        };
        let budget = Duration::from_secs(self.params.validation_timeout_secs);
        let report = match tokio::time::timeout(budget, self.validator.validate(image, &expected))
            .await
        {
            Ok(Ok(report)) => report,
            Ok(Err(fault)) => {
                tracing::warn!(
                    challenge = %challenge_id,
                    validator = self.validator.id(),
                    attempts = challenge.validation_attempts,
                    error = %fault,
                    "validation fault; challenge stays active"
                );
                return Err(EngineError::Validation(fault));
            }
            Err(_) => {
                let fault = ValidationFault::Timeout(self.params.validation_timeout_secs);
                tracing::warn!(
                    challenge = %challenge_id,
                    validator = self.validator.id(),
                    attempts = challenge.validation_attempts,
                    "validation timed out; challenge stays active"
                );
                return Err(EngineError::Validation(fault));
            }
        };

        let profile = self.store.get_profile(&challenge.user)?;
        let settled_at = self.clock.now();
        challenge.submission_image = Some(image.reference.clone());
        challenge.completed_at = Some(settled_at);

        if report.is_positive() {
            let outcome = settle_success(&profile, report.confidence, settled_at, &self.params);
            challenge.status = ChallengeStatus::Completed;
            challenge.validated = true;
            challenge.points_awarded = outcome.points;
            self.commit(challenge, outcome, Resolution::Completed, Some(report))
        } else {
            let outcome = settle_failure(&profile, &self.params);
            challenge.status = ChallengeStatus::Failed;
            challenge.points_awarded = outcome.points;
            self.commit(challenge, outcome, Resolution::Failed, Some(report))
        }
    }

    /// Explicitly fail an active challenge (user abandonment, or a
    /// presentation-side timeout handler) without a validation call.
    ///
    /// If the window has already lapsed, the challenge settles as expired
    /// instead: abandoning a dead challenge is just the sweep arriving late.
    pub async fn fail_challenge(
        &self,
        challenge_id: ChallengeId,
    ) -> Result<ChallengeSettlement, EngineError> {
        let owner = self.store.get_challenge(challenge_id)?.user;
        self.reconcile(&owner)?;
        let mut challenge = self.store.get_challenge(challenge_id)?;

        let now = self.clock.now();
        if challenge.is_expired(now) {
            return self.expire(challenge, now);
        }
        if challenge.status.is_terminal() {
            return Err(EngineError::InvalidState {
                id: challenge_id,
                actual: challenge.status,
            });
        }

        let profile = self.store.get_profile(&challenge.user)?;
        let outcome = settle_failure(&profile, &self.params);
        challenge.status = ChallengeStatus::Failed;
        challenge.completed_at = Some(now);
        challenge.points_awarded = outcome.points;
        self.commit(challenge, outcome, Resolution::Failed, None)
    }

    // ── Internals ───────────────────────────────────────────────────────

    /// Lazy expiry sweep: settle the user's active challenge as expired if
    /// its window has lapsed. Runs before every read/write of
    /// active-challenge state.
    fn sweep(&self, user: &UserId) -> Result<(), EngineError> {
        let Some(active) = self.store.active_for_user(user)? else {
            return Ok(());
        };
        let now = self.clock.now();
        if active.is_expired(now) {
            self.expire(active, now)?;
        }
        Ok(())
    }

    /// Settle an active challenge whose window has lapsed.
    fn expire(
        &self,
        mut challenge: Challenge,
        now: Timestamp,
    ) -> Result<ChallengeSettlement, EngineError> {
        let profile = self.store.get_profile(&challenge.user)?;
        let outcome = settle_expiry(&profile, &self.params);
        challenge.status = ChallengeStatus::Expired;
        challenge.completed_at = Some(now);
        challenge.points_awarded = outcome.points;
        tracing::info!(
            user = %challenge.user,
            challenge = %challenge.id,
            expired_at = %challenge.expires_at,
            "challenge expired by sweep"
        );
        self.commit(challenge, outcome, Resolution::Expired, None)
    }

    /// Apply a terminal settlement: journal it, write challenge + profile,
    /// clear the journal. The sequence is retried as a unit; every step is
    /// an idempotent put of final values.
    fn commit(
        &self,
        challenge: Challenge,
        outcome: ScoreOutcome,
        resolution: Resolution,
        report: Option<ValidationReport>,
    ) -> Result<ChallengeSettlement, EngineError> {
        let record = SettlementRecord {
            challenge: challenge.clone(),
            profile: outcome.profile.clone(),
        };
        let bytes = bincode::serialize(&record)
            .map_err(|e| EngineError::Persistence(StoreError::Serialization(e.to_string())))?;
        let key = journal_key(&challenge.user);

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.apply_settlement(&key, &bytes, &record) {
                Ok(()) => break,
                Err(e) if attempt <= self.params.settle_retry_limit => {
                    tracing::warn!(
                        challenge = %challenge.id,
                        attempt,
                        error = %e,
                        "settlement write failed; retrying"
                    );
                }
                Err(e) => return Err(EngineError::Persistence(e)),
            }
        }

        tracing::info!(
            user = %challenge.user,
            challenge = %challenge.id,
            resolution = %resolution,
            points = outcome.points,
            fhi = outcome.profile.fhi_score,
            streak = outcome.profile.streak,
            "challenge settled"
        );
        for achievement in &outcome.unlocked {
            tracing::info!(
                user = %challenge.user,
                achievement = %achievement.achievement_type,
                rarity = ?achievement.rarity,
                "achievement unlocked"
            );
        }
        Ok(ChallengeSettlement {
            resolution,
            challenge,
            points_delta: outcome.points,
            profile: outcome.profile,
            unlocked: outcome.unlocked,
            report,
        })
    }

    fn apply_settlement(
        &self,
        key: &[u8],
        bytes: &[u8],
        record: &SettlementRecord,
    ) -> Result<(), StoreError> {
        self.store.put_meta(key, bytes)?;
        self.store.put_challenge(&record.challenge)?;
        self.store.put_profile(&record.profile)?;
        self.store.delete_meta(key)
    }

    /// Re-apply a dangling settlement journal entry, if one exists.
    ///
    /// A dangling entry means a previous settlement was interrupted between
    /// the challenge write and the profile write; replaying both puts makes
    /// the pair consistent before any state is read.
    fn reconcile(&self, user: &UserId) -> Result<(), EngineError> {
        let key = journal_key(user);
        let Some(bytes) = self.store.get_meta(&key)? else {
            return Ok(());
        };
        let record: SettlementRecord = bincode::deserialize(&bytes)
            .map_err(|e| EngineError::Persistence(StoreError::Corruption(e.to_string())))?;
        self.store.put_challenge(&record.challenge)?;
        self.store.put_profile(&record.profile)?;
        self.store.delete_meta(&key)?;
        tracing::warn!(
            user = %user,
            challenge = %record.challenge.id,
            "reapplied interrupted settlement"
        );
        Ok(())
    }

    fn allocate_id(&self) -> Result<ChallengeId, EngineError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.store.put_meta(NEXT_ID_KEY, &(id + 1).to_be_bytes())?;
        Ok(ChallengeId::new(id))
    }
}
