//! Challenge storage trait.

use crate::StoreError;
use touchgrass_types::{Challenge, ChallengeId, UserId};

/// Storage operations for challenge records.
pub trait ChallengeStore: Send + Sync {
    /// Persist a new ACTIVE challenge, conditioned on the owner having no
    /// other ACTIVE row.
    ///
    /// This is the write-time guard behind the one-active-challenge-per-user
    /// invariant: backends must perform the existence check and the insert
    /// atomically and return [`StoreError::Duplicate`] when an ACTIVE
    /// challenge already exists for `challenge.user`. A read-then-write
    /// without that guarantee does not satisfy this trait.
    fn create_active(&self, challenge: &Challenge) -> Result<(), StoreError>;

    fn get_challenge(&self, id: ChallengeId) -> Result<Challenge, StoreError>;

    /// Overwrite an existing challenge record by id.
    fn put_challenge(&self, challenge: &Challenge) -> Result<(), StoreError>;

    /// The user's single ACTIVE challenge, if any.
    fn active_for_user(&self, user: &UserId) -> Result<Option<Challenge>, StoreError>;

    /// All challenges ever owned by the user, most recent first.
    fn history_for_user(&self, user: &UserId) -> Result<Vec<Challenge>, StoreError>;
}
