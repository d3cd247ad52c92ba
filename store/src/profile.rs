//! User profile storage trait.

use crate::StoreError;
use touchgrass_types::{UserId, UserProfile};

/// Storage operations for user reputation aggregates.
///
/// Only the lifecycle engine's scoring path writes these rows; everything
/// else reads (the leaderboard is a sorted read over [`iter_profiles`]).
///
/// [`iter_profiles`]: ProfileStore::iter_profiles
pub trait ProfileStore: Send + Sync {
    fn get_profile(&self, user: &UserId) -> Result<UserProfile, StoreError>;
    fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError>;
    fn profile_exists(&self, user: &UserId) -> Result<bool, StoreError>;
    fn iter_profiles(&self) -> Result<Vec<UserProfile>, StoreError>;
}
