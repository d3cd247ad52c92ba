//! Fault-injecting storage decorator.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use touchgrass_store::{ChallengeStore, EngineStore, MetaStore, ProfileStore, StoreError};
use touchgrass_types::{Challenge, ChallengeId, UserId, UserProfile};

/// Wraps any backend and fails a scripted number of upcoming writes, for
/// exercising persistence-fault handling (retry and reconcile paths).
///
/// Reads always pass through. Each write kind has its own fuse: when the
/// counter is non-zero the call fails with [`StoreError::Backend`] and the
/// counter decrements.
pub struct FaultyStore {
    inner: Arc<dyn EngineStore>,
    fail_challenge_puts: AtomicU32,
    fail_profile_puts: AtomicU32,
    fail_meta_puts: AtomicU32,
}

impl FaultyStore {
    pub fn new(inner: Arc<dyn EngineStore>) -> Self {
        Self {
            inner,
            fail_challenge_puts: AtomicU32::new(0),
            fail_profile_puts: AtomicU32::new(0),
            fail_meta_puts: AtomicU32::new(0),
        }
    }

    pub fn fail_next_challenge_puts(&self, n: u32) {
        self.fail_challenge_puts.store(n, Ordering::SeqCst);
    }

    pub fn fail_next_profile_puts(&self, n: u32) {
        self.fail_profile_puts.store(n, Ordering::SeqCst);
    }

    pub fn fail_next_meta_puts(&self, n: u32) {
        self.fail_meta_puts.store(n, Ordering::SeqCst);
    }

    fn blow(fuse: &AtomicU32, what: &str) -> Result<(), StoreError> {
        // Decrement-if-positive without a lock.
        let mut current = fuse.load(Ordering::SeqCst);
        while current > 0 {
            match fuse.compare_exchange(current, current - 1, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Err(StoreError::Backend(format!("injected {what} fault"))),
                Err(actual) => current = actual,
            }
        }
        Ok(())
    }
}

impl ChallengeStore for FaultyStore {
    fn create_active(&self, challenge: &Challenge) -> Result<(), StoreError> {
        Self::blow(&self.fail_challenge_puts, "create_active")?;
        self.inner.create_active(challenge)
    }

    fn get_challenge(&self, id: ChallengeId) -> Result<Challenge, StoreError> {
        self.inner.get_challenge(id)
    }

    fn put_challenge(&self, challenge: &Challenge) -> Result<(), StoreError> {
        Self::blow(&self.fail_challenge_puts, "put_challenge")?;
        self.inner.put_challenge(challenge)
    }

    fn active_for_user(&self, user: &UserId) -> Result<Option<Challenge>, StoreError> {
        self.inner.active_for_user(user)
    }

    fn history_for_user(&self, user: &UserId) -> Result<Vec<Challenge>, StoreError> {
        self.inner.history_for_user(user)
    }
}

impl ProfileStore for FaultyStore {
    fn get_profile(&self, user: &UserId) -> Result<UserProfile, StoreError> {
        self.inner.get_profile(user)
    }

    fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        Self::blow(&self.fail_profile_puts, "put_profile")?;
        self.inner.put_profile(profile)
    }

    fn profile_exists(&self, user: &UserId) -> Result<bool, StoreError> {
        self.inner.profile_exists(user)
    }

    fn iter_profiles(&self) -> Result<Vec<UserProfile>, StoreError> {
        self.inner.iter_profiles()
    }
}

impl MetaStore for FaultyStore {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        Self::blow(&self.fail_meta_puts, "put_meta")?;
        self.inner.put_meta(key, value)
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.get_meta(key)
    }

    fn delete_meta(&self, key: &[u8]) -> Result<(), StoreError> {
        self.inner.delete_meta(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchgrass_store_memory::MemoryStore;

    #[test]
    fn fuses_fail_exactly_n_writes() {
        let store = FaultyStore::new(Arc::new(MemoryStore::new()));
        store.fail_next_meta_puts(2);

        assert!(store.put_meta(b"k", b"v").is_err());
        assert!(store.put_meta(b"k", b"v").is_err());
        assert!(store.put_meta(b"k", b"v").is_ok());
        assert_eq!(store.get_meta(b"k").unwrap().unwrap(), b"v".to_vec());
    }

    #[test]
    fn reads_pass_through_while_writes_fail() {
        let store = FaultyStore::new(Arc::new(MemoryStore::new()));
        store.put_meta(b"k", b"v").unwrap();
        store.fail_next_meta_puts(1);
        assert_eq!(store.get_meta(b"k").unwrap().unwrap(), b"v".to_vec());
    }
}
