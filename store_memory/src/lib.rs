//! In-memory reference backend for the touchgrass storage traits.
//!
//! Thread-safe `Mutex<HashMap>` tables with an active-challenge index that
//! makes [`ChallengeStore::create_active`] a real conditional write: the
//! existence check and the insert happen under the same lock.
//!
//! This backend is the default wiring for tests and local development. A
//! durable backend would implement the same traits against its own schema.

use std::collections::HashMap;
use std::sync::Mutex;

use touchgrass_store::{ChallengeStore, MetaStore, ProfileStore, StoreError};
use touchgrass_types::{Challenge, ChallengeId, UserId, UserProfile};

/// An in-memory challenge + profile + metadata store.
pub struct MemoryStore {
    challenges: Mutex<HashMap<u64, Challenge>>,
    /// user id -> id of that user's single ACTIVE challenge.
    active: Mutex<HashMap<String, u64>>,
    profiles: Mutex<HashMap<String, UserProfile>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            challenges: Mutex::new(HashMap::new()),
            active: Mutex::new(HashMap::new()),
            profiles: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeStore for MemoryStore {
    fn create_active(&self, challenge: &Challenge) -> Result<(), StoreError> {
        if !challenge.is_active() {
            return Err(StoreError::Backend(format!(
                "create_active called with status {}",
                challenge.status
            )));
        }
        // Lock order: active index, then challenge table.
        let mut active = self.active.lock().unwrap();
        let mut challenges = self.challenges.lock().unwrap();
        if active.contains_key(challenge.user.as_str()) {
            return Err(StoreError::Duplicate(challenge.user.to_string()));
        }
        active.insert(challenge.user.to_string(), challenge.id.as_u64());
        challenges.insert(challenge.id.as_u64(), challenge.clone());
        Ok(())
    }

    fn get_challenge(&self, id: ChallengeId) -> Result<Challenge, StoreError> {
        self.challenges
            .lock()
            .unwrap()
            .get(&id.as_u64())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_challenge(&self, challenge: &Challenge) -> Result<(), StoreError> {
        let mut active = self.active.lock().unwrap();
        let mut challenges = self.challenges.lock().unwrap();
        if !challenges.contains_key(&challenge.id.as_u64()) {
            return Err(StoreError::NotFound(challenge.id.to_string()));
        }
        // Keep the active index consistent with the row's status.
        match active.get(challenge.user.as_str()) {
            Some(&id) if id == challenge.id.as_u64() && !challenge.is_active() => {
                active.remove(challenge.user.as_str());
            }
            _ => {}
        }
        challenges.insert(challenge.id.as_u64(), challenge.clone());
        Ok(())
    }

    fn active_for_user(&self, user: &UserId) -> Result<Option<Challenge>, StoreError> {
        let active = self.active.lock().unwrap();
        let challenges = self.challenges.lock().unwrap();
        Ok(active
            .get(user.as_str())
            .and_then(|id| challenges.get(id))
            .filter(|c| c.is_active())
            .cloned())
    }

    fn history_for_user(&self, user: &UserId) -> Result<Vec<Challenge>, StoreError> {
        let mut rows: Vec<Challenge> = self
            .challenges
            .lock()
            .unwrap()
            .values()
            .filter(|c| &c.user == user)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.started_at.cmp(&a.started_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}

impl ProfileStore for MemoryStore {
    fn get_profile(&self, user: &UserId) -> Result<UserProfile, StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .get(user.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(user.to_string()))
    }

    fn put_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id.to_string(), profile.clone());
        Ok(())
    }

    fn profile_exists(&self, user: &UserId) -> Result<bool, StoreError> {
        Ok(self.profiles.lock().unwrap().contains_key(user.as_str()))
    }

    fn iter_profiles(&self) -> Result<Vec<UserProfile>, StoreError> {
        Ok(self.profiles.lock().unwrap().values().cloned().collect())
    }
}

impl MetaStore for MemoryStore {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn delete_meta(&self, key: &[u8]) -> Result<(), StoreError> {
        self.meta.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchgrass_types::{
        ChallengeStatus, GeoPoint, GrassPatch, PatchId, PatchQuality, Timestamp,
    };

    fn test_patch(n: u8) -> GrassPatch {
        GrassPatch {
            id: PatchId::new(format!("patch-{n}")),
            name: format!("Test Patch {n}"),
            location: GeoPoint::new(40.0, -73.0),
            address: "123 Grass St".to_string(),
            distance_m: 100,
            difficulty: 1,
            quality: PatchQuality::Decent,
            walk_time_secs: 71,
            description: String::new(),
        }
    }

    fn open_challenge(id: u64, user: &str, started: u64) -> Challenge {
        Challenge::open(
            ChallengeId::new(id),
            UserId::new(user),
            &test_patch(1),
            Timestamp::new(started),
            3600,
        )
    }

    #[test]
    fn conditional_create_rejects_second_active() {
        let store = MemoryStore::new();
        store.create_active(&open_challenge(1, "u1", 1000)).unwrap();

        let err = store
            .create_active(&open_challenge(2, "u1", 1001))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));

        // A different user is unaffected.
        store.create_active(&open_challenge(3, "u2", 1001)).unwrap();
    }

    #[test]
    fn terminal_put_clears_active_index() {
        let store = MemoryStore::new();
        let mut challenge = open_challenge(1, "u1", 1000);
        store.create_active(&challenge).unwrap();
        assert!(store
            .active_for_user(&UserId::new("u1"))
            .unwrap()
            .is_some());

        challenge.status = ChallengeStatus::Completed;
        challenge.completed_at = Some(Timestamp::new(1500));
        store.put_challenge(&challenge).unwrap();

        assert!(store.active_for_user(&UserId::new("u1")).unwrap().is_none());
        // The next create succeeds now that the slot is free.
        store.create_active(&open_challenge(2, "u1", 1600)).unwrap();
    }

    #[test]
    fn put_unknown_challenge_is_not_found() {
        let store = MemoryStore::new();
        let challenge = open_challenge(9, "u1", 1000);
        let err = store.put_challenge(&challenge).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn history_is_most_recent_first() {
        let store = MemoryStore::new();
        let mut first = open_challenge(1, "u1", 1000);
        first.status = ChallengeStatus::Expired;
        store.create_active(&open_challenge(1, "u1", 1000)).unwrap();
        store.put_challenge(&first).unwrap();
        store.create_active(&open_challenge(2, "u1", 2000)).unwrap();

        let history = store.history_for_user(&UserId::new("u1")).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, ChallengeId::new(2));
        assert_eq!(history[1].id, ChallengeId::new(1));
    }

    #[test]
    fn meta_roundtrip_and_delete() {
        let store = MemoryStore::new();
        store.put_meta(b"next_challenge_id", &42u64.to_be_bytes()).unwrap();
        assert_eq!(
            store.get_meta(b"next_challenge_id").unwrap().unwrap(),
            42u64.to_be_bytes().to_vec()
        );
        store.delete_meta(b"next_challenge_id").unwrap();
        assert!(store.get_meta(b"next_challenge_id").unwrap().is_none());
    }

    #[test]
    fn missing_profile_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.get_profile(&UserId::new("ghost")).is_err());
        assert!(!store.profile_exists(&UserId::new("ghost")).unwrap());
    }
}
