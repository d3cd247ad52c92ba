//! The wired facade the presentation layer embeds.

use std::sync::Arc;

use touchgrass_discovery::{CatalogDiscovery, PatchDiscovery};
use touchgrass_engine::{ChallengeEngine, ChallengeSettlement};
use touchgrass_store::EngineStore;
use touchgrass_store_memory::MemoryStore;
use touchgrass_types::{
    Challenge, ChallengeId, Clock, GeoPoint, GrassPatch, SystemClock, UserId,
};
use touchgrass_validation::{HeuristicValidator, ProofImage, ProofValidator};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// One leaderboard entry: the fields the social screen renders.
#[derive(Clone, Debug)]
pub struct LeaderboardRow {
    pub user: UserId,
    pub fhi_score: u32,
    pub total_grass_touched: u32,
    pub streak: u32,
}

/// The assembled touchgrass core.
///
/// Owns the lifecycle engine and the discovery provider; exposes exactly the
/// operations the screens call. State flows out through these methods only,
/// never through shared globals.
pub struct GrassService {
    engine: ChallengeEngine,
    discovery: Arc<dyn PatchDiscovery>,
    store: Arc<dyn EngineStore>,
    search_radius_m: u32,
}

impl GrassService {
    /// Wire a service from explicit collaborators.
    pub fn new(
        config: &ServiceConfig,
        store: Arc<dyn EngineStore>,
        validator: Arc<dyn ProofValidator>,
        discovery: Arc<dyn PatchDiscovery>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ServiceError> {
        let engine = ChallengeEngine::new(store.clone(), validator, clock, config.params.clone())?;
        Ok(Self {
            engine,
            discovery,
            store,
            search_radius_m: config.search_radius_m,
        })
    }

    /// The default local wiring: in-memory store, heuristic validator, demo
    /// catalog, system clock.
    pub fn in_memory(config: &ServiceConfig) -> Result<Self, ServiceError> {
        Self::new(
            config,
            Arc::new(MemoryStore::new()),
            Arc::new(HeuristicValidator::new()),
            Arc::new(CatalogDiscovery::demo()),
            Arc::new(SystemClock),
        )
    }

    /// Candidate patches around `center`, ranked by distance.
    pub async fn discover_patches(&self, center: GeoPoint) -> Result<Vec<GrassPatch>, ServiceError> {
        let patches = self
            .discovery
            .find_nearby(center, self.search_radius_m)
            .await?;
        tracing::debug!(
            center = %center,
            radius_m = self.search_radius_m,
            found = patches.len(),
            "patch discovery"
        );
        Ok(patches)
    }

    /// Commit the user to a patch. See [`ChallengeEngine::create_challenge`].
    pub async fn start_challenge(
        &self,
        user: &UserId,
        patch: &GrassPatch,
    ) -> Result<Challenge, ServiceError> {
        Ok(self.engine.create_challenge(user, patch).await?)
    }

    /// The user's current challenge, if one is live.
    pub async fn current_challenge(&self, user: &UserId) -> Result<Option<Challenge>, ServiceError> {
        Ok(self.engine.active_challenge(user).await?)
    }

    /// Submit proof for a challenge. See [`ChallengeEngine::submit_proof`].
    pub async fn submit_proof(
        &self,
        challenge_id: ChallengeId,
        image: &ProofImage,
    ) -> Result<ChallengeSettlement, ServiceError> {
        Ok(self.engine.submit_proof(challenge_id, image).await?)
    }

    /// Give up on a challenge. See [`ChallengeEngine::fail_challenge`].
    pub async fn abandon_challenge(
        &self,
        challenge_id: ChallengeId,
    ) -> Result<ChallengeSettlement, ServiceError> {
        Ok(self.engine.fail_challenge(challenge_id).await?)
    }

    /// The user's challenge history, most recent first.
    pub async fn challenge_history(&self, user: &UserId) -> Result<Vec<Challenge>, ServiceError> {
        Ok(self.engine.challenge_history(user).await?)
    }

    /// Top profiles by FHI, ties broken by total grass touched.
    pub fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardRow>, ServiceError> {
        let mut profiles = self.store.iter_profiles()?;
        profiles.sort_by(|a, b| {
            b.fhi_score
                .cmp(&a.fhi_score)
                .then(b.total_grass_touched.cmp(&a.total_grass_touched))
        });
        profiles.truncate(limit);
        Ok(profiles
            .into_iter()
            .map(|p| LeaderboardRow {
                user: p.id,
                fhi_score: p.fhi_score,
                total_grass_touched: p.total_grass_touched,
                streak: p.streak,
            })
            .collect())
    }
}
