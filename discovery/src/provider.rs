//! The patch discovery trait.

use crate::error::DiscoveryError;
use async_trait::async_trait;
use touchgrass_types::{GeoPoint, GrassPatch};

/// A pluggable source of candidate grass patches.
///
/// Implementations return patches within `radius_m` of `center`, ranked by
/// distance ascending, with `distance_m` and `walk_time_secs` computed from
/// the caller's position.
#[async_trait]
pub trait PatchDiscovery: Send + Sync {
    async fn find_nearby(
        &self,
        center: GeoPoint,
        radius_m: u32,
    ) -> Result<Vec<GrassPatch>, DiscoveryError>;
}
