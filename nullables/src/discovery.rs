//! Nullable discovery provider: a fixed patch list.

use async_trait::async_trait;
use touchgrass_discovery::{DiscoveryError, PatchDiscovery};
use touchgrass_types::{GeoPoint, GrassPatch, PatchId, PatchQuality};

/// A discovery provider that returns a fixed list of patches.
pub struct NullDiscovery {
    patches: Vec<GrassPatch>,
}

impl NullDiscovery {
    pub fn new(patches: Vec<GrassPatch>) -> Self {
        Self { patches }
    }

    /// One unremarkable patch 100 meters away.
    pub fn single() -> Self {
        Self::new(vec![NullDiscovery::test_patch("patch-1", 100)])
    }

    /// A ready-made patch for tests that need one without a provider.
    pub fn test_patch(id: &str, distance_m: u32) -> GrassPatch {
        GrassPatch {
            id: PatchId::new(id),
            name: format!("Null Park ({id})"),
            location: GeoPoint::new(40.0, -73.0),
            address: "1 Null Way".to_string(),
            distance_m,
            difficulty: 1,
            quality: PatchQuality::Decent,
            walk_time_secs: GeoPoint::walk_secs(distance_m as f64),
            description: "Grass, in theory.".to_string(),
        }
    }
}

#[async_trait]
impl PatchDiscovery for NullDiscovery {
    async fn find_nearby(
        &self,
        _center: GeoPoint,
        radius_m: u32,
    ) -> Result<Vec<GrassPatch>, DiscoveryError> {
        let mut patches: Vec<GrassPatch> = self
            .patches
            .iter()
            .filter(|p| p.distance_m <= radius_m)
            .cloned()
            .collect();
        patches.sort_by_key(|p| p.distance_m);
        Ok(patches)
    }
}
