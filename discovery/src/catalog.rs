//! Catalog-backed discovery provider.
//!
//! Ranks a configured catalog of known patches by great-circle distance from
//! the search center. Stands in for a real map/geocoding integration, which
//! would implement the same trait against a places API.

use crate::error::DiscoveryError;
use crate::provider::PatchDiscovery;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use touchgrass_types::{GeoPoint, GrassPatch, PatchId, PatchQuality};

/// A patch as the catalog knows it: everything except the caller-relative
/// distance and walk time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: PatchId,
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    pub difficulty: u8,
    pub quality: PatchQuality,
    pub description: String,
}

impl CatalogEntry {
    fn rank(&self, center: GeoPoint) -> GrassPatch {
        let distance_m = center.distance_m(&self.location).round() as u32;
        GrassPatch {
            id: self.id.clone(),
            name: self.name.clone(),
            location: self.location,
            address: self.address.clone(),
            distance_m,
            difficulty: self.difficulty,
            quality: self.quality,
            walk_time_secs: GeoPoint::walk_secs(distance_m as f64),
            description: self.description.clone(),
        }
    }
}

/// Discovery over a fixed catalog of patches.
pub struct CatalogDiscovery {
    entries: Vec<CatalogEntry>,
}

impl CatalogDiscovery {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// A small built-in catalog for local development and demos.
    pub fn demo() -> Self {
        let entry = |id: &str, name: &str, lat: f64, lng: f64, address: &str, difficulty: u8,
                     quality: PatchQuality, description: &str| CatalogEntry {
            id: PatchId::new(id),
            name: name.to_string(),
            location: GeoPoint::new(lat, lng),
            address: address.to_string(),
            difficulty,
            quality,
            description: description.to_string(),
        };
        Self::new(vec![
            entry(
                "patch-sheep-meadow",
                "Sheep Meadow",
                40.771133,
                -73.974187,
                "Central Park, New York, NY",
                1,
                PatchQuality::Pristine,
                "Fifteen acres of grass with nothing to hide behind. Ideal.",
            ),
            entry(
                "patch-riverside",
                "Riverside Meadow",
                40.800678,
                -73.970485,
                "Riverside Dr & W 104th St, New York, NY",
                2,
                PatchQuality::Decent,
                "Grass with a river view. The geese have opinions.",
            ),
            entry(
                "patch-bryant-lawn",
                "Bryant Park Lawn",
                40.753597,
                -73.983233,
                "Bryant Park, New York, NY",
                3,
                PatchQuality::Questionable,
                "Closes for events. Check before committing an hour of your life.",
            ),
            entry(
                "patch-median-strip",
                "Broadway Median Strip",
                40.789623,
                -73.974605,
                "Broadway & W 96th St, New York, NY",
                5,
                PatchQuality::Sus,
                "Technically grass. Technically.",
            ),
        ])
    }
}

#[async_trait]
impl PatchDiscovery for CatalogDiscovery {
    async fn find_nearby(
        &self,
        center: GeoPoint,
        radius_m: u32,
    ) -> Result<Vec<GrassPatch>, DiscoveryError> {
        if radius_m == 0 {
            return Err(DiscoveryError::InvalidRadius(radius_m));
        }
        let mut ranked: Vec<GrassPatch> = self
            .entries
            .iter()
            .map(|entry| entry.rank(center))
            .filter(|patch| patch.distance_m <= radius_m)
            .collect();
        ranked.sort_by_key(|patch| patch.distance_m);
        Ok(ranked)
    }
}
