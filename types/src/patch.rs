//! Grass patch: a candidate real-world location surfaced for challenging.

use crate::geo::GeoPoint;
use crate::id::PatchId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative assessment of a patch's grass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchQuality {
    Pristine,
    Decent,
    Questionable,
    Sus,
}

impl fmt::Display for PatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatchQuality::Pristine => "pristine",
            PatchQuality::Decent => "decent",
            PatchQuality::Questionable => "questionable",
            PatchQuality::Sus => "sus",
        };
        write!(f, "{s}")
    }
}

/// A candidate real-world grass location.
///
/// Produced by the discovery collaborator per session, with distance and walk
/// time precomputed from the searcher's position. Immutable once created; the
/// engine snapshots the fields it needs into the challenge record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrassPatch {
    pub id: PatchId,
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    /// Distance from the user at discovery time, in meters.
    pub distance_m: u32,
    /// Difficulty rating, 1 (trivially reachable) to 5 (an expedition).
    pub difficulty: u8,
    pub quality: PatchQuality,
    /// Estimated walking time from the discovery position, in seconds.
    pub walk_time_secs: u32,
    /// Flavor text for the card deck. Cosmetic; the engine ignores it.
    pub description: String,
}
