//! Patch discovery for the touchgrass core.
//!
//! Given a coordinate and a radius, a discovery provider returns candidate
//! grass patches ranked by distance, with walk-time estimates precomputed.
//! The lifecycle engine never calls discovery itself; the presentation layer
//! fetches candidates here and passes a chosen patch into the engine.

pub mod catalog;
pub mod error;
pub mod provider;

pub use catalog::{CatalogDiscovery, CatalogEntry};
pub use error::DiscoveryError;
pub use provider::PatchDiscovery;
