//! Validation inputs and the verdict report.

use serde::{Deserialize, Serialize};
use touchgrass_types::{GeoPoint, Timestamp};

/// A submitted proof photo, as the mobile client describes it.
///
/// The engine never inspects pixels; it hands the upload's metadata to the
/// validator and persists only `reference`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProofImage {
    /// Storage key or URI of the uploaded photo.
    pub reference: String,
    /// Size of the upload in bytes.
    pub byte_len: u64,
    /// EXIF geotag, if the photo carried one.
    pub claimed_location: Option<GeoPoint>,
    /// EXIF capture timestamp, if the photo carried one.
    pub captured_at: Option<Timestamp>,
}

impl ProofImage {
    pub fn new(reference: impl Into<String>, byte_len: u64) -> Self {
        Self {
            reference: reference.into(),
            byte_len,
            claimed_location: None,
            captured_at: None,
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.claimed_location = Some(location);
        self
    }

    pub fn with_captured_at(mut self, captured_at: Timestamp) -> Self {
        self.captured_at = Some(captured_at);
        self
    }
}

/// Where the proof is supposed to have been taken.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpectedLocation {
    pub name: String,
    pub location: GeoPoint,
}

/// The validator's judgement of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Positive,
    Negative,
}

/// A produced verdict with its confidence and reasoning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub verdict: Verdict,
    /// How sure the validator is of its verdict, 0 to 100.
    pub confidence: u8,
    /// Human-readable reasoning, surfaced in the client.
    pub reason: String,
}

impl ValidationReport {
    pub fn is_positive(&self) -> bool {
        self.verdict == Verdict::Positive
    }
}
