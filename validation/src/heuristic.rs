//! Heuristic placeholder validator.
//!
//! Stands in for a real image-recognition backend. The verdict is derived
//! entirely from submission metadata: geotag distance to the expected
//! location, upload size plausibility, and presence of a capture timestamp.
//! Deterministic by construction, so the same submission always yields the
//! same report.

use crate::error::ValidationFault;
use crate::report::{ExpectedLocation, ProofImage, ValidationReport, Verdict};
use crate::validator::ProofValidator;
use async_trait::async_trait;

/// Geotag within this radius of the patch reads as "standing on it".
const ON_SITE_RADIUS_M: f64 = 75.0;
/// Geotag within this radius still passes, with reduced confidence.
const NEARBY_RADIUS_M: f64 = 150.0;
/// Uploads smaller than this are unlikely to be a real outdoor photo.
const MIN_PLAUSIBLE_BYTES: u64 = 10 * 1024;

/// Confidence deduction for an implausibly small upload.
const SMALL_UPLOAD_PENALTY: u8 = 25;
/// Confidence deduction when the photo carries no capture timestamp.
const NO_TIMESTAMP_PENALTY: u8 = 10;

/// Metadata-only proof validator.
pub struct HeuristicValidator;

impl HeuristicValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProofValidator for HeuristicValidator {
    fn id(&self) -> &str {
        "heuristic-v1"
    }

    async fn validate(
        &self,
        image: &ProofImage,
        expected: &ExpectedLocation,
    ) -> Result<ValidationReport, ValidationFault> {
        if image.reference.is_empty() {
            return Err(ValidationFault::MalformedInput(
                "submission has no image reference".to_string(),
            ));
        }
        if image.byte_len == 0 {
            return Err(ValidationFault::MalformedInput(
                "submission is zero bytes".to_string(),
            ));
        }

        let claimed = match image.claimed_location {
            Some(location) => location,
            None => {
                return Ok(ValidationReport {
                    verdict: Verdict::Negative,
                    confidence: 60,
                    reason: format!(
                        "no geotag to place you anywhere near {}",
                        expected.name
                    ),
                });
            }
        };

        let distance = claimed.distance_m(&expected.location);
        let report = if distance <= ON_SITE_RADIUS_M {
            ValidationReport {
                verdict: Verdict::Positive,
                confidence: penalize(95, image),
                reason: format!("geotag puts you {:.0}m from {}", distance, expected.name),
            }
        } else if distance <= NEARBY_RADIUS_M {
            ValidationReport {
                verdict: Verdict::Positive,
                confidence: penalize(72, image),
                reason: format!(
                    "geotag is {:.0}m out, close enough to {}",
                    distance, expected.name
                ),
            }
        } else if distance <= 1000.0 {
            ValidationReport {
                verdict: Verdict::Negative,
                confidence: 70,
                reason: format!(
                    "geotag is {:.0}m from {}, which is not touching it",
                    distance, expected.name
                ),
            }
        } else {
            ValidationReport {
                verdict: Verdict::Negative,
                confidence: 95,
                reason: format!(
                    "geotag is {:.1}km from {}",
                    distance / 1000.0,
                    expected.name
                ),
            }
        };
        Ok(report)
    }
}

/// Apply plausibility deductions to a positive verdict's confidence.
fn penalize(base: u8, image: &ProofImage) -> u8 {
    let mut confidence = base;
    if image.byte_len < MIN_PLAUSIBLE_BYTES {
        confidence = confidence.saturating_sub(SMALL_UPLOAD_PENALTY);
    }
    if image.captured_at.is_none() {
        confidence = confidence.saturating_sub(NO_TIMESTAMP_PENALTY);
    }
    confidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchgrass_types::{GeoPoint, Timestamp};

    fn expected() -> ExpectedLocation {
        ExpectedLocation {
            name: "Riverside Meadow".to_string(),
            location: GeoPoint::new(40.800000, -73.960000),
        }
    }

    fn geotagged(lat_offset: f64) -> ProofImage {
        ProofImage::new("photos/abc123.jpg", 2 * 1024 * 1024)
            .with_location(GeoPoint::new(40.800000 + lat_offset, -73.960000))
            .with_captured_at(Timestamp::new(1_700_000_000))
    }

    // One degree of latitude is roughly 111 km; offsets below pick bands.

    #[tokio::test]
    async fn on_site_photo_clears_bonus_threshold() {
        let validator = HeuristicValidator::new();
        let report = validator
            .validate(&geotagged(0.0003), &expected())
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Positive);
        assert!(report.confidence > 80, "got {}", report.confidence);
    }

    #[tokio::test]
    async fn nearby_photo_passes_below_bonus_threshold() {
        let validator = HeuristicValidator::new();
        let report = validator
            .validate(&geotagged(0.0010), &expected())
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Positive);
        assert!(report.confidence <= 80, "got {}", report.confidence);
    }

    #[tokio::test]
    async fn distant_photo_is_rejected() {
        let validator = HeuristicValidator::new();
        let report = validator
            .validate(&geotagged(0.05), &expected())
            .await
            .unwrap();
        assert_eq!(report.verdict, Verdict::Negative);
        assert!(report.reason.contains("km"));
    }

    #[tokio::test]
    async fn missing_geotag_is_a_verdict_not_a_fault() {
        let validator = HeuristicValidator::new();
        let image = ProofImage::new("photos/abc123.jpg", 2 * 1024 * 1024);
        let report = validator.validate(&image, &expected()).await.unwrap();
        assert_eq!(report.verdict, Verdict::Negative);
    }

    #[tokio::test]
    async fn tiny_upload_loses_the_bonus() {
        let validator = HeuristicValidator::new();
        let image = ProofImage::new("photos/thumb.jpg", 4 * 1024)
            .with_location(GeoPoint::new(40.800300, -73.960000))
            .with_captured_at(Timestamp::new(1_700_000_000));
        let report = validator.validate(&image, &expected()).await.unwrap();
        assert_eq!(report.verdict, Verdict::Positive);
        assert_eq!(report.confidence, 70);
    }

    #[tokio::test]
    async fn empty_submission_faults() {
        let validator = HeuristicValidator::new();
        let no_ref = ProofImage::new("", 1024);
        assert!(matches!(
            validator.validate(&no_ref, &expected()).await,
            Err(ValidationFault::MalformedInput(_))
        ));

        let zero_bytes = ProofImage::new("photos/x.jpg", 0);
        assert!(matches!(
            validator.validate(&zero_bytes, &expected()).await,
            Err(ValidationFault::MalformedInput(_))
        ));
    }
}
