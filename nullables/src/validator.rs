//! Nullable proof validator: scripted verdicts and faults.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use touchgrass_validation::{
    ExpectedLocation, ProofImage, ProofValidator, ValidationFault, ValidationReport, Verdict,
};

/// A scripted validator for testing.
///
/// Queued results are replayed in order; once the queue is empty the default
/// report is returned. Tracks how many times it was called.
pub struct NullValidator {
    script: Mutex<VecDeque<Result<ValidationReport, ValidationFault>>>,
    default_report: ValidationReport,
    call_count: AtomicU32,
}

impl NullValidator {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            default_report: ValidationReport {
                verdict: Verdict::Positive,
                confidence: 90,
                reason: "scripted verdict".to_string(),
            },
            call_count: AtomicU32::new(0),
        }
    }

    /// A validator whose default verdict is positive at the given confidence.
    pub fn positive(confidence: u8) -> Self {
        let mut v = Self::new();
        v.default_report.confidence = confidence;
        v
    }

    /// A validator whose default verdict is negative.
    pub fn negative() -> Self {
        let mut v = Self::new();
        v.default_report.verdict = Verdict::Negative;
        v.default_report.confidence = 85;
        v.default_report.reason = "that is a carpet".to_string();
        v
    }

    /// Queue a report to be returned on an upcoming call.
    pub fn push_report(&self, report: ValidationReport) {
        self.script.lock().unwrap().push_back(Ok(report));
    }

    /// Queue a fault to be returned on an upcoming call.
    pub fn push_fault(&self, fault: ValidationFault) {
        self.script.lock().unwrap().push_back(Err(fault));
    }

    /// How many times `validate` was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for NullValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProofValidator for NullValidator {
    fn id(&self) -> &str {
        "null-validator"
    }

    async fn validate(
        &self,
        _image: &ProofImage,
        _expected: &ExpectedLocation,
    ) -> Result<ValidationReport, ValidationFault> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.default_report.clone()),
        }
    }
}

/// A validator that never answers, for exercising the engine's timeout.
pub struct StalledValidator;

#[async_trait]
impl ProofValidator for StalledValidator {
    fn id(&self) -> &str {
        "stalled-validator"
    }

    async fn validate(
        &self,
        _image: &ProofImage,
        _expected: &ExpectedLocation,
    ) -> Result<ValidationReport, ValidationFault> {
        std::future::pending::<()>().await;
        unreachable!("pending future resolved")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchgrass_types::GeoPoint;

    fn inputs() -> (ProofImage, ExpectedLocation) {
        (
            ProofImage::new("photos/x.jpg", 1024),
            ExpectedLocation {
                name: "Test Patch".to_string(),
                location: GeoPoint::new(0.0, 0.0),
            },
        )
    }

    #[tokio::test]
    async fn scripted_results_replay_in_order() {
        let validator = NullValidator::positive(90);
        validator.push_fault(ValidationFault::Unavailable("down".to_string()));
        validator.push_report(ValidationReport {
            verdict: Verdict::Negative,
            confidence: 50,
            reason: "no".to_string(),
        });

        let (image, expected) = inputs();
        assert!(validator.validate(&image, &expected).await.is_err());
        let second = validator.validate(&image, &expected).await.unwrap();
        assert_eq!(second.verdict, Verdict::Negative);
        // Queue drained: defaults from here on.
        let third = validator.validate(&image, &expected).await.unwrap();
        assert_eq!(third.verdict, Verdict::Positive);
        assert_eq!(validator.call_count(), 3);
    }
}
