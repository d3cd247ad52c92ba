//! The proof validator trait.

use crate::error::ValidationFault;
use crate::report::{ExpectedLocation, ProofImage, ValidationReport};
use async_trait::async_trait;

/// A pluggable photo-proof validator.
///
/// Implementations judge whether a submitted photo plausibly shows the user
/// at the expected location. The engine treats the call as a remote service:
/// it bounds it with a timeout and keeps the challenge active on any
/// [`ValidationFault`].
#[async_trait]
pub trait ProofValidator: Send + Sync {
    /// Identifier of this validator (e.g. the backing model name).
    fn id(&self) -> &str;

    /// Judge a submission against the expected location.
    async fn validate(
        &self,
        image: &ProofImage,
        expected: &ExpectedLocation,
    ) -> Result<ValidationReport, ValidationFault>;
}
