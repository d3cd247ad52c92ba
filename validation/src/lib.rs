//! Photo proof validation for the touchgrass core.
//!
//! The engine does not know HOW a photo is judged, only THAT a judgement
//! arrives: a positive or negative [`Verdict`] with a confidence, or a
//! [`ValidationFault`] when no judgement could be produced at all. The two
//! are never conflated: a fault leaves the challenge active and retryable,
//! a negative verdict fails it.
//!
//! [`HeuristicValidator`] is the current placeholder implementation; a real
//! image-recognition backend slots in behind the same trait.

pub mod error;
pub mod heuristic;
pub mod report;
pub mod validator;

pub use error::ValidationFault;
pub use heuristic::HeuristicValidator;
pub use report::{ExpectedLocation, ProofImage, ValidationReport, Verdict};
pub use validator::ProofValidator;
