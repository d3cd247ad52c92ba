//! Embedding surface for the touchgrass core.
//!
//! The presentation layer constructs one [`GrassService`] and talks to
//! nothing else: patch discovery, the challenge lifecycle operations, and
//! the leaderboard read all hang off it. Configuration comes from a TOML
//! file; logging is structured `tracing` with a human or JSON format.

pub mod config;
pub mod error;
pub mod logging;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use logging::{init_logging, LogFormat};
pub use service::{GrassService, LeaderboardRow};
