use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DiscoveryError {
    #[error("discovery provider unavailable: {0}")]
    Unavailable(String),

    #[error("invalid search radius: {0}m")]
    InvalidRadius(u32),
}
