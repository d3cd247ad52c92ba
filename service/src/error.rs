use thiserror::Error;
use touchgrass_discovery::DiscoveryError;
use touchgrass_engine::EngineError;
use touchgrass_store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}
