// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::upstream::UpstreamClient;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state: the loaded config and the upstream client
/// built from it. Nothing here mutates after startup.
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let upstream = UpstreamClient::new(config.clone())?;
        Ok(Self { config, upstream })
    }
}
