use crate::provides::ProvidesMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Which Quad9 service variant to query.
    #[serde(default)]
    pub provides: ProvidesMode,

    /// Upper bound for one HTTP exchange, body included.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            provides: ProvidesMode::default(),
            timeout_ms: default_timeout_ms(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_pool_max_idle_per_host() -> usize {
    4
}
