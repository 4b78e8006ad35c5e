//! Configuration model loaded from external sources.

use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base address of the upstream employee resource,
    /// e.g. `http://localhost:8112/api/v1/employee`.
    pub upstream_url: String,
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub read_timeout_secs: u64,
}
