//! Client configuration.
//!
//! Values come from the builder first, then from the environment, then from
//! built-in defaults:
//!
//! | Setting | Env var | Default |
//! |---------|---------|---------|
//! | server template | `TARGET_SERVER_URL` | catalog server (`https://mc.adobe.io/{tenant-name}/target`) |
//! | request timeout | `TARGET_HTTP_TIMEOUT_SECS` | 30 s |
//! | proxy | `TARGET_PROXY_URL` | none |
//! | idle connections per host | `TARGET_HTTP_POOL_MAX_IDLE_PER_HOST` | 32 |
//!
//! Credentials for [`crate::TargetClient::from_env`] are read from
//! `TARGET_TENANT`, `TARGET_APIKEY` and `TARGET_TOKEN`.

use std::env;
use std::time::Duration;

pub const ENV_SERVER_URL: &str = "TARGET_SERVER_URL";
pub const ENV_TIMEOUT_SECS: &str = "TARGET_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "TARGET_PROXY_URL";
pub const ENV_POOL_MAX_IDLE: &str = "TARGET_HTTP_POOL_MAX_IDLE_PER_HOST";

pub const ENV_TENANT: &str = "TARGET_TENANT";
pub const ENV_API_KEY: &str = "TARGET_APIKEY";
pub const ENV_TOKEN: &str = "TARGET_TOKEN";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Transport and server settings shared by every call of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server URL template containing `{tenant-name}`. `None` uses the
    /// catalog's server.
    pub server_url: Option<String>,
    pub timeout: Duration,
    pub proxy: Option<String>,
    pub pool_max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with whatever the environment provides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            server_url: non_empty(ENV_SERVER_URL),
            timeout: non_empty(ENV_TIMEOUT_SECS)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            proxy: non_empty(ENV_PROXY_URL),
            pool_max_idle_per_host: non_empty(ENV_POOL_MAX_IDLE)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
        }
    }
}
