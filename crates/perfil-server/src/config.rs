use std::net::SocketAddr;
use std::time::Duration;

use eyre::WrapErr;
use perfil_relay::client::{DEFAULT_TIMEOUT, RelayConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub relay: RelayConfig,
    /// Emit JSON log lines instead of human-readable ones.
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            relay: RelayConfig::default(),
            log_json: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("PERFIL_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("PERFIL_BIND_ADDR is not a socket address")?;

        let timeout = match get("PERFIL_RELAY_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .wrap_err("PERFIL_RELAY_TIMEOUT_SECS is not a whole number of seconds")?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            bind_addr,
            relay: RelayConfig {
                endpoint: get("PERFIL_RELAY_URL"),
                timeout,
            },
            log_json: get("PERFIL_LOG_JSON").is_some(),
        })
    }
}
