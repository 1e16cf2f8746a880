//! Runtime configuration read from the environment (and `.env`).

use crate::common::{P2PExchange, RateScannerError};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_REFRESH_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ScannerConfig {
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// Poll period of `watch`
    pub refresh_interval: Duration,
    /// Listen address of the HTTP endpoint
    pub bind_addr: SocketAddr,
    /// API base overrides, keyed by exchange
    pub api_bases: HashMap<P2PExchange, String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            api_bases: HashMap::new(),
        }
    }
}

/// Loads `.env` from the current or project directory. Call before reading env vars.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

impl ScannerConfig {
    /// Loads `.env`, then reads the process environment.
    pub fn from_env() -> Result<Self, RateScannerError> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    ///
    /// Keys:
    /// - `P2P_HTTP_TIMEOUT_SECS`
    /// - `P2P_REFRESH_SECS`
    /// - `P2P_BIND_ADDR`
    /// - `P2P_<EXCHANGE>_API_BASE`, e.g. `P2P_BINANCE_API_BASE`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RateScannerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ScannerConfig::default();

        if let Some(secs) = read_secs(&lookup, "P2P_HTTP_TIMEOUT_SECS")? {
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = read_secs(&lookup, "P2P_REFRESH_SECS")? {
            config.refresh_interval = Duration::from_secs(secs);
        }
        if let Some(addr) = lookup("P2P_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr.trim().parse().map_err(|_| {
                RateScannerError::Config(format!("P2P_BIND_ADDR is not a socket address: {}", addr))
            })?;
        }

        for exchange in P2PExchange::ALL {
            let key = format!("P2P_{}_API_BASE", exchange.display_name().to_ascii_uppercase());
            if let Some(base) = lookup(&key).filter(|v| !v.trim().is_empty()) {
                config.api_bases.insert(exchange, base.trim().to_string());
            }
        }

        Ok(config)
    }

    /// Configured base for `exchange`, or `default` when none is set.
    pub fn api_base<'a>(&'a self, exchange: P2PExchange, default: &'a str) -> &'a str {
        self.api_bases
            .get(&exchange)
            .map(String::as_str)
            .unwrap_or(default)
    }

    pub fn with_api_base(mut self, exchange: P2PExchange, base: &str) -> Self {
        self.api_bases.insert(exchange, base.to_string());
        self
    }
}

fn read_secs<F>(lookup: &F, key: &str) -> Result<Option<u64>, RateScannerError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    let secs: u64 = raw.trim().parse().map_err(|_| {
        RateScannerError::Config(format!("{} must be a whole number of seconds: {}", key, raw))
    })?;
    if secs == 0 {
        return Err(RateScannerError::Config(format!("{} must be greater than zero", key)));
    }
    Ok(Some(secs))
}
