//! Configuration for the proxy server
//!
//! Everything comes from environment variables so the API key never lives in
//! the repository or on the device.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SERVER_HOST` | `0.0.0.0` | Bind address |
//! | `SERVER_PORT` | `10000` | Listen port |
//! | `BART_API_KEY` | required | BART API key |
//! | `BART_STATION` | required | Origin station abbreviation, e.g. `embr` |
//! | `BART_DIRECTION` | `s` | `n`, `s`, or empty for both directions |
//! | `BART_BASE_URL` | `https://api.bart.gov/api/etd.aspx` | ETD endpoint |
//! | `UPSTREAM_TIMEOUT_SECS` | `10` | Upstream request timeout |
//! | `LOG_FILTER` | `info,trainspotter_server=debug` | `tracing` filter (overridden by `RUST_LOG`) |

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

use crate::error::{ServerError, ServerResult};

/// Default BART real-time departures endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.bart.gov/api/etd.aspx";

/// Default tracing filter when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,trainspotter_server=debug";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub bind_address: String,

    /// Port to listen on
    pub port: u16,

    /// Upstream API settings
    pub upstream: UpstreamConfig,
}

/// Upstream BART API settings
#[derive(Clone)]
pub struct UpstreamConfig {
    /// ETD endpoint URL
    pub base_url: String,

    /// Origin station abbreviation
    pub station: String,

    /// Secret API key
    pub api_key: String,

    /// Travel direction filter (`n` or `s`), `None` for both
    pub direction: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

// Keep the key out of logs
impl fmt::Debug for UpstreamConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("station", &self.station)
            .field("api_key", &"<redacted>")
            .field("direction", &self.direction)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn load() -> ServerResult<Self> { Self::from_lookup(|key| env::var(key).ok()) }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut port = 10000;
        if let Some(value) = lookup("SERVER_PORT") {
            match value.parse::<u16>() {
                Ok(parsed) => port = parsed,
                Err(_) => warn!("Invalid SERVER_PORT value: {}", value),
            }
        }

        let mut timeout = Duration::from_secs(10);
        if let Some(value) = lookup("UPSTREAM_TIMEOUT_SECS") {
            match value.parse::<u64>() {
                Ok(secs) if secs > 0 => timeout = Duration::from_secs(secs),
                _ => warn!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", value),
            }
        }

        let api_key = required(&lookup, "BART_API_KEY")?;
        let station = required(&lookup, "BART_STATION")?;

        let direction = match lookup("BART_DIRECTION") {
            None => Some("s".to_string()),
            Some(value) if value.trim().is_empty() => None,
            Some(value) => {
                let value = value.trim().to_lowercase();
                if value != "n" && value != "s" {
                    return Err(ServerError::Config(format!("BART_DIRECTION must be n, s or empty, got {value}")));
                }
                Some(value)
            }
        };

        Ok(Self {
            bind_address: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            upstream: UpstreamConfig {
                base_url: lookup("BART_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                station,
                api_key,
                direction,
                timeout,
            },
        })
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ServerError::Config(format!("Invalid bind address {}: {}", self.bind_address, e)))
    }
}

fn required<F>(
    lookup: &F,
    key: &str,
) -> ServerResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ServerError::Config(format!("{key} must be set"))),
    }
}
