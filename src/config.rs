use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: &str = "10";
const MAX_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub upstream_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        let timeout = lookup("UPSTREAM_TIMEOUT_SECS").unwrap_or_else(|| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string());
        let timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| AppError::ConfigError(format!("Invalid upstream timeout: {}", e)))?;
        if timeout_secs == 0 {
            return Err(AppError::ConfigError("Upstream timeout must be at least one second".to_string()));
        }
        let upstream_timeout = Duration::from_secs(timeout_secs);

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            upstream_timeout,
            connect_timeout: upstream_timeout.min(MAX_CONNECT_TIMEOUT),
        })
    }
}
