//! Deployment settings read once at startup.
//!
//! These only tune how the process runs (where it listens, which upstream it
//! calls). The slash command itself takes no configuration and behaves the
//! same under any of them. Defaults suit a local run against the public
//! SEPTA API:
//!
//! | Variable             | Meaning                               | Default          |
//! |----------------------|---------------------------------------|------------------|
//! | `SEPRR_BIND_ADDR`    | Listen address                        | `0.0.0.0:3000`   |
//! | `SEPTA_BASE_URL`     | NextToArrive API base URL             | public API       |
//! | `SEPTA_TIMEOUT_SECS` | Outbound request timeout              | none             |
//! | `SEPRR_MOCK`         | Serve canned trains (`1`/`true`)      | off              |

use std::net::SocketAddr;

use crate::septa::SeptaConfig;

const ENV_BIND_ADDR: &str = "SEPRR_BIND_ADDR";
const ENV_BASE_URL: &str = "SEPTA_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "SEPTA_TIMEOUT_SECS";
const ENV_MOCK: &str = "SEPRR_MOCK";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that couldn't be parsed
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Outbound SEPTA client settings.
    pub septa: SeptaConfig,

    /// Serve canned trains instead of calling SEPTA.
    pub mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            septa: SeptaConfig::default(),
            mock: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    var: ENV_BIND_ADDR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(ENV_BASE_URL) {
            config.septa = config.septa.with_base_url(value);
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    var: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.septa = config.septa.with_timeout(secs);
        }

        if let Some(value) = lookup(ENV_MOCK) {
            config.mock = parse_flag(ENV_MOCK, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
