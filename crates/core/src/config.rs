//! Server configuration
//!
//! Read from the process environment after loading an optional `.env` file.
//!
//! | Variable      | Default     |
//! |---------------|-------------|
//! | `IMPROV_HOST` | `127.0.0.1` |
//! | `IMPROV_PORT` | `5000`      |
//! | `IMPROV_SEED` | `true`      |
//! | `IMPROV_LOG`  | `info`      |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::errors::{PromptError, Result};

pub const ENV_HOST: &str = "IMPROV_HOST";
pub const ENV_PORT: &str = "IMPROV_PORT";
pub const ENV_SEED: &str = "IMPROV_SEED";
pub const ENV_LOG: &str = "IMPROV_LOG";

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host:      IpAddr,
    pub port:      u16,
    /// Load the built-in prompts into the store
    pub seed:      bool,
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host:      IpAddr::V4(Ipv4Addr::LOCALHOST),
            port:      DEFAULT_PORT,
            seed:      true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load `.env` (if present) and then read the environment
    pub fn from_env() -> Result<Self> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| PromptError::Config(format!("{} is not an IP address: {}", ENV_HOST, host)))?;
        }

        if let Some(port) = lookup(ENV_PORT) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| PromptError::Config(format!("{} is not a port number: {}", ENV_PORT, port)))?;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            config.seed = parse_bool(&seed)
                .ok_or_else(|| PromptError::Config(format!("{} must be true or false: {}", ENV_SEED, seed)))?;
        }

        if let Some(level) = lookup(ENV_LOG) {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
