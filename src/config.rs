//! Runtime configuration read from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CART_SESSION_KEY` | `cart` | Session Store key holding the snapshot |
//! | `CART_MAILBOX_CAPACITY` | `32` | Bound of the cart actor's mailbox |
//! | `CART_SESSION_DIR` | unset | Directory for a file-backed session; in-memory when unset |

use crate::codec::CART_KEY;
use std::path::PathBuf;
use thiserror::Error;

pub const SESSION_KEY_VAR: &str = "CART_SESSION_KEY";
pub const MAILBOX_CAPACITY_VAR: &str = "CART_MAILBOX_CAPACITY";
pub const SESSION_DIR_VAR: &str = "CART_SESSION_DIR";

const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub session_key: String,
    pub mailbox_capacity: usize,
    pub session_dir: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            session_key: CART_KEY.to_string(),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            session_dir: None,
        }
    }
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup(SESSION_KEY_VAR) {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    SESSION_KEY_VAR,
                    "must not be empty".into(),
                ));
            }
            config.session_key = key;
        }

        if let Some(raw) = lookup(MAILBOX_CAPACITY_VAR) {
            let capacity: usize = raw.trim().parse().map_err(|e| {
                ConfigError::InvalidEnvVar(MAILBOX_CAPACITY_VAR, format!("{raw:?}: {e}"))
            })?;
            if capacity == 0 {
                return Err(ConfigError::InvalidEnvVar(
                    MAILBOX_CAPACITY_VAR,
                    "must be positive".into(),
                ));
            }
            config.mailbox_capacity = capacity;
        }

        config.session_dir = lookup(SESSION_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
