//! Configuration resolution.
//!
//! Gathers the four required parameters from a key/value lookup. The
//! binary binds the lookup to the process environment; tests pass a map.

use std::fmt;

use tracing::debug;

use super::constants::{ENV_KEY, ENV_REGION, ENV_REGISTRY, ENV_SECRET, MAX_RETRIES};
use crate::error::ConfigError;

/// Validated parameters for a single credential exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    access_key: String,
    secret_key: String,
    region: String,
    registry_id: String,
    max_retries: u32,
}

impl Config {
    /// Resolve configuration from `lookup`.
    ///
    /// A name the lookup does not know is treated as an empty value.
    /// Fields are checked in order `KEY`, `SECRET`, `REGION`, `REGISTRY`
    /// and the first empty one is reported.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first empty variable.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ConfigError::Missing(name)),
            }
        };

        let access_key = read(ENV_KEY)?;
        let secret_key = read(ENV_SECRET)?;
        let region = read(ENV_REGION)?;
        let registry_id = read(ENV_REGISTRY)?;

        debug!(region = %region, registry_id = %registry_id, "configuration resolved");

        Ok(Self {
            access_key,
            secret_key,
            region,
            registry_id,
            max_retries: MAX_RETRIES,
        })
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn registry_id(&self) -> &str {
        &self.registry_id
    }

    /// Retry budget for the authorization request.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("region", &self.region)
            .field("registry_id", &self.registry_id)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
