//! Configuration for the file opener.
//!
//! Settings can come from three places: `Default`, environment variables
//! (see [`OpenerConfig::from_env`]), or a JSON fragment embedded in a host
//! program's own configuration (see [`OpenerConfig::from_json`]).

use crate::constants::{DEFAULT_BUFFER_CAPACITY, WITH_BUFFER_CAPACITY_VAR};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Settings for opening file-backed resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenerConfig {
    /// Capacity of the read buffer wrapped around each opened file
    pub buffer_capacity: usize,
}

impl Default for OpenerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl OpenerConfig {
    /// Create a config with the given buffer capacity
    pub fn with_buffer_capacity(buffer_capacity: usize) -> Result<Self> {
        Self { buffer_capacity }.validated()
    }

    /// Build a config from the environment, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        match env::var(WITH_BUFFER_CAPACITY_VAR) {
            Ok(raw) => {
                config.buffer_capacity = raw.trim().parse().map_err(|e| {
                    Error::configuration(format!(
                        "{WITH_BUFFER_CAPACITY_VAR} must be a positive integer, got '{raw}': {e}"
                    ))
                })?;
            }
            Err(env::VarError::NotPresent) => {}
            Err(e) => {
                return Err(Error::configuration(format!(
                    "{WITH_BUFFER_CAPACITY_VAR} is not valid unicode: {e}"
                )))
            }
        }

        config.validated()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.buffer_capacity == 0 {
            return Err(Error::configuration("buffer capacity must be greater than zero"));
        }
        Ok(self)
    }
}
