//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::Country;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "POSTCODE_ADDR";

/// Environment variable selecting the country.
pub const COUNTRY_VAR: &str = "POSTCODE_COUNTRY";

/// Environment variable pointing at an external dataset file.
pub const DATASET_VAR: &str = "POSTCODE_DATASET";

/// Errors from reading the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid listen address {value:?}")]
    Addr { var: &'static str, value: String },

    #[error("{var}: unknown country {value:?}")]
    Country { var: &'static str, value: String },
}

/// Configuration for the postal code server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Country whose directory is served
    pub country: Country,

    /// External snapshot file; the bundled dataset is used when unset
    pub dataset: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a config serving `country` on the default address.
    pub fn new(country: Country) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            country,
            dataset: None,
        }
    }

    /// Set a custom listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Load the directory from a file instead of the bundled dataset.
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(path.into());
        self
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults
    /// for unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(COUNTRY_VAR) {
            config.country = value.parse().map_err(|_| ConfigError::Country {
                var: COUNTRY_VAR,
                value,
            })?;
        }

        if let Some(value) = get(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::Addr {
                var: ADDR_VAR,
                value,
            })?;
        }

        config.dataset = get(DATASET_VAR).map(PathBuf::from);

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Country::FaroeIslands)
    }
}
