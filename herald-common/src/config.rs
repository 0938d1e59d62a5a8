//! Site-wide configuration.
//!
//! Actions fall back to the site's configured sender address whenever a rule
//! does not supply an explicit from/reply-to address. The configuration is
//! loaded once from a TOML file and handed to the actions at construction
//! time; there is no ambient global lookup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{Address, AddressError};

/// Errors produced while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML, or the site sender address is malformed
    /// (the `mail` field deserializes through [`Address`]).
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The sender address is syntactically invalid.
    #[error("Invalid site sender address: {0}")]
    InvalidSender(#[from] AddressError),
}

/// Site configuration consumed by the notification actions.
///
/// ```toml
/// name = "Example Site"
/// mail = "no-reply@example.com"
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site name.
    #[serde(default)]
    pub name: String,

    /// The default sender address, used when an action's parameters do not
    /// carry an explicit from/reply-to address.
    pub mail: Address,
}

impl SiteConfig {
    /// Construct a configuration with just a default sender.
    #[must_use]
    pub fn new(mail: Address) -> Self {
        Self {
            name: String::new(),
            mail,
        }
    }

    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read, is not valid
    /// TOML, or carries a malformed sender address.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
