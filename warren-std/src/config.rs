//! Consumer configuration and interpreter bindings.
//!
//! Bindings map an exchange name, or the wildcard `*`, to the identifier of a
//! registered interpreter factory. They are loaded once when the consumer
//! starts and never mutated while messages are processed.
//!
//! ```toml
//! exchange = "orders"
//! queue = "orders.worker"
//!
//! [interpreters]
//! orders = "OrderInterpreter"
//! "*" = "FallbackInterpreter"
//! ```

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;
use warren_core::RegistryError;

/// The binding key matching any exchange not otherwise bound.
pub const WILDCARD: &str = "*";

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    /// A binding is structurally invalid.
    #[error("invalid interpreter binding: {0}")]
    Invalid(String),
}

/// Exchange name (or `*`) → interpreter identifier.
///
/// At most one binding per exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    map: BTreeMap<String, String>,
}

impl Bindings {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an exchange (or [`WILDCARD`]) to an interpreter identifier.
    ///
    /// Returns an error if the exchange is already bound.
    pub fn insert(
        &mut self,
        exchange: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let exchange = exchange.into();
        if self.map.contains_key(&exchange) {
            return Err(RegistryError::DuplicateBinding(exchange));
        }
        self.map.insert(exchange, identifier.into());
        Ok(())
    }

    /// Chaining variant of [`insert`](Self::insert).
    pub fn bind(
        mut self,
        exchange: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        self.insert(exchange, identifier)?;
        Ok(self)
    }

    /// The identifier bound to exactly this exchange.
    pub fn exact(&self, exchange: &str) -> Option<&str> {
        self.map.get(exchange).map(String::as_str)
    }

    /// The identifier bound to [`WILDCARD`].
    pub fn wildcard(&self) -> Option<&str> {
        self.exact(WILDCARD)
    }

    /// Number of bindings, wildcard included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(exchange, identifier)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reject empty exchange names and empty identifiers.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        for (exchange, identifier) in self.iter() {
            if exchange.trim().is_empty() {
                return Err(ConfigLoadError::Invalid(format!(
                    "empty exchange name bound to '{identifier}'"
                )));
            }
            if identifier.trim().is_empty() {
                return Err(ConfigLoadError::Invalid(format!(
                    "exchange '{exchange}' is bound to an empty identifier"
                )));
            }
        }
        Ok(())
    }
}

/// Settings for one consumer.
///
/// `exchange` and `queue` are handed to the broker-facing collaborator; the
/// dispatch core itself only reads `interpreters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerConfig {
    /// The exchange the consumer's queue is bound to.
    pub exchange: String,
    /// The queue to consume from.
    pub queue: String,
    /// Interpreter bindings.
    pub interpreters: Bindings,
}

impl ConsumerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        let config: ConsumerConfig = toml::from_str(raw)?;
        config.interpreters.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigLoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading consumer config");
        Self::from_toml_str(&raw)
    }
}
