//! Error types for Warren.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ConfigError`] - Interpreter resolution failed (fatal for the message)
//! - [`DispatchError`] - Everything the dispatcher hands back to the consumer loop
//! - [`RegistryError`] - Duplicate registrations while building registries
//! - [`BodyError`] - Typed deserialization of a decoded payload

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving the interpreter for an exchange.
///
/// These are configuration problems, not transient ones: retrying the same
/// message against the same configuration fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The binding names an identifier with no registered factory.
    #[error("interpreter '{0}' was not found")]
    UnknownInterpreter(String),

    /// The identifier was constructed but does not carry the interpreter capability.
    #[error("'{0}' is not a valid interpreter")]
    InvalidInterpreter(String),

    /// Every resolution strategy declined the exchange.
    #[error("no interpreter resolved for exchange '{0}'")]
    Unresolved(String),
}

impl ConfigError {
    /// The identifier (or exchange, for [`ConfigError::Unresolved`]) carried for diagnostics.
    pub fn identifier(&self) -> &str {
        match self {
            ConfigError::UnknownInterpreter(id)
            | ConfigError::InvalidInterpreter(id)
            | ConfigError::Unresolved(id) => id,
        }
    }
}

/// Errors surfaced by a dispatcher to its caller.
///
/// Decode failures and unknown routing keys never show up here: they are
/// recovered inside the dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Interpreter resolution failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The handler itself failed. Display and source are the handler's own.
    #[error(transparent)]
    Handler(BoxError),

    /// A caller-side deadline elapsed before the dispatch completed.
    #[error("dispatch timed out after {0:?}")]
    Timeout(Duration),
}

impl DispatchError {
    /// Returns true if the error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, DispatchError::Config(_))
    }

    /// Unwraps the error raised by the handler, if that is what this is.
    pub fn into_handler_error(self) -> Option<BoxError> {
        match self {
            DispatchError::Handler(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Handler(err)
    }
}

/// Errors that can occur while building registries and handler tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A factory was already registered under this name.
    #[error("factory already registered under name: {0}")]
    DuplicateFactory(String),

    /// The exchange already has a binding.
    #[error("binding already exists for exchange: {0}")]
    DuplicateBinding(String),

    /// A handler was already registered for this method name.
    #[error("handler already registered for method: {0}")]
    DuplicateHandler(String),
}

/// Errors from typed deserialization of a [`Body`](crate::Body).
#[derive(Error, Debug)]
pub enum BodyError {
    /// The payload did not decode as structured data.
    #[error("payload is not structured data")]
    NotStructured,

    /// The structured payload does not match the requested type.
    #[error("payload does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}
