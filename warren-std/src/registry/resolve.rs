//! Resolution strategies.
//!
//! Each strategy either resolves the interpreter for an exchange or passes the
//! decision on to the next one. The standard chain is
//! [`ExactBinding`] → [`WildcardBinding`] → [`FallbackInterpreter`].

use super::factories::Factories;
use crate::config::Bindings;
use std::sync::Arc;
use warren_core::{ConfigError, Interpreter};

/// The answer of a single strategy.
pub enum Resolution {
    /// The interpreter for the exchange.
    Resolved(Arc<dyn Interpreter>),
    /// Not this strategy's call, continue to the next one.
    Next,
}

/// One tier of interpreter resolution.
pub trait Resolve: Send + Sync {
    /// Short name of the tier, used in diagnostics.
    fn tier(&self) -> &'static str;

    /// Resolve the interpreter for `exchange`, or decline with [`Resolution::Next`].
    fn resolve(&self, exchange: &str) -> Result<Resolution, ConfigError>;
}

/// Build the interpreter registered under `identifier`.
///
/// Nothing is constructed when the identifier is unknown.
pub fn instantiate(
    factories: &Factories,
    identifier: &str,
) -> Result<Arc<dyn Interpreter>, ConfigError> {
    let instance = factories
        .construct(identifier)
        .ok_or_else(|| ConfigError::UnknownInterpreter(identifier.to_owned()))?;

    instance
        .into_interpreter()
        .ok_or_else(|| ConfigError::InvalidInterpreter(identifier.to_owned()))
}

/// Resolves through the binding for exactly this exchange.
pub struct ExactBinding {
    bindings: Arc<Bindings>,
    factories: Arc<Factories>,
}

impl ExactBinding {
    /// Create the tier.
    pub fn new(bindings: Arc<Bindings>, factories: Arc<Factories>) -> Self {
        Self {
            bindings,
            factories,
        }
    }
}

impl Resolve for ExactBinding {
    fn tier(&self) -> &'static str {
        "exact"
    }

    fn resolve(&self, exchange: &str) -> Result<Resolution, ConfigError> {
        match self.bindings.exact(exchange) {
            Some(identifier) => instantiate(&self.factories, identifier).map(Resolution::Resolved),
            None => Ok(Resolution::Next),
        }
    }
}

/// Resolves through the `*` binding.
pub struct WildcardBinding {
    bindings: Arc<Bindings>,
    factories: Arc<Factories>,
}

impl WildcardBinding {
    /// Create the tier.
    pub fn new(bindings: Arc<Bindings>, factories: Arc<Factories>) -> Self {
        Self {
            bindings,
            factories,
        }
    }
}

impl Resolve for WildcardBinding {
    fn tier(&self) -> &'static str {
        "wildcard"
    }

    fn resolve(&self, _exchange: &str) -> Result<Resolution, ConfigError> {
        match self.bindings.wildcard() {
            Some(identifier) => instantiate(&self.factories, identifier).map(Resolution::Resolved),
            None => Ok(Resolution::Next),
        }
    }
}

/// Always resolves to the consumer's own interpreter.
pub struct FallbackInterpreter {
    interpreter: Arc<dyn Interpreter>,
}

impl FallbackInterpreter {
    /// Create the tier.
    pub fn new(interpreter: Arc<dyn Interpreter>) -> Self {
        Self { interpreter }
    }
}

impl Resolve for FallbackInterpreter {
    fn tier(&self) -> &'static str {
        "default"
    }

    fn resolve(&self, _exchange: &str) -> Result<Resolution, ConfigError> {
        Ok(Resolution::Resolved(self.interpreter.clone()))
    }
}
