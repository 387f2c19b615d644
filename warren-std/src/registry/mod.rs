//! Interpreter registry.
//!
//! Resolves the interpreter for an exchange by walking an ordered list of
//! [`Resolve`] strategies. The standard list built by [`RegistryBuilder`] is:
//!
//! 1. the binding for exactly this exchange,
//! 2. the wildcard `*` binding,
//! 3. the default interpreter (the consumer itself).
//!
//! Resolution either yields a valid interpreter or a [`ConfigError`]; it never
//! hands out a partially resolved one.

pub mod factories;
pub mod resolve;

pub use factories::{Factories, Instance};
#[cfg(feature = "inventory")]
pub use factories::InterpreterRegistration;
pub use resolve::{
    ExactBinding, FallbackInterpreter, Resolution, Resolve, WildcardBinding, instantiate,
};

use crate::config::Bindings;
use std::sync::Arc;
use tracing::debug;
use warren_core::{ConfigError, DefaultInterpreter, Interpreter};

/// An ordered chain of resolution strategies.
pub struct InterpreterRegistry {
    strategies: Vec<Box<dyn Resolve>>,
}

impl InterpreterRegistry {
    /// Start building the standard three-tier registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Use a custom list of strategies, evaluated in order.
    pub fn with_strategies(strategies: Vec<Box<dyn Resolve>>) -> Self {
        Self { strategies }
    }

    /// Resolve the interpreter for `exchange`.
    ///
    /// Fails with [`ConfigError::Unresolved`] only when every strategy declines,
    /// which cannot happen with the standard chain.
    pub fn resolve(&self, exchange: &str) -> Result<Arc<dyn Interpreter>, ConfigError> {
        for strategy in &self.strategies {
            match strategy.resolve(exchange)? {
                Resolution::Resolved(interpreter) => {
                    debug!(exchange, tier = strategy.tier(), "interpreter resolved");
                    return Ok(interpreter);
                }
                Resolution::Next => continue,
            }
        }
        Err(ConfigError::Unresolved(exchange.to_owned()))
    }

    /// Names of the tiers, in evaluation order.
    pub fn tiers(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.tier()).collect()
    }
}

/// Builder for the standard three-tier [`InterpreterRegistry`].
pub struct RegistryBuilder {
    bindings: Bindings,
    factories: Factories,
    default: Option<Arc<dyn Interpreter>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a builder with no bindings, no factories and [`DefaultInterpreter`].
    pub fn new() -> Self {
        Self {
            bindings: Bindings::new(),
            factories: Factories::new(),
            default: None,
        }
    }

    /// Set the interpreter bindings.
    pub fn bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Set the factory registry.
    pub fn factories(mut self, factories: Factories) -> Self {
        self.factories = factories;
        self
    }

    /// Set the interpreter used when no binding applies.
    pub fn default_interpreter<I: Interpreter>(mut self, interpreter: I) -> Self {
        self.default = Some(Arc::new(interpreter));
        self
    }

    /// Set an already shared default interpreter.
    pub fn shared_default(mut self, interpreter: Arc<dyn Interpreter>) -> Self {
        self.default = Some(interpreter);
        self
    }

    /// Build the registry.
    pub fn build(self) -> InterpreterRegistry {
        let bindings = Arc::new(self.bindings);
        let factories = Arc::new(self.factories);
        let default: Arc<dyn Interpreter> = match self.default {
            Some(interpreter) => interpreter,
            None => Arc::new(DefaultInterpreter),
        };

        let strategies: Vec<Box<dyn Resolve>> = vec![
            Box::new(ExactBinding::new(bindings.clone(), factories.clone())),
            Box::new(WildcardBinding::new(bindings, factories)),
            Box::new(FallbackInterpreter::new(default)),
        ];
        InterpreterRegistry::with_strategies(strategies)
    }
}
