//! Table-driven interpreters.
//!
//! A [`TableInterpreter`] is built at runtime from handlers keyed by routing
//! key. Keys are converted with [`method_name`] on insertion, so lookups by
//! method name are a single map access.

use std::{collections::HashMap, fmt};
use warren_core::{
    DynHandler, Handler, Interpreter, ReadHandler, RegistryError, Severity, method_name,
    trace_log,
};

type Logger = Box<dyn Fn(&str, Severity) + Send + Sync>;

/// An interpreter backed by a method name → handler map.
///
/// # Example
///
/// ```rust,ignore
/// let orders = TableInterpreter::builder()
///     .on("order.created", |body: Body, ctx: DispatchContext| async move {
///         println!("created on {}: {}", ctx.exchange, body);
///     })?
///     .build();
/// ```
pub struct TableInterpreter {
    handlers: HashMap<String, Box<dyn DynHandler>>,
    logger: Option<Logger>,
}

impl TableInterpreter {
    /// Start building a table.
    pub fn builder() -> TableInterpreterBuilder {
        TableInterpreterBuilder::default()
    }

    /// The method names this table answers, in no particular order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if the table has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Interpreter for TableInterpreter {
    fn handler(&self, method: &str) -> Option<ReadHandler<'_>> {
        self.handlers
            .get(method)
            .map(|handler| ReadHandler::from_handler(handler.as_ref()))
    }

    fn log(&self, message: &str, severity: Severity) {
        match &self.logger {
            Some(logger) => logger(message, severity),
            None => trace_log(message, severity),
        }
    }
}

impl fmt::Debug for TableInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableInterpreter")
            .field("methods", &self.handlers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Builder for [`TableInterpreter`].
#[derive(Default)]
pub struct TableInterpreterBuilder {
    handlers: HashMap<String, Box<dyn DynHandler>>,
    logger: Option<Logger>,
    allow_overrides: bool,
}

impl TableInterpreterBuilder {
    /// Allow a later handler to replace an earlier one for the same method name.
    pub fn allow_overrides(mut self) -> Self {
        self.allow_overrides = true;
        self
    }

    /// Register a handler for a routing key.
    ///
    /// Returns an error if the key maps to a method name that is already taken.
    pub fn insert<H: Handler>(&mut self, routing_key: &str, handler: H) -> Result<(), RegistryError> {
        let method = method_name(routing_key);
        if !self.allow_overrides && self.handlers.contains_key(&method) {
            return Err(RegistryError::DuplicateHandler(method));
        }
        self.handlers.insert(method, Box::new(handler));
        Ok(())
    }

    /// Chaining variant of [`insert`](Self::insert).
    pub fn on<H: Handler>(mut self, routing_key: &str, handler: H) -> Result<Self, RegistryError> {
        self.insert(routing_key, handler)?;
        Ok(self)
    }

    /// Send log records to `logger` instead of `tracing`.
    pub fn with_logger<F>(mut self, logger: F) -> Self
    where
        F: Fn(&str, Severity) + Send + Sync + 'static,
    {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> TableInterpreter {
        TableInterpreter {
            handlers: self.handlers,
            logger: self.logger,
        }
    }
}
