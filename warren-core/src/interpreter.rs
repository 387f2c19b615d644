//! # Interpreter Capability
//!
//! An interpreter is the object a message is dispatched to. It exposes one
//! handler per supported routing key, looked up by method name, and a logging
//! capability used for the diagnostics of unroutable messages.
//!
//! Method names come from [`method_name`](crate::method_name): an interpreter
//! answering `"readOrderCreated"` handles routing key `order.created`.

use crate::{handler::ReadHandler, severity::Severity};

/// The capability contract every interpreter satisfies.
///
/// # Example
///
/// ```rust
/// use warren_core::{BoxError, Interpreter, ReadHandler};
///
/// struct Pings;
///
/// impl Interpreter for Pings {
///     fn handler(&self, method: &str) -> Option<ReadHandler<'_>> {
///         match method {
///             "readPing" => Some(ReadHandler::new(|_body, ctx| async move {
///                 println!("ping from {}", ctx.exchange);
///                 Ok::<(), BoxError>(())
///             })),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(Pings.handles("readPing"));
/// assert!(!Pings.handles("readPong"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an interpreter",
    label = "missing `Interpreter` implementation",
    note = "Implement `Interpreter` directly, or annotate an impl block with `#[warren::interpreter]`."
)]
pub trait Interpreter: Send + Sync + 'static {
    /// Look up the handler for a method name.
    fn handler(&self, method: &str) -> Option<ReadHandler<'_>>;

    /// Returns true if a handler exists for the method name.
    fn handles(&self, method: &str) -> bool {
        self.handler(method).is_some()
    }

    /// Emit a log record.
    ///
    /// Forwards to `tracing` unless overridden.
    fn log(&self, message: &str, severity: Severity) {
        trace_log(message, severity);
    }
}

/// Forward a record to `tracing` at the level matching `severity`.
pub fn trace_log(message: &str, severity: Severity) {
    match severity {
        Severity::Error => tracing::error!(target: "warren::interpreter", "{message}"),
        Severity::Warning => tracing::warn!(target: "warren::interpreter", "{message}"),
        Severity::Info => tracing::info!(target: "warren::interpreter", "{message}"),
        Severity::Debug => tracing::debug!(target: "warren::interpreter", "{message}"),
    }
}

/// The interpreter used when no binding applies: the consumer itself.
///
/// It handles nothing, so every message routed to it ends up in the
/// unknown-routing-key diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInterpreter;

impl Interpreter for DefaultInterpreter {
    fn handler(&self, _method: &str) -> Option<ReadHandler<'_>> {
        None
    }
}
