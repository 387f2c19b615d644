//! # Interpreter Dispatcher
//!
//! The standard [`Dispatcher`]: resolves the interpreter for the message's
//! exchange, maps the routing key to a method name and either invokes the
//! matching handler or logs the message as unroutable.
//!
//! Per message:
//!
//! ```text
//! Received ─► InterpreterResolved ─┬─► MethodFound ─► Decoded ─► Invoked
//!    │                             └─► MethodNotFound ─► Logged
//!    └─► Failed(ConfigError)
//! ```
//!
//! No retries happen here; retry, ack and reject policy belong to the caller.

use crate::registry::InterpreterRegistry;
use tracing::debug;
use warren_core::{
    Body, DispatchContext, DispatchError, DispatchOutcome, Dispatcher, InboundMessage,
    Interpreter, Severity, method_name,
};

/// Dispatches inbound messages to the interpreters of an [`InterpreterRegistry`].
pub struct InterpreterDispatcher {
    registry: InterpreterRegistry,
}

impl InterpreterDispatcher {
    /// Create a dispatcher over a registry.
    pub fn new(registry: InterpreterRegistry) -> Self {
        Self { registry }
    }

    /// The registry used for resolution.
    pub fn registry(&self) -> &InterpreterRegistry {
        &self.registry
    }
}

impl Dispatcher for InterpreterDispatcher {
    async fn dispatch(&self, message: &InboundMessage) -> Result<DispatchOutcome, DispatchError> {
        let interpreter = self.registry.resolve(message.exchange())?;
        let method = method_name(message.routing_key());
        let body = Body::decode(message.body());

        match interpreter.handler(&method) {
            Some(handler) => {
                debug!(
                    exchange = message.exchange(),
                    routing_key = message.routing_key(),
                    method = %method,
                    raw = body.is_raw(),
                    "invoking handler"
                );
                handler
                    .invoke(body, DispatchContext::from_message(message))
                    .await
                    .map_err(DispatchError::Handler)?;
                Ok(DispatchOutcome::Invoked { method })
            }
            None => {
                report_unknown(interpreter.as_ref(), message, &body);
                Ok(DispatchOutcome::Logged { method })
            }
        }
    }
}

/// Emit the two diagnostics for an unroutable message: the miss, then the payload.
fn report_unknown(interpreter: &dyn Interpreter, message: &InboundMessage, body: &Body) {
    interpreter.log(
        &format!(
            "Unknown routing key '{}' for exchange '{}'.",
            message.routing_key(),
            message.exchange()
        ),
        Severity::Error,
    );
    interpreter.log(&body.dump(), Severity::Info);
}
