//! Dispatcher core traits.

use crate::{error::DispatchError, message::InboundMessage};
use futures::future::BoxFuture;
use std::future::Future;

/// How a successfully dispatched message ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler was found and invoked.
    Invoked {
        /// The method name the routing key mapped to.
        method: String,
    },
    /// No handler matched; diagnostics were logged instead.
    Logged {
        /// The method name the routing key mapped to.
        method: String,
    },
}

impl DispatchOutcome {
    /// The derived method name.
    pub fn method(&self) -> &str {
        match self {
            DispatchOutcome::Invoked { method } | DispatchOutcome::Logged { method } => method,
        }
    }

    /// Returns true if a handler was invoked.
    pub fn is_invoked(&self) -> bool {
        matches!(self, DispatchOutcome::Invoked { .. })
    }
}

/// Turns one inbound message into a handler invocation or a diagnostic.
///
/// Called by the consumer loop once per delivered message, sequentially.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch inbound messages",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Dispatcher` to handle message dispatching."
)]
pub trait Dispatcher: Send + Sync {
    /// Dispatch the message.
    fn dispatch(
        &self,
        message: &InboundMessage,
    ) -> impl Future<Output = Result<DispatchOutcome, DispatchError>> + Send;
}

/// Object-safe version of `Dispatcher` for dynamic dispatch.
pub trait DynDispatcher: Send + Sync {
    /// Dispatch the message.
    fn dispatch_dyn<'a>(
        &'a self,
        message: &'a InboundMessage,
    ) -> BoxFuture<'a, Result<DispatchOutcome, DispatchError>>;
}

impl<T: Dispatcher> DynDispatcher for T {
    fn dispatch_dyn<'a>(
        &'a self,
        message: &'a InboundMessage,
    ) -> BoxFuture<'a, Result<DispatchOutcome, DispatchError>> {
        Box::pin(self.dispatch(message))
    }
}
