//! # warren - AMQP Message Dispatch
//!
//! `warren` turns each message delivered to a consumer into a single call of a
//! handler method on an *interpreter* object, or into a diagnostic when no
//! handler exists.
//!
//! - The interpreter is chosen per exchange: an exact binding wins, then the
//!   `*` wildcard binding, then the consumer's own default interpreter.
//! - The handler is chosen per routing key: `order.created` is handled by the
//!   method `readOrderCreated`.
//! - The body is decoded as JSON, falling back to the raw text.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warren::{Bindings, Factories, InterpreterDispatcher, InterpreterRegistry, prelude::*};
//!
//! #[derive(Default)]
//! struct Orders;
//!
//! #[warren::interpreter]
//! impl Orders {
//!     async fn read_order_created(&self, body: Body, ctx: &DispatchContext) {
//!         println!("{} on {}: {}", ctx.routing_key, ctx.exchange, body);
//!     }
//! }
//!
//! let mut factories = Factories::new();
//! factories.register_interpreter("Orders", Orders::default)?;
//!
//! let dispatcher = InterpreterDispatcher::new(
//!     InterpreterRegistry::builder()
//!         .bindings(Bindings::new().bind("orders", "Orders")?)
//!         .factories(factories)
//!         .build(),
//! );
//!
//! let message = InboundMessage::new("orders", "order.created", r#"{"id": 7}"#);
//! dispatcher.dispatch(&message).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use warren_core::{
    // Payload
    Body,
    // Errors
    BodyError,
    BoxError,
    ConfigError,
    DeliveryTag,
    DispatchContext,
    DispatchError,
    // Dispatcher
    DispatchOutcome,
    Dispatcher,
    DynDispatcher,
    DynHandler,
    // Handler
    Handler,
    // Message
    InboundMessage,
    // Interpreter
    DefaultInterpreter,
    Interpreter,
    IntoOutcome,
    READ_PREFIX,
    ReadHandler,
    RegistryError,
    Severity,
    method_name,
    trace_log,
};

pub use warren_std::{
    config::{Bindings, ConfigLoadError, ConsumerConfig, WILDCARD},
    dispatcher::InterpreterDispatcher,
    registry::{Factories, InterpreterRegistry, RegistryBuilder},
    table::{TableInterpreter, TableInterpreterBuilder},
};

/// Interpreter resolution.
pub mod registry {
    pub use warren_std::registry::{
        ExactBinding, Factories, FallbackInterpreter, Instance, InterpreterRegistry,
        RegistryBuilder, Resolution, Resolve, WildcardBinding, instantiate,
    };
    #[cfg(feature = "inventory")]
    pub use warren_std::registry::InterpreterRegistration;
}

/// Consumer configuration.
pub mod config {
    pub use warren_std::config::{Bindings, ConfigLoadError, ConsumerConfig, WILDCARD};
}

/// Dispatcher layers.
pub mod layers {
    pub use warren_std::layers::Traced;
    #[cfg(feature = "timeout")]
    pub use warren_std::layers::Timeout;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use warren_std::testing::*;
}

/// Prelude module - common imports for Warren.
///
/// # Usage
///
/// ```rust,ignore
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Body, BoxError, DispatchContext, DispatchError, DispatchOutcome, Dispatcher, Handler,
        InboundMessage, Interpreter, IntoOutcome, Severity,
    };
}

#[cfg(feature = "macros")]
pub use warren_macros::interpreter;

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "inventory")]
pub use warren_std::submit_interpreter;
