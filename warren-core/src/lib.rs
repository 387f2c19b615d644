//! # warren-core
//!
//! Core traits and types for the Warren AMQP message-dispatch core.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! interpreter crates that don't need the full `warren-std` implementation.
//!
//! # Dispatch Pipeline
//!
//! Every inbound message travels the same path:
//!
//! ```text
//! InboundMessage ──► resolve interpreter (by exchange)
//!                ──► method_name(routing key)
//!                ──► Interpreter::handler(method)
//!                      ├─ Some: Body::decode ──► handler(body, &DispatchContext)
//!                      └─ None: Interpreter::log(ERROR) + Interpreter::log(INFO)
//! ```
//!
//! ## Interpreter ([`Interpreter`])
//!
//! The capability contract every handler object satisfies: a fixed lookup from
//! a method name to a [`ReadHandler`], plus a logging capability.
//!
//! ## Handler ([`Handler`])
//!
//! The terminal endpoint where business logic executes. Receives the decoded
//! [`Body`] and a read-only [`DispatchContext`].
//!
//! ## Dispatcher ([`Dispatcher`])
//!
//! Turns one [`InboundMessage`] into a single handler invocation or a
//! diagnostic log emission. The standard implementation lives in `warren-std`.
//!
//! # Error Types
//!
//! - [`ConfigError`] - Interpreter resolution errors
//! - [`DispatchError`] - Errors surfaced to the consumer loop
//! - [`RegistryError`] - Build-time registration errors
//! - [`BodyError`] - Typed payload deserialization errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod body;
mod context;
mod dispatcher;
mod error;
mod handler;
mod interpreter;
mod message;
mod method;
mod severity;

// Re-exports
pub use body::Body;
pub use context::DispatchContext;
pub use dispatcher::{DispatchOutcome, Dispatcher, DynDispatcher};
pub use error::{BodyError, BoxError, ConfigError, DispatchError, RegistryError};
pub use handler::{DynHandler, Handler, IntoOutcome, ReadHandler};
pub use interpreter::{DefaultInterpreter, Interpreter, trace_log};
pub use message::{DeliveryTag, InboundMessage};
pub use method::{READ_PREFIX, method_name};
pub use severity::Severity;
