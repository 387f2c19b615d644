//! # warren-std
//!
//! Standard implementations for the Warren AMQP dispatch core.
//!
//! This crate provides:
//! - **Configuration**: [`ConsumerConfig`](config::ConsumerConfig) and interpreter [`Bindings`](config::Bindings)
//! - **Registry**: named interpreter [`Factories`](registry::Factories) and the tiered
//!   [`InterpreterRegistry`](registry::InterpreterRegistry)
//! - **Dispatcher**: [`InterpreterDispatcher`](dispatcher::InterpreterDispatcher)
//! - **Table interpreters**: [`TableInterpreter`](table::TableInterpreter) built from closures
//! - **Layers**: tracing spans and caller-side timeouts around any dispatcher
//! - **Testing**: a recording interpreter for asserting invocations and log records

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use warren_core;

// Modules
pub mod config;
pub mod dispatcher;
pub mod layers;
pub mod registry;
pub mod table;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
