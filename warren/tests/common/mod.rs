#![allow(dead_code)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};
use warren::{
    Bindings, Body, Factories, InboundMessage, InterpreterDispatcher, InterpreterRegistry,
    Severity,
};

// ============================================================================
// Shared Records
// ============================================================================

pub type Seen = Arc<Mutex<Vec<Body>>>;
pub type Logs = Arc<Mutex<Vec<(String, Severity)>>>;

pub fn seen() -> Seen {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn logs() -> Logs {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// Host Components
// ============================================================================

/// A host component registered next to the interpreters; not an interpreter.
pub struct Mailer;

/// A domain error raised by handlers.
#[derive(Debug, PartialEq, Eq)]
pub struct PaymentDeclined {
    pub order_id: u64,
}

impl fmt::Display for PaymentDeclined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payment declined for order {}", self.order_id)
    }
}

impl std::error::Error for PaymentDeclined {}

// ============================================================================
// Helpers
// ============================================================================

pub fn dispatcher(bindings: Bindings, factories: Factories) -> InterpreterDispatcher {
    InterpreterDispatcher::new(
        InterpreterRegistry::builder()
            .bindings(bindings)
            .factories(factories)
            .build(),
    )
}

pub fn message(exchange: &str, routing_key: &str, body: &str) -> InboundMessage {
    InboundMessage::new(exchange, routing_key, body)
}
