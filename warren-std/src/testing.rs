//! Testing utilities for Warren.
//!
//! This module provides utilities to make testing interpreters and dispatch
//! configuration easier.
//!
//! # Features
//!
//! - [`RecordingInterpreter`]: An interpreter that records every invocation and log record
//! - [`LogRecord`], [`Invocation`]: What it recorded

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};
use thiserror::Error;
use warren_core::{
    Body, BoxError, DispatchContext, Interpreter, ReadHandler, Severity, method_name,
};

/// A record emitted through [`Interpreter::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The message.
    pub message: String,
    /// The severity.
    pub severity: Severity,
}

/// A recorded handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The method name the handler was looked up by.
    pub method: String,
    /// The decoded body it received.
    pub body: Body,
    /// The context it received.
    pub context: DispatchContext,
}

/// The error returned by a handler registered with [`RecordingInterpreter::failing`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct HandlerFailure(pub String);

#[derive(Clone)]
enum Route {
    Succeed,
    Fail(String),
}

/// An interpreter that records everything it receives.
///
/// Clones share their records, so a clone can be handed to a registry while
/// the original is kept for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingInterpreter::new().handling("order.created");
/// factories.register_shared("Orders", Arc::new(recorder.clone()))?;
///
/// dispatcher.dispatch(&message).await?;
///
/// assert_eq!(recorder.invocations().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingInterpreter {
    routes: HashMap<String, Route>,
    invocations: Arc<Mutex<Vec<Invocation>>>,
    logs: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingInterpreter {
    /// Create an interpreter that handles nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle `routing_key` successfully.
    pub fn handling(mut self, routing_key: &str) -> Self {
        self.routes.insert(method_name(routing_key), Route::Succeed);
        self
    }

    /// Handle `routing_key` by failing with [`HandlerFailure`].
    pub fn failing(mut self, routing_key: &str, message: impl Into<String>) -> Self {
        self.routes
            .insert(method_name(routing_key), Route::Fail(message.into()));
        self
    }

    /// Get a clone of the recorded invocations.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get a clone of the recorded log records.
    pub fn logs(&self) -> Vec<LogRecord> {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clear all records.
    pub fn clear(&self) {
        self.invocations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Interpreter for RecordingInterpreter {
    fn handler(&self, method: &str) -> Option<ReadHandler<'_>> {
        let route = self.routes.get(method)?;
        let method = method.to_owned();

        Some(ReadHandler::new(move |body, context| async move {
            self.invocations
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Invocation {
                    method,
                    body,
                    context,
                });
            match route {
                Route::Succeed => Ok(()),
                Route::Fail(message) => Err(Box::new(HandlerFailure(message.clone())) as BoxError),
            }
        }))
    }

    fn log(&self, message: &str, severity: Severity) {
        self.logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                message: message.to_owned(),
                severity,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::InboundMessage;

    fn context() -> DispatchContext {
        DispatchContext::from(&InboundMessage::new("orders", "order.created", ""))
    }

    #[tokio::test]
    async fn test_records_invocations() {
        let recorder = RecordingInterpreter::new().handling("order.created");
        let clone = recorder.clone();

        let handler = clone.handler("readOrderCreated").unwrap();
        handler.invoke(Body::Raw("x".into()), context()).await.unwrap();

        let calls = recorder.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "readOrderCreated");
        assert_eq!(calls[0].body, Body::Raw("x".into()));
    }

    #[tokio::test]
    async fn test_failing_route() {
        let recorder = RecordingInterpreter::new().failing("order.created", "nope");

        let err = recorder
            .handler("readOrderCreated")
            .unwrap()
            .invoke(Body::Raw(Vec::new()), context())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "nope");
        assert_eq!(recorder.invocations().len(), 1);
    }

    #[test]
    fn test_records_logs_and_clears() {
        let recorder = RecordingInterpreter::new();
        recorder.log("first", Severity::Error);
        recorder.log("second", Severity::Info);

        assert_eq!(
            recorder.logs(),
            [
                LogRecord {
                    message: "first".into(),
                    severity: Severity::Error
                },
                LogRecord {
                    message: "second".into(),
                    severity: Severity::Info
                },
            ]
        );

        recorder.clear();
        assert!(recorder.logs().is_empty());
        assert!(!recorder.handles("readOrderCreated"));
    }
}
