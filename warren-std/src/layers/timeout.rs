//! Timeout layer for time-limited dispatch.

use std::time::Duration;
use tokio::time::timeout;
use warren_core::{DispatchError, DispatchOutcome, Dispatcher, InboundMessage};

/// Fails a dispatch with [`DispatchError::Timeout`] when it runs longer than `duration`.
///
/// The inner future is dropped on expiry; whatever the handler had done by
/// then is not rolled back.
pub struct Timeout<D> {
    inner: D,
    duration: Duration,
}

impl<D> Timeout<D> {
    /// Wrap `inner` with a deadline.
    pub fn new(inner: D, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// The configured deadline.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<D: Dispatcher> Dispatcher for Timeout<D> {
    async fn dispatch(&self, message: &InboundMessage) -> Result<DispatchOutcome, DispatchError> {
        match timeout(self.duration, self.inner.dispatch(message)).await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::Timeout(self.duration)),
        }
    }
}
