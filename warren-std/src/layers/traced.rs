//! Tracing layer.

use tracing::{Instrument, debug, error, info_span, warn};
use warren_core::{DispatchError, DispatchOutcome, Dispatcher, InboundMessage};

/// Runs every dispatch inside a `dispatch` span and logs how it ended.
pub struct Traced<D> {
    inner: D,
    consumer: &'static str,
}

impl<D> Traced<D> {
    /// Wrap `inner`, tagging its span with the consumer name.
    pub fn new(inner: D, consumer: &'static str) -> Self {
        Self { inner, consumer }
    }

    /// The wrapped dispatcher.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Dispatcher> Dispatcher for Traced<D> {
    async fn dispatch(&self, message: &InboundMessage) -> Result<DispatchOutcome, DispatchError> {
        let span = info_span!(
            "dispatch",
            consumer = self.consumer,
            exchange = message.exchange(),
            routing_key = message.routing_key(),
            delivery_tag = message.delivery_tag(),
        );

        async move {
            let result = self.inner.dispatch(message).await;
            match &result {
                Ok(DispatchOutcome::Invoked { method }) => debug!(%method, "handled"),
                Ok(DispatchOutcome::Logged { method }) => warn!(%method, "no handler"),
                Err(err) => error!(error = %err, "dispatch failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::ConfigError;

    struct Fixed(Result<DispatchOutcome, ConfigError>);

    impl Dispatcher for Fixed {
        async fn dispatch(
            &self,
            _message: &InboundMessage,
        ) -> Result<DispatchOutcome, DispatchError> {
            self.0.clone().map_err(DispatchError::from)
        }
    }

    #[tokio::test]
    async fn test_passes_results_through() {
        let message = InboundMessage::new("orders", "order.created", "{}");

        let ok = Traced::new(
            Fixed(Ok(DispatchOutcome::Logged {
                method: "readOrderCreated".into(),
            })),
            "test",
        );
        assert_eq!(ok.dispatch(&message).await.unwrap().method(), "readOrderCreated");

        let failing = Traced::new(
            Fixed(Err(ConfigError::UnknownInterpreter("Ghost".into()))),
            "test",
        );
        assert!(failing.dispatch(&message).await.unwrap_err().is_config());
    }
}
