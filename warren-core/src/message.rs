//! Inbound message type.

/// Broker-assigned identifier used for acknowledgment. Opaque to the core.
pub type DeliveryTag = u64;

/// A raw message as handed over by the broker connection.
///
/// Immutable once received: fields are only reachable through accessors.
///
/// # Example
///
/// ```rust
/// use warren_core::InboundMessage;
///
/// let message = InboundMessage::new("orders", "order.created", r#"{"id": 7}"#)
///     .with_reply_to("amq.rabbitmq.reply-to")
///     .with_delivery_tag(42);
///
/// assert_eq!(message.routing_key(), "order.created");
/// assert_eq!(message.reply_to(), Some("amq.rabbitmq.reply-to"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    exchange: String,
    routing_key: String,
    body: Vec<u8>,
    reply_to: Option<String>,
    delivery_tag: DeliveryTag,
}

impl InboundMessage {
    /// Create a message with no reply-to address and a zero delivery tag.
    pub fn new(
        exchange: impl Into<String>,
        routing_key: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            routing_key: routing_key.into(),
            body: body.into(),
            reply_to: None,
            delivery_tag: 0,
        }
    }

    /// Set the reply-to address.
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Set the delivery tag.
    pub fn with_delivery_tag(mut self, delivery_tag: DeliveryTag) -> Self {
        self.delivery_tag = delivery_tag;
        self
    }

    /// The exchange the message was published to.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// The routing key the message was published with.
    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }

    /// The raw payload.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The reply-to address, if the publisher declared one.
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    /// The delivery tag.
    pub fn delivery_tag(&self) -> DeliveryTag {
        self.delivery_tag
    }
}
