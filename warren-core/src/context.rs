//! # Dispatch Context
//!
//! The per-message record handed to handlers alongside the decoded body.
//! Created fresh for every message and dropped once the handler returns.

use crate::message::{DeliveryTag, InboundMessage};

/// Read-only delivery metadata passed to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchContext {
    /// The exchange the message came from.
    pub exchange: String,
    /// The routing key the message was published with.
    pub routing_key: String,
    /// Present only when the message declares a reply-to address.
    pub reply_to: Option<String>,
    /// The delivery tag, for the caller's acknowledgment bookkeeping.
    pub delivery_tag: DeliveryTag,
}

impl DispatchContext {
    /// Build the context for a message.
    pub fn from_message(message: &InboundMessage) -> Self {
        Self {
            exchange: message.exchange().to_owned(),
            routing_key: message.routing_key().to_owned(),
            reply_to: message.reply_to().map(str::to_owned),
            delivery_tag: message.delivery_tag(),
        }
    }

    /// The reply-to address, if any.
    pub fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }
}

impl From<&InboundMessage> for DispatchContext {
    fn from(message: &InboundMessage) -> Self {
        Self::from_message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_copies_delivery_fields() {
        let message = InboundMessage::new("billing", "invoice.paid", "{}")
            .with_reply_to("replies")
            .with_delivery_tag(9);

        let ctx = DispatchContext::from(&message);

        assert_eq!(ctx.exchange, "billing");
        assert_eq!(ctx.routing_key, "invoice.paid");
        assert_eq!(ctx.reply_to(), Some("replies"));
        assert_eq!(ctx.delivery_tag, 9);
    }

    #[test]
    fn test_missing_reply_to_stays_absent() {
        let message = InboundMessage::new("billing", "invoice.paid", "{}");
        let ctx = DispatchContext::from_message(&message);

        assert_eq!(ctx.reply_to, None);
    }
}
