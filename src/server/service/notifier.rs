//! Real-time order events.
//!
//! Mutations publish an `OrderEvent` on a bounded broadcast channel. Every WebSocket
//! connection subscribes with its company id and only sees that company's room,
//! `company_{id}`. Delivery is fire-and-forget: nobody waits for listeners, and a
//! listener that falls behind skips what it missed.

use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::server::error::internal::InternalError;

/// Events buffered per listener before it starts skipping.
pub const EVENT_BUFFER: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEventKind {
    NewOrder,
    OrderStatusUpdated,
    OrderCancelled,
    OrderItemCancelled,
}

impl OrderEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewOrder => "new-order",
            Self::OrderStatusUpdated => "order-status-updated",
            Self::OrderCancelled => "order-cancelled",
            Self::OrderItemCancelled => "order-item-cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderEvent {
    pub company_id: i32,
    pub kind: OrderEventKind,
    pub payload: Value,
}

impl OrderEvent {
    pub fn new<T: Serialize>(
        company_id: i32,
        kind: OrderEventKind,
        payload: &T,
    ) -> Result<Self, InternalError> {
        let payload = serde_json::to_value(payload).map_err(InternalError::EventPayload)?;

        Ok(Self {
            company_id,
            kind,
            payload,
        })
    }

    /// Wire form sent to sockets: `{ "event": kind, "data": payload }`.
    pub fn to_message(&self) -> String {
        json!({ "event": self.kind.as_str(), "data": self.payload }).to_string()
    }
}

pub fn room(company_id: i32) -> String {
    format!("company_{}", company_id)
}

#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<OrderEvent>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(EVENT_BUFFER)
    }
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event. Having no listeners is not an error.
    pub fn publish(&self, event: OrderEvent) {
        let kind = event.kind.as_str();
        let room = room(event.company_id);

        match self.sender.send(event) {
            Ok(listeners) => tracing::debug!("Published {} to {} ({} listeners)", kind, room, listeners),
            Err(_) => tracing::debug!("Published {} to {} with no listeners", kind, room),
        }
    }

    /// Serializes `payload` and publishes it. A payload that cannot be serialized is
    /// logged and dropped.
    pub fn publish_order<T: Serialize>(&self, company_id: i32, kind: OrderEventKind, payload: &T) {
        match OrderEvent::new(company_id, kind, payload) {
            Ok(event) => self.publish(event),
            Err(e) => tracing::error!("Dropping {} event: {}", kind.as_str(), e),
        }
    }

    /// Joins the room of `company_id`.
    pub fn subscribe(&self, company_id: i32) -> Subscription {
        Subscription {
            company_id,
            receiver: self.sender.subscribe(),
        }
    }
}

/// A listener confined to one company's room.
pub struct Subscription {
    company_id: i32,
    receiver: broadcast::Receiver<OrderEvent>,
}

impl Subscription {
    pub fn room(&self) -> String {
        room(self.company_id)
    }

    /// Waits for the next event of this room.
    ///
    /// Returns `None` once the notifier is gone. Missed events after a lag are skipped.
    pub async fn next(&mut self) -> Option<OrderEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if event.company_id == self.company_id => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Listener in {} lagged, skipped {} events", self.room(), skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
