use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::order::{Order, OrderEvent};

// ============================================================================
// Order Event Log - Append-Only Event Store
// ============================================================================
//
// Responsibilities:
// 1. Append events to a per-order-id sequence (append-only, never reordered)
// 2. Derive the current projection: the order embedded in the last event
// 3. Expose event history for inspection
//
// State is held in memory for the process lifetime - nothing survives a
// restart. A sequence is never empty once its id exists, because the only
// way to create one is to append a first event.
//
// Writers only ever append, so a single lock over the map is enough to
// keep per-id append order intact under the multi-threaded runtime. The
// critical sections contain no awaits.
//
// ============================================================================

#[derive(Default)]
pub struct OrderEventLog {
    events: RwLock<HashMap<String, Vec<OrderEvent>>>,
}

impl OrderEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the sequence for its order id, creating the
    /// sequence if this is the first event for that id.
    pub async fn append(&self, event: OrderEvent) {
        let order_id = event.order_id().to_string();

        let mut events = self.events.write().await;
        let sequence = events.entry(order_id.clone()).or_default();
        sequence.push(event);

        tracing::debug!(
            order_id = %order_id,
            event_count = sequence.len(),
            "Appended order event"
        );
    }

    /// Current projection for an order id: the order snapshot embedded in
    /// the last event. Recomputed on every read, never cached.
    pub async fn current(&self, id: &str) -> Option<Order> {
        let events = self.events.read().await;
        events
            .get(id)
            .and_then(|sequence| sequence.last())
            .map(|event| event.order.clone())
    }

    /// Full event history for an order id, in append order.
    pub async fn history(&self, id: &str) -> Option<Vec<OrderEvent>> {
        let events = self.events.read().await;
        events.get(id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        let events = self.events.read().await;
        events.contains_key(id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
