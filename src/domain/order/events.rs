use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::Order;

// ============================================================================
// Order Events - Full-Snapshot Events for the Order Aggregate
// ============================================================================
//
// Every event carries a complete Order snapshot, not a diff. The current
// state of an order is always the order embedded in the last event of its
// log - nothing needs to be replayed or merged to read it.
//
// ============================================================================

/// Why an event was appended to an order's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeReason {
    Creation,
    Review,
}

/// An order lifecycle event.
///
/// The first event for a given order id always has `change_reason = Creation`
/// on the local creation path. Timestamps are wall-clock at append time,
/// epoch-millis on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order: Order,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub change_reason: ChangeReason,
}

impl OrderEvent {
    pub fn new(order: Order, change_reason: ChangeReason) -> Self {
        Self {
            order,
            timestamp: Utc::now(),
            change_reason,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order.id
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderLine, OrderStatus};

    fn sample_order() -> Order {
        Order {
            id: "order-1".to_string(),
            customer_id: "c1".to_string(),
            lines: vec![OrderLine {
                item_name: "Eclair Cafe".to_string(),
                quantity: 1,
            }],
            total_price: 2.7,
            status: OrderStatus::Created,
        }
    }

    #[test]
    fn test_event_timestamp_is_epoch_millis_on_the_wire() {
        let event = OrderEvent::new(sample_order(), ChangeReason::Creation);

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["timestamp"].is_i64());
        assert_eq!(json["changeReason"], "Creation");
        assert_eq!(json["order"]["id"], "order-1");
    }

    #[test]
    fn test_event_round_trip() {
        let event = OrderEvent::new(sample_order(), ChangeReason::Review);

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: OrderEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.change_reason, ChangeReason::Review);
        assert_eq!(deserialized.order, event.order);
        // Sub-millisecond precision is dropped by the wire format.
        assert_eq!(
            deserialized.timestamp.timestamp_millis(),
            event.timestamp.timestamp_millis()
        );
    }

    #[test]
    fn test_review_event_deserializes_from_broker_payload() {
        let payload = r#"{
            "order": {
                "id": "123-456-789",
                "customerId": "lbroudoux",
                "lines": [
                    {"itemName": "Croissant", "quantity": 1},
                    {"itemName": "Pain Chocolat", "quantity": 1}
                ],
                "totalPrice": 4.2,
                "status": "VALIDATED"
            },
            "timestamp": 1706087114133,
            "changeReason": "Review"
        }"#;

        let event: OrderEvent = serde_json::from_str(payload).unwrap();
        assert_eq!(event.order_id(), "123-456-789");
        assert_eq!(event.order.status, OrderStatus::Validated);
        assert_eq!(event.change_reason, ChangeReason::Review);
        assert_eq!(event.order.lines.len(), 2);
    }
}
