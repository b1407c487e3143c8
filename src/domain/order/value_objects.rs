use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// A single line of an order. Immutable once created.
///
/// Serialized camelCase to stay compatible with the review stream payloads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Validated,
    Rejected,
}

/// An order snapshot. Never mutated in place: every lifecycle change
/// produces a new Order value embedded in a new event.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
    pub status: OrderStatus,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_line_serialization() {
        let line = OrderLine {
            item_name: "Millefeuille".to_string(),
            quantity: 2,
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"itemName\":\"Millefeuille\""));
        assert!(json.contains("\"quantity\":2"));

        let deserialized: OrderLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, deserialized);
    }

    #[test]
    fn test_order_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Created).unwrap(),
            "\"CREATED\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Validated).unwrap(),
            "\"VALIDATED\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );

        let status: OrderStatus = serde_json::from_str("\"VALIDATED\"").unwrap();
        assert_eq!(status, OrderStatus::Validated);
    }

    #[test]
    fn test_order_serialization_round_trip() {
        let order = Order {
            id: "123-456-789".to_string(),
            customer_id: "lbroudoux".to_string(),
            lines: vec![
                OrderLine {
                    item_name: "Millefeuille".to_string(),
                    quantity: 1,
                },
                OrderLine {
                    item_name: "Eclair Cafe".to_string(),
                    quantity: 1,
                },
            ],
            total_price: 8.4,
            status: OrderStatus::Created,
        };

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"customerId\":\"lbroudoux\""));
        assert!(json.contains("\"totalPrice\":8.4"));
        assert!(json.contains("\"status\":\"CREATED\""));

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
