use std::env;

// ============================================================================
// Process Configuration
// ============================================================================
//
// Everything is environment-driven with defaults matching a local
// docker-compose deployment (Kafka on 9092, Microcks pastry mock on 8282).
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct Config {
    pub brokers_url: String,
    pub orders_created_topic: String,
    pub orders_reviewed_topic: String,
    pub pastries_base_url: String,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            brokers_url: env_or("BROKERS_URL", "localhost:9092"),
            orders_created_topic: env_or("ORDERS_CREATED_TOPIC", "orders-created"),
            orders_reviewed_topic: env_or(
                "ORDERS_REVIEWED_TOPIC",
                "OrderEventsAPI-0.1.0-orders-reviewed",
            ),
            pastries_base_url: env_or(
                "PASTRIES_BASE_URL",
                "http://localhost:8282/rest/API+Pastries/0.0.1",
            ),
            http_port: env_or("HTTP_PORT", "3000").parse().unwrap_or(3000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
