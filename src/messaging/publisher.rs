use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
};

use crate::domain::order::OrderEvent;

// ============================================================================
// Event Publisher - Creation Stream Adapter
// ============================================================================

/// Capability trait for announcing creation events. The order service
/// spawns publishes fire-and-forget; a publish failure never fails the
/// creation that triggered it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &OrderEvent) -> Result<()>;
}

pub struct KafkaEventPublisher {
    producer: FutureProducer,
    topic: String,
}

impl KafkaEventPublisher {
    pub fn new(brokers: &str, topic: &str) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()
            .context("Failed to create Kafka producer")?;

        tracing::info!(brokers = %brokers, topic = %topic, "Kafka producer created");

        Ok(Self {
            producer,
            topic: topic.to_string(),
        })
    }
}

#[async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, event: &OrderEvent) -> Result<()> {
        let key = event.order_id().to_string();
        let payload = serde_json::to_string(event).context("Failed to serialize order event")?;

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

        self.producer
            .send(record, rdkafka::util::Timeout::After(Duration::from_secs(5)))
            .await
            .map_err(|(e, _)| anyhow::anyhow!("Kafka send error: {}", e))?;

        tracing::info!(
            topic = %self.topic,
            order_id = %key,
            "Published creation event"
        );

        Ok(())
    }
}
