use std::sync::Arc;

use anyhow::{Context, Result};
use futures_util::StreamExt;
use rdkafka::{
    config::ClientConfig,
    consumer::{Consumer, StreamConsumer},
    message::Message,
};
use tokio::sync::watch;

use crate::domain::order::{OrderEvent, OrderService};

// ============================================================================
// Review Subscriber - Reviewed Stream Adapter
// ============================================================================
//
// Long-lived consumer loop over the reviewed topic. Each inbound message is
// deserialized into an OrderEvent and handed to the order service in
// delivery order - no reordering, no batching. A malformed payload is
// logged and skipped; the loop never dies on a bad message.
//
// Shutdown is signalled through a watch channel so an in-flight handler
// finishes before the loop returns and the consumer is dropped.
//
// ============================================================================

pub struct ReviewSubscriber {
    consumer: StreamConsumer,
    service: Arc<OrderService>,
}

impl ReviewSubscriber {
    pub fn new(brokers: &str, topic: &str, service: Arc<OrderService>) -> Result<Self> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", "order-service")
            .set("auto.offset.reset", "latest")
            .set("enable.auto.commit", "true")
            .create()
            .context("Failed to create Kafka consumer")?;

        consumer
            .subscribe(&[topic])
            .with_context(|| format!("Failed to subscribe to {}", topic))?;

        tracing::info!(brokers = %brokers, topic = %topic, "Subscribed to review stream");

        Ok(Self { consumer, service })
    }

    /// Consume until the shutdown signal flips to true.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let stream = self.consumer.stream();
        futures_util::pin_mut!(stream);

        tracing::info!("Review consumer loop started");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tracing::info!("Shutdown signal received, review consumer loop exiting");
                        break;
                    }
                }

                message = stream.next() => {
                    let Some(message) = message else {
                        tracing::warn!("Review message stream ended unexpectedly");
                        break;
                    };

                    match message {
                        Ok(message) => {
                            let payload = message.payload().unwrap_or_default();
                            self.handle_payload(payload).await;
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Error receiving review message");
                        }
                    }
                }
            }
        }
    }

    async fn handle_payload(&self, payload: &[u8]) {
        match parse_review(payload) {
            Ok(event) => {
                tracing::info!(
                    order_id = %event.order_id(),
                    status = ?event.order.status,
                    "Received review event"
                );
                self.service.ingest_review(event).await;
            }
            Err(e) => {
                // Skip, leaving the log untouched for that id.
                self.service.metrics().reviews_malformed.inc();
                tracing::error!(
                    error = %e,
                    payload_len = payload.len(),
                    "Malformed review message, skipping"
                );
            }
        }
    }
}

fn parse_review(payload: &[u8]) -> Result<OrderEvent, serde_json::Error> {
    serde_json::from_slice(payload)
}

// ============================================================================
// Unit Tests
// ============================================================================
