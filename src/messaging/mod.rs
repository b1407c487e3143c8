// ============================================================================
// Messaging Module - Broker Adapters
// ============================================================================
//
// Thin adapters over the Kafka client:
// - publisher.rs  - emits creation events to the created topic
// - subscriber.rs - delivers review events from the reviewed topic
//
// The order service depends only on the EventPublisher capability trait;
// review delivery calls into the service, never the other way around.
//
// ============================================================================

mod publisher;
mod subscriber;

pub use publisher::{EventPublisher, KafkaEventPublisher};
pub use subscriber::ReviewSubscriber;
