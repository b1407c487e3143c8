use std::sync::Arc;

use uuid::Uuid;

use crate::catalog::AvailabilityChecker;
use crate::event_sourcing::OrderEventLog;
use crate::messaging::EventPublisher;
use crate::metrics::Metrics;

use super::errors::OrderError;
use super::events::{ChangeReason, OrderEvent};
use super::value_objects::{Order, OrderLine, OrderStatus};

// ============================================================================
// Order Lifecycle Service
// ============================================================================
//
// The only component with business rules. Orchestrates the two paths that
// converge on the event log:
//
//   create:        validate -> append -> publish (in that order)
//   ingest_review: append only
//
// The event log is owned here; no other component appends to or reads it
// directly. The append strictly precedes the publish so that a local read
// immediately after create always sees the order, even if publishing is
// slow or fails.
//
// State machine per order id: CREATED -> VALIDATED | REJECTED (terminal).
// The transition is driven entirely by the incoming review event's
// embedded status - the service trusts the event payload.
//
// ============================================================================

pub struct OrderService {
    event_log: OrderEventLog,
    availability: AvailabilityChecker,
    publisher: Arc<dyn EventPublisher>,
    metrics: Arc<Metrics>,
}

impl OrderService {
    pub fn new(
        availability: AvailabilityChecker,
        publisher: Arc<dyn EventPublisher>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            event_log: OrderEventLog::new(),
            availability,
            publisher,
            metrics,
        }
    }

    /// Create an order after checking every line against the catalog.
    ///
    /// Fails with `OrderError::UnavailableItem` naming the first line (in
    /// request order) whose catalog status is "unavailable". On success the
    /// creation event is appended locally, then announced on the created
    /// stream as a fire-and-forget task.
    pub async fn create(
        &self,
        customer_id: String,
        lines: Vec<OrderLine>,
        total_price: f64,
    ) -> Result<Order, OrderError> {
        if let Err(e) = self.availability.check_availability(&lines).await {
            if let OrderError::UnavailableItem { item_name } = &e {
                self.metrics
                    .orders_rejected
                    .with_label_values(&[item_name])
                    .inc();
            }
            return Err(e);
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer_id,
            lines,
            total_price,
            status: OrderStatus::Created,
        };

        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            line_count = order.lines.len(),
            "Creating order"
        );

        let event = OrderEvent::new(order.clone(), ChangeReason::Creation);
        self.event_log.append(event.clone()).await;
        self.metrics.orders_created.inc();

        // Announce after the local append has committed. Failures are
        // logged, never surfaced to the creation caller.
        let publisher = Arc::clone(&self.publisher);
        let metrics = Arc::clone(&self.metrics);
        tokio::spawn(async move {
            if let Err(e) = publisher.publish(&event).await {
                metrics.publish_failures.inc();
                tracing::error!(
                    order_id = %event.order_id(),
                    error = %e,
                    "Failed to publish creation event"
                );
            }
        });

        Ok(order)
    }

    /// Current projection for an order id. Pure read, no side effects.
    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        self.event_log
            .current(id)
            .await
            .ok_or_else(|| OrderError::OrderNotFound { id: id.to_string() })
    }

    /// Append a review event verbatim, creating the log for its order id
    /// if none exists yet (a review may race ahead of any local knowledge
    /// of the order, e.g. after a restart). The embedded status is taken
    /// as authoritative.
    pub async fn ingest_review(&self, event: OrderEvent) {
        let status_label = match event.order.status {
            OrderStatus::Created => "CREATED",
            OrderStatus::Validated => "VALIDATED",
            OrderStatus::Rejected => "REJECTED",
        };

        if !self.event_log.contains(event.order_id()).await {
            tracing::warn!(
                order_id = %event.order_id(),
                "Review for an unknown order id, creating its log"
            );
        }

        self.event_log.append(event).await;
        self.metrics
            .reviews_ingested
            .with_label_values(&[status_label])
            .inc();
    }

    /// Event history for an order id, in append order.
    pub async fn get_order_events(&self, id: &str) -> Result<Vec<OrderEvent>, OrderError> {
        self.event_log
            .history(id)
            .await
            .ok_or_else(|| OrderError::OrderNotFound { id: id.to_string() })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
