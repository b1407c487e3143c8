use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides counters for:
// - Order creation outcomes (created / rejected, by offending item)
// - Review events ingested from the broker (by resulting status)
// - Broker publish failures (fire-and-forget path)
// - Catalog lookup transport failures (fail-open path)
//
// All metrics are registered with one Registry and scraped via /metrics
// on the HTTP app.
//
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    // Creation path
    pub orders_created: IntCounter,
    pub orders_rejected: IntCounterVec,

    // Review path
    pub reviews_ingested: IntCounterVec,
    pub reviews_malformed: IntCounter,

    // Adapter failures
    pub publish_failures: IntCounter,
    pub catalog_lookup_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new(
            "orders_created_total",
            "Total orders successfully created",
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new(
                "orders_rejected_total",
                "Total order creations rejected for an unavailable item",
            ),
            &["item"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let reviews_ingested = IntCounterVec::new(
            Opts::new(
                "reviews_ingested_total",
                "Total review events appended to the event log",
            ),
            &["status"],
        )?;
        registry.register(Box::new(reviews_ingested.clone()))?;

        let reviews_malformed = IntCounter::new(
            "reviews_malformed_total",
            "Total review messages skipped because they failed to deserialize",
        )?;
        registry.register(Box::new(reviews_malformed.clone()))?;

        let publish_failures = IntCounter::new(
            "publish_failures_total",
            "Total creation events that failed to publish to the broker",
        )?;
        registry.register(Box::new(publish_failures.clone()))?;

        let catalog_lookup_failures = IntCounter::new(
            "catalog_lookup_failures_total",
            "Total catalog lookups that failed at the transport level",
        )?;
        registry.register(Box::new(catalog_lookup_failures.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_rejected,
            reviews_ingested,
            reviews_malformed,
            publish_failures,
            catalog_lookup_failures,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_register_without_collision() {
        let metrics = Metrics::new().unwrap();
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_counters_increment() {
        let metrics = Metrics::new().unwrap();

        metrics.orders_created.inc();
        metrics.orders_created.inc();
        assert_eq!(metrics.orders_created.get(), 2);

        metrics
            .orders_rejected
            .with_label_values(&["Eclair Cafe"])
            .inc();
        assert_eq!(
            metrics
                .orders_rejected
                .with_label_values(&["Eclair Cafe"])
                .get(),
            1
        );
    }
}
