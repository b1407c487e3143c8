use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::order::{OrderError, OrderLine};
use crate::metrics::Metrics;

use super::client::{CatalogClient, PastryStatus};

// ============================================================================
// Availability Checker - Partial-Failure-Tolerant Fan-Out
// ============================================================================
//
// One independent catalog lookup per order line, all in flight at once.
// Every lookup is allowed to settle before any decision is made: a single
// transport failure must not cancel or hide the outcomes of its siblings.
// The policy is "evaluate everything, then decide".
//
// Decision rule, in original line order:
// - a settled lookup whose status is "unavailable" rejects the whole order
//   with that item's name (first match wins)
// - "unknown" or any other status passes
// - a failed lookup is logged and otherwise ignored (fail-open): a missing
//   catalog answer does not, by itself, block order creation
//
// No retries at this layer; retrying is the catalog client's concern.
//
// ============================================================================

pub struct AvailabilityChecker {
    catalog: Arc<dyn CatalogClient>,
    metrics: Arc<Metrics>,
}

impl AvailabilityChecker {
    pub fn new(catalog: Arc<dyn CatalogClient>, metrics: Arc<Metrics>) -> Self {
        Self { catalog, metrics }
    }

    pub async fn check_availability(&self, lines: &[OrderLine]) -> Result<(), OrderError> {
        let lookups = lines
            .iter()
            .map(|line| self.catalog.fetch_pastry(&line.item_name));

        // All lookups settle before any is inspected.
        let results = join_all(lookups).await;

        for (line, result) in lines.iter().zip(results) {
            match result {
                Ok(pastry) => {
                    if pastry.status == PastryStatus::Unavailable {
                        tracing::info!(
                            item = %pastry.name,
                            "Rejecting order: item is not available"
                        );
                        return Err(OrderError::UnavailableItem {
                            item_name: pastry.name,
                        });
                    }
                }
                Err(e) => {
                    self.metrics.catalog_lookup_failures.inc();
                    tracing::warn!(
                        item = %line.item_name,
                        error = %e,
                        "Catalog lookup failed; treating item as available (fail-open)"
                    );
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::client::Pastry;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Test double: a fixed catalog where a missing entry simulates a
    /// transport failure.
    struct FakeCatalog {
        pastries: HashMap<String, PastryStatus>,
    }

    impl FakeCatalog {
        fn new(entries: &[(&str, PastryStatus)]) -> Arc<Self> {
            Arc::new(Self {
                pastries: entries
                    .iter()
                    .map(|(name, status)| (name.to_string(), *status))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl CatalogClient for FakeCatalog {
        async fn fetch_pastry(&self, name: &str) -> Result<Pastry> {
            match self.pastries.get(name) {
                Some(status) => Ok(Pastry {
                    name: name.to_string(),
                    status: *status,
                }),
                None => Err(anyhow!("connection refused")),
            }
        }
    }

    fn lines(names: &[&str]) -> Vec<OrderLine> {
        names
            .iter()
            .map(|name| OrderLine {
                item_name: name.to_string(),
                quantity: 1,
            })
            .collect()
    }

    fn checker(catalog: Arc<FakeCatalog>) -> AvailabilityChecker {
        AvailabilityChecker::new(catalog, Arc::new(Metrics::new().unwrap()))
    }

    #[tokio::test]
    async fn test_all_available_passes() {
        let catalog = FakeCatalog::new(&[
            ("Millefeuille", PastryStatus::Available),
            ("Eclair Cafe", PastryStatus::Available),
        ]);

        let result = checker(catalog)
            .check_availability(&lines(&["Millefeuille", "Eclair Cafe"]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_item_rejects_with_first_match() {
        let catalog = FakeCatalog::new(&[
            ("Millefeuille", PastryStatus::Available),
            ("Eclair Cafe", PastryStatus::Unavailable),
            ("Baba Rhum", PastryStatus::Unavailable),
        ]);

        let result = checker(catalog)
            .check_availability(&lines(&["Millefeuille", "Eclair Cafe", "Baba Rhum"]))
            .await;

        match result {
            Err(OrderError::UnavailableItem { item_name }) => {
                assert_eq!(item_name, "Eclair Cafe");
            }
            other => panic!("Expected UnavailableItem, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_status_is_available_enough() {
        let catalog = FakeCatalog::new(&[("Eclair Chocolat", PastryStatus::Unknown)]);

        let result = checker(catalog)
            .check_availability(&lines(&["Eclair Chocolat"]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_failure_does_not_reject() {
        // "Tarte Fraise" has no catalog entry, so its lookup errors while
        // its two siblings settle normally.
        let catalog = FakeCatalog::new(&[
            ("Millefeuille", PastryStatus::Available),
            ("Eclair Cafe", PastryStatus::Available),
        ]);

        let result = checker(catalog)
            .check_availability(&lines(&["Millefeuille", "Tarte Fraise", "Eclair Cafe"]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_failure_does_not_hide_sibling_rejection() {
        let catalog = FakeCatalog::new(&[("Eclair Cafe", PastryStatus::Unavailable)]);

        let result = checker(catalog)
            .check_availability(&lines(&["Tarte Fraise", "Eclair Cafe"]))
            .await;

        match result {
            Err(OrderError::UnavailableItem { item_name }) => {
                assert_eq!(item_name, "Eclair Cafe");
            }
            other => panic!("Expected UnavailableItem, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_lines_pass() {
        let catalog = FakeCatalog::new(&[]);

        assert!(checker(catalog).check_availability(&[]).await.is_ok());
    }
}
