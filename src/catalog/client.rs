use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog Client - Lookup of a Single Item
// ============================================================================

/// A catalog item as returned by the pastry API.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pastry {
    pub name: String,
    pub status: PastryStatus,
}

/// Availability reported by the catalog. Statuses the catalog introduces
/// later deserialize as Unknown; only an explicit "unavailable" ever
/// rejects an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastryStatus {
    Available,
    Unavailable,
    #[serde(other)]
    Unknown,
}

/// Capability trait for catalog lookups. The availability checker depends
/// only on this, so tests inject in-memory doubles.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_pastry(&self, name: &str) -> Result<Pastry>;
}

// ============================================================================
// HTTP Adapter
// ============================================================================

pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// A request timeout is enforced here so a stalled catalog lookup
    /// cannot stall order creation indefinitely.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_pastry(&self, name: &str) -> Result<Pastry> {
        let url = format!("{}/pastries/{}", self.base_url, name);

        tracing::debug!(pastry = %name, url = %url, "Fetching pastry from catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Catalog request failed for {}", name))?
            .error_for_status()
            .with_context(|| format!("Catalog returned an error status for {}", name))?;

        let pastry = response
            .json::<Pastry>()
            .await
            .with_context(|| format!("Malformed catalog response for {}", name))?;

        Ok(pastry)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
