// ============================================================================
// Catalog Module - External Pastry Catalog Collaborator
// ============================================================================
//
// Structure:
// - client.rs       - CatalogClient capability trait + reqwest HTTP adapter
// - availability.rs - concurrent fan-out availability check over order lines
//
// The domain layer depends only on the CatalogClient trait; the concrete
// HTTP adapter is injected at composition time in main.rs.
//
// ============================================================================

mod availability;
mod client;

pub use availability::AvailabilityChecker;
pub use client::{CatalogClient, HttpCatalogClient, Pastry, PastryStatus};
