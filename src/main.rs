use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod catalog;
mod config;
mod domain;
mod event_sourcing;
mod messaging;
mod metrics;

use catalog::{AvailabilityChecker, HttpCatalogClient};
use config::Config;
use domain::order::OrderService;
use messaging::{KafkaEventPublisher, ReviewSubscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_service=debug")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Starting order service");

    // === 1. Metrics registry ===
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 2. Catalog client + availability checker ===
    let catalog = Arc::new(HttpCatalogClient::new(&config.pastries_base_url)?);
    let availability = AvailabilityChecker::new(catalog, Arc::clone(&metrics));

    // === 3. Creation stream producer ===
    let publisher = Arc::new(KafkaEventPublisher::new(
        &config.brokers_url,
        &config.orders_created_topic,
    )?);

    // === 4. Order lifecycle service (owns the event log) ===
    let service = Arc::new(OrderService::new(availability, publisher, metrics));

    // === 5. Review stream subscription ===
    // One outstanding connection per process, torn down on shutdown.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let subscriber = ReviewSubscriber::new(
        &config.brokers_url,
        &config.orders_reviewed_topic,
        Arc::clone(&service),
    )?;
    let subscriber_handle = tokio::spawn(subscriber.run(shutdown_rx));

    // === 6. HTTP request surface (blocks until SIGINT) ===
    api::start_http_server(Arc::clone(&service), config.http_port).await?;

    tracing::info!("HTTP server stopped, disconnecting review consumer");
    let _ = shutdown_tx.send(true);
    subscriber_handle.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
