use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use prometheus::{Encoder, TextEncoder};
use serde::Deserialize;

use crate::domain::order::{OrderError, OrderLine, OrderService};

// ============================================================================
// HTTP API - Synchronous Request Surface
// ============================================================================
//
// Thin request layer over the order service:
// - POST /orders      create an order (201, or 422 naming the item)
// - GET  /orders/{id} current projection (200, or 404 naming the id)
// - GET  /health      liveness
// - GET  /metrics     Prometheus text exposition
//
// Only the two domain errors are user-visible; anything else is logged
// and surfaced as a bare 500.
//
// ============================================================================

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub customer_id: String,
    pub lines: Vec<OrderLine>,
    pub total_price: f64,
}

pub async fn start_http_server(service: Arc<OrderService>, port: u16) -> std::io::Result<()> {
    tracing::info!("Starting HTTP server on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .route("/orders", web::post().to(create_order))
            .route("/orders/{id}", web::get().to(get_order))
            .route("/health", web::get().to(health_handler))
            .route("/metrics", web::get().to(metrics_handler))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

async fn create_order(
    service: web::Data<Arc<OrderService>>,
    info: web::Json<OrderInfo>,
) -> impl Responder {
    let info = info.into_inner();

    match service
        .create(info.customer_id, info.lines, info.total_price)
        .await
    {
        Ok(order) => HttpResponse::Created().json(order),
        Err(OrderError::UnavailableItem { item_name }) => {
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "reason": "unavailable",
                "itemName": item_name,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Unexpected error creating order");
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn get_order(
    service: web::Data<Arc<OrderService>>,
    id: web::Path<String>,
) -> impl Responder {
    match service.get_order(&id).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(OrderError::OrderNotFound { id }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "reason": "not_found",
                "id": id,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Unexpected error reading order");
            HttpResponse::InternalServerError().finish()
        }
    }
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "order-service"
    }))
}

async fn metrics_handler(service: web::Data<Arc<OrderService>>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = service.metrics().registry().gather();

    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return HttpResponse::InternalServerError().finish();
    }

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

// ============================================================================
// Unit Tests
// ============================================================================
