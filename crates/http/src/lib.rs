//! HTTP API server for sensor-gateway.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod views;

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use sensor_gateway_service::ReadingService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use response_types::InsertResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub reading_service: Arc<ReadingService>,
}

impl AppState {
    #[must_use]
    pub fn new(reading_service: Arc<ReadingService>) -> Self {
        Self { reading_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/health", get(health))
        .route("/sensor/{sensor_id}", post(handlers::readings::insert_reading))
        .route("/api/devices", get(handlers::devices::list_device_ids))
        .route("/api/devices/data", get(handlers::devices::latest_per_device))
        .route("/api/devices/{sensor_id}", get(handlers::devices::latest_reading))
        .route("/api/devices/{sensor_id}/history", get(handlers::readings::reading_history))
        .route("/api/dashboard/{selector}", get(handlers::dashboard::dashboard_series))
        .route("/dashboard", get(handlers::pages::dashboard_page))
        .route("/dispositivos", get(handlers::pages::devices_page))
        .route("/vista/{sensor_id}", get(handlers::pages::device_page))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "sensor gateway listening");
    axum::serve(listener, router).await
}

async fn home() -> &'static str {
    "API IoT funcionando"
}

async fn about() -> &'static str {
    "About"
}

async fn health() -> &'static str {
    "ok"
}
