//! Routers de la API
//!
//! Un router por recurso, anidados bajo `/api` en el ensamblado final.

pub mod dimension_routes;
pub mod flight_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Ensambla el router completo de la aplicación.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/flights", flight_routes::create_flight_router())
        .nest("/api/airports", dimension_routes::create_airport_router())
        .nest("/api/airlines", dimension_routes::create_airline_router())
        .nest(
            "/api/aircraft-carriers",
            dimension_routes::create_carrier_router(),
        )
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "flight-synth-api",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
