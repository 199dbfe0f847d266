//! Rutas HTTP
//!
//! `create_app` monta el router completo con su estado, así `main` y los
//! tests de integración sirven exactamente las mismas rutas.

pub mod car_routes;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors_middleware;
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(state.config.cors_origins.as_deref());

    Router::new()
        .route("/health", get(health_check))
        .nest("/cars", car_routes::create_car_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check simple
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "store": state.cars.backend(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
