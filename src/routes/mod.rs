pub mod apod_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

/// Crear el router principal de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(state.config.cors_origins.clone());

    Router::new()
        .route("/health", get(health_check))
        .route("/api/apod/", get(apod_routes::get_apod_by_date))
        .nest("/api/apod", apod_routes::create_apod_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "apod-proxy",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
