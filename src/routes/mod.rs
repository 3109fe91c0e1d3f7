pub mod dispatch_routes;
pub mod estimate_routes;
pub mod profile_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest("/api/views/estimates", estimate_routes::create_estimate_router())
        .nest("/api/views/dispatch", dispatch_routes::create_dispatch_router())
        .nest("/api/views", profile_routes::create_profile_router())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "tour-booking-views",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
