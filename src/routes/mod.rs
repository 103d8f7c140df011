//! API Routes
//!
//! - `/api/analyze/upload` - File upload and analysis
//! - `/api/health` - Health checks

pub mod analyze;
pub mod health;

use axum::Router;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);

    Router::new()
        .merge(analyze::router(state))
        .merge(health::router())
        .layer(cors)
}
