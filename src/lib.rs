// Dashgen - Automated dashboard generator and insights provider

pub mod config;
pub mod dashboard;
pub mod ingest;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod table;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
