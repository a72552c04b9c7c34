//! Router configuration for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/calculate", post(handlers::calculate_shot))
        // Rifle registry
        .route("/rifles", get(handlers::list_rifles).post(handlers::create_rifle))
        .route("/rifles/{rifle_id}", get(handlers::get_rifle))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rifles::{LocalRifleRepository, RifleRepository};
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRifleRepository::new()) as Arc<dyn RifleRepository>;
        let _router = create_router(AppState::new(repo));
    }
}
