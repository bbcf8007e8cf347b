use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, ChatState};

/// Create the main application router with all API endpoints
pub fn create_router(client: ChatState) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    Router::new()
        // Diagnosis endpoint; a browser hitting the root gets the docs
        .route("/", get(handlers::docs_redirect).post(handlers::diagnose))
        // Documentation page
        .route("/api-docs", get(handlers::api_docs))
        // Health check
        .route("/health", get(handlers::health_check))
        // Add shared state
        .with_state(client)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
