//! # Routes
//!
//! Axum router configuration for the payment gateway.
//! Every response, success or failure, passes through the same CORS layer
//! so browser clients can always read the body.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderName},
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - ANY  /create-order   - Create an order at the provider
/// - ANY  /verify-payment - Verify a payment callback signature
/// - ANY  /get-key        - Public key identifier for checkout clients
/// - GET  /health         - Health check
/// - (anything else)      - 400 {"error":"Invalid action"}
pub fn create_router(state: AppState) -> Router {
    // Browser checkout clients call this from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("apikey"),
            HeaderName::from_static("x-client-info"),
        ]);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/{action}", any(handlers::dispatch))
        .fallback(handlers::invalid_action)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
