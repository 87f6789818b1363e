//! # gate-api
//!
//! HTTP API layer for razorgate-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Action dispatch on the trailing path segment
//! - CORS for browser checkout clients
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-order` | Create a provider order |
//! | POST | `/verify-payment` | Verify a payment callback signature |
//! | ANY | `/get-key` | Public key identifier |
//! | OPTIONS | any path | Empty 200 for CORS preflight |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
