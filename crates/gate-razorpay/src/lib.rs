//! # gate-razorpay
//!
//! Razorpay payment provider for razorgate-rs.
//!
//! This crate implements the `PaymentProvider` trait against Razorpay's
//! REST API:
//!
//! - **Order creation** — `POST /v1/orders` with HTTP Basic auth built
//!   from the key pair; the provider's order object is returned verbatim.
//! - **Payment signature verification** — recomputes
//!   `HMAC-SHA256(key_secret, "<order_id>|<payment_id>")` and compares in
//!   constant time. No network call is made for a mismatched signature.
//! - **Payment fetch** — `GET /v1/payments/{id}`, normalized into a
//!   `PaymentRecord` with the amount converted back to major units.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gate_razorpay::RazorpayGateway;
//! use gate_core::{OrderPayload, PaymentProvider};
//!
//! // Reads RAZORPAY_KEY_ID / RAZORPAY_KEY_SECRET, fails fast if absent
//! let gateway = RazorpayGateway::from_env()?;
//!
//! let order = gateway.create_order(&OrderPayload::new(499.0)).await?;
//! ```

pub mod client;
pub mod config;
pub mod signature;

// Re-exports
pub use client::RazorpayGateway;
pub use config::RazorpayConfig;
pub use signature::{compute_signature, verify_signature};
