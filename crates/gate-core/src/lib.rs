//! # gate-core
//!
//! Core types and traits for the razorgate payment gateway.
//!
//! This crate provides:
//! - `PaymentProvider` trait for implementing payment providers
//! - `OrderPayload` for order-creation requests
//! - `PaymentRecord` for normalized verified payments
//! - `GatewayError` for typed error handling
//! - minor/major unit money conversion
//!
//! ## Example
//!
//! ```rust,ignore
//! use gate_core::{OrderPayload, PaymentProvider};
//!
//! // Build an order payload with defaults (INR, timestamp receipt)
//! let order = OrderPayload::new(499.0).with_receipt("receipt_q1_invoice");
//!
//! // Forward it to the configured provider
//! let created = provider.create_order(&order).await?;
//!
//! // Later, verify the payment callback before trusting it
//! if provider.verify_payment_signature(&order_id, &payment_id, &signature) {
//!     let payment = provider.fetch_payment(&payment_id).await?;
//! }
//! ```

pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod provider;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult};
pub use order::{OrderPayload, DEFAULT_CURRENCY};
pub use payment::PaymentRecord;
pub use provider::{BoxedPaymentProvider, PaymentProvider};
