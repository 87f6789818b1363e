//! # Payment Provider Trait
//!
//! Seam between the HTTP layer and the payment provider. The gateway is
//! stateless; every method here is a one-shot request/response exchange
//! (or, for signature verification, a pure computation with no I/O).

use crate::error::GatewayResult;
use crate::order::OrderPayload;
use crate::payment::PaymentRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait implemented by payment provider integrations.
///
/// The API layer holds a `BoxedPaymentProvider` and never sees provider
/// credentials; only the public key identifier crosses this boundary.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create an order at the provider.
    ///
    /// On success returns the provider's response body verbatim so the
    /// caller receives exactly what the provider issued.
    async fn create_order(&self, order: &OrderPayload) -> GatewayResult<serde_json::Value>;

    /// Recompute the callback signature for `(order_id, payment_id)` and
    /// compare it to `signature`. Pure; performs no network call. Callers
    /// must treat `false` as terminal and make no upstream request.
    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;

    /// Fetch the authoritative payment record by provider payment ID.
    async fn fetch_payment(&self, payment_id: &str) -> GatewayResult<PaymentRecord>;

    /// The public key identifier, safe to hand to browser clients.
    fn key_id(&self) -> &str;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;
