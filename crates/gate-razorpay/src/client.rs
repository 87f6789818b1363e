//! # Razorpay API Client
//!
//! Implementation of the Razorpay Orders and Payments APIs.
//! Authentication is HTTP Basic with the key pair; the gateway makes at
//! most one outbound call per operation and never retries.

use crate::config::RazorpayConfig;
use crate::signature;
use async_trait::async_trait;
use gate_core::{
    money, GatewayError, GatewayResult, OrderPayload, PaymentProvider, PaymentRecord,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Upstream call timeout. A timeout maps to 504, not an open-ended hang.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Razorpay payment provider
pub struct RazorpayGateway {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayGateway {
    /// Create a new Razorpay gateway
    pub fn new(config: RazorpayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Ok(Self::new(config))
    }

    fn classify_transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(e.to_string())
        } else {
            GatewayError::Network(e.to_string())
        }
    }

    /// Map a non-2xx upstream body to a Provider error, preferring
    /// Razorpay's `error.description` field over the raw body.
    fn provider_error(status: u16, body: &str) -> GatewayError {
        let message = serde_json::from_str::<RazorpayErrorResponse>(body)
            .ok()
            .map(|e| e.error.description)
            .unwrap_or_else(|| format!("Razorpay request failed with HTTP {}", status));

        GatewayError::Provider { status, message }
    }
}

#[async_trait]
impl PaymentProvider for RazorpayGateway {
    #[instrument(skip(self, order), fields(receipt = %order.receipt, amount_minor = order.amount_minor))]
    async fn create_order(&self, order: &OrderPayload) -> GatewayResult<serde_json::Value> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        let payload = RazorpayOrderRequest {
            amount: order.amount_minor,
            currency: &order.currency,
            receipt: &order.receipt,
            notes: &order.notes,
        };

        debug!("Creating Razorpay order: currency={}", order.currency);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&payload)
            .send()
            .await
            .map_err(Self::classify_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(Self::classify_transport_error)?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);
            return Err(Self::provider_error(status.as_u16(), &body));
        }

        // Pass the provider's order object through verbatim
        let order_body: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!(
            "Created Razorpay order: id={}",
            order_body.get("id").and_then(|v| v.as_str()).unwrap_or("?")
        );

        Ok(order_body)
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, supplied: &str) -> bool {
        signature::verify_signature(&self.config.key_secret, order_id, payment_id, supplied)
    }

    #[instrument(skip(self))]
    async fn fetch_payment(&self, payment_id: &str) -> GatewayResult<PaymentRecord> {
        let url = format!("{}/v1/payments/{}", self.config.api_base_url, payment_id);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .send()
            .await
            .map_err(Self::classify_transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(Self::classify_transport_error)?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);
            return Err(Self::provider_error(status.as_u16(), &body));
        }

        let payment: RazorpayPaymentResponse = serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse Razorpay payment: {}", e))
        })?;

        debug!("Fetched Razorpay payment: status={}", payment.status);

        Ok(PaymentRecord {
            id: payment.id,
            amount: money::to_major_units(payment.amount),
            currency: payment.currency,
            status: payment.status,
            method: payment.method,
            email: payment.email,
            contact: payment.contact,
        })
    }

    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct RazorpayOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    notes: &'a std::collections::HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RazorpayPaymentResponse {
    id: String,
    amount: i64,
    currency: String,
    status: String,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    contact: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    description: String,
    #[serde(default)]
    code: Option<String>,
}
