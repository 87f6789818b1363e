//! # Request Handlers
//!
//! Axum request handlers for the payment gateway. A single dispatcher
//! routes on the trailing path segment; each action validates its input
//! in full before touching the upstream provider.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use gate_core::{GatewayError, GatewayResult, OrderPayload};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create-order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in major currency units
    #[serde(default)]
    pub amount: Option<f64>,
    /// Currency code (defaults to INR)
    #[serde(default)]
    pub currency: Option<String>,
    /// Receipt identifier (defaults to a timestamp-derived one)
    #[serde(default)]
    pub receipt: Option<String>,
    /// Free-form notes passed through to the provider
    #[serde(default)]
    pub notes: HashMap<String, String>,
}

/// Verify-payment request, field names as Razorpay's checkout emits them
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// The gateway's action vocabulary. Unknown segments stay unrepresented
/// so dispatch handles them in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateOrder,
    VerifyPayment,
    GetKey,
}

impl Action {
    /// Parse the trailing path segment into an action
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "create-order" => Some(Action::CreateOrder),
            "verify-payment" => Some(Action::VerifyPayment),
            "get-key" => Some(Action::GetKey),
            _ => None,
        }
    }
}

fn gateway_error_to_response(err: GatewayError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    // Signature mismatch carries the verified flag alongside the error
    if matches!(err, GatewayError::SignatureMismatch) {
        return (
            status,
            Json(serde_json::json!({ "verified": false, "error": "Invalid signature" })),
        )
            .into_response();
    }

    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &Bytes) -> GatewayResult<T> {
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::Serialization(format!("Failed to parse request body: {}", e)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "razorgate",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Dispatch an inbound request on its trailing path segment.
///
/// `OPTIONS` short-circuits to an empty 200 before any parsing so browser
/// preflight never reaches business logic; unknown actions are a 400.
pub async fn dispatch(
    State(state): State<AppState>,
    Path(action): Path<String>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let result = match Action::from_segment(&action) {
        Some(Action::CreateOrder) => create_order(&state, &body).await,
        Some(Action::VerifyPayment) => verify_payment(&state, &body).await,
        Some(Action::GetKey) => get_key(&state),
        None => Err(GatewayError::InvalidAction),
    };

    result.unwrap_or_else(gateway_error_to_response)
}

/// Fallback for paths the dispatcher does not match (root, nested paths)
pub async fn invalid_action(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    gateway_error_to_response(GatewayError::InvalidAction)
}

/// Validate the amount, build the order payload, and forward it upstream.
/// The provider's order object is returned to the caller verbatim.
async fn create_order(state: &AppState, body: &Bytes) -> GatewayResult<Response> {
    let request: CreateOrderRequest = parse_json(body)?;

    let amount = request
        .amount
        .filter(|a| *a >= 1.0)
        .ok_or_else(|| GatewayError::InvalidRequest("Amount must be at least 1 INR".to_string()))?;

    let mut payload = OrderPayload::new(amount);
    if let Some(currency) = request.currency {
        payload = payload.with_currency(currency);
    }
    if let Some(receipt) = request.receipt {
        payload = payload.with_receipt(receipt);
    }
    if !request.notes.is_empty() {
        payload = payload.with_notes(request.notes);
    }

    info!(
        "Creating order: amount_minor={}, currency={}",
        payload.amount_minor, payload.currency
    );

    let order = state.provider.create_order(&payload).await?;

    Ok(Json(order).into_response())
}

/// Verify the callback signature, then fetch the authoritative payment.
/// A mismatched signature fails closed with no upstream call.
async fn verify_payment(state: &AppState, body: &Bytes) -> GatewayResult<Response> {
    let request: VerifyPaymentRequest = parse_json(body)?;

    let not_blank = |s: String| if s.is_empty() { None } else { Some(s) };
    let (Some(order_id), Some(payment_id), Some(signature)) = (
        request.razorpay_order_id.and_then(not_blank),
        request.razorpay_payment_id.and_then(not_blank),
        request.razorpay_signature.and_then(not_blank),
    ) else {
        return Err(GatewayError::InvalidRequest(
            "Missing required fields".to_string(),
        ));
    };

    if !state
        .provider
        .verify_payment_signature(&order_id, &payment_id, &signature)
    {
        warn!("Signature mismatch for order {}", order_id);
        return Err(GatewayError::SignatureMismatch);
    }

    // Only a verified signature earns an upstream fetch; a fetch failure
    // here must surface, never a bare verified:true.
    let payment = state.provider.fetch_payment(&payment_id).await?;

    info!(
        "Verified payment {}: status={}",
        payment.id, payment.status
    );

    Ok(Json(serde_json::json!({
        "verified": true,
        "payment": payment
    }))
    .into_response())
}

/// Hand out the public key identifier. The secret never appears here.
fn get_key(state: &AppState) -> GatewayResult<Response> {
    Ok(Json(serde_json::json!({ "key_id": state.provider.key_id() })).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::from_segment("create-order"), Some(Action::CreateOrder));
        assert_eq!(Action::from_segment("verify-payment"), Some(Action::VerifyPayment));
        assert_eq!(Action::from_segment("get-key"), Some(Action::GetKey));
        assert_eq!(Action::from_segment("foo"), None);
        assert_eq!(Action::from_segment(""), None);
        assert_eq!(Action::from_segment("CREATE-ORDER"), None);
    }

    #[test]
    fn test_create_order_request_optional_fields() {
        let request: CreateOrderRequest = serde_json::from_str(r#"{"amount": 10}"#).unwrap();
        assert_eq!(request.amount, Some(10.0));
        assert!(request.currency.is_none());
        assert!(request.notes.is_empty());
    }

    #[test]
    fn test_verify_request_tolerates_missing_fields() {
        let request: VerifyPaymentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.razorpay_order_id.is_none());
        assert!(request.razorpay_signature.is_none());
    }

    #[test]
    fn test_signature_mismatch_response_shape() {
        let response = gateway_error_to_response(GatewayError::SignatureMismatch);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response() {
        let err = ErrorResponse::new("Invalid action");
        assert_eq!(err.error, "Invalid action");
    }
}
