//! # Order Payload
//!
//! The order-creation payload forwarded to the payment provider.
//! Built fresh per request and discarded with the response.

use crate::money;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default currency when the caller does not supply one
pub const DEFAULT_CURRENCY: &str = "INR";

/// An order-creation payload, amounts already in minor units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Amount in the provider's minor unit (paise for INR)
    pub amount_minor: i64,

    /// ISO currency code
    pub currency: String,

    /// Merchant receipt identifier
    pub receipt: String,

    /// Free-form notes passed through to the provider
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub notes: HashMap<String, String>,
}

impl OrderPayload {
    /// Create a payload from a major-unit amount with default currency,
    /// a timestamp-derived receipt, and empty notes.
    pub fn new(amount: f64) -> Self {
        Self {
            amount_minor: money::to_minor_units(amount),
            currency: DEFAULT_CURRENCY.to_string(),
            receipt: generate_receipt(),
            notes: HashMap::new(),
        }
    }

    /// Builder: set currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder: set receipt identifier
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = receipt.into();
        self
    }

    /// Builder: set notes map
    pub fn with_notes(mut self, notes: HashMap<String, String>) -> Self {
        self.notes = notes;
        self
    }

    /// The major-unit amount this payload represents
    pub fn amount_major(&self) -> f64 {
        money::to_major_units(self.amount_minor)
    }
}

/// Synthesize a receipt identifier from the current epoch millis
fn generate_receipt() -> String {
    format!("receipt_{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        let payload = OrderPayload::new(10.0);

        assert_eq!(payload.amount_minor, 1000);
        assert_eq!(payload.currency, "INR");
        assert!(payload.receipt.starts_with("receipt_"));
        assert!(payload.notes.is_empty());
    }

    #[test]
    fn test_payload_builder() {
        let mut notes = HashMap::new();
        notes.insert("plan".to_string(), "starter".to_string());

        let payload = OrderPayload::new(499.0)
            .with_currency("USD")
            .with_receipt("receipt_order_42")
            .with_notes(notes);

        assert_eq!(payload.amount_minor, 49900);
        assert_eq!(payload.currency, "USD");
        assert_eq!(payload.receipt, "receipt_order_42");
        assert_eq!(payload.notes.get("plan"), Some(&"starter".to_string()));
    }

    #[test]
    fn test_amount_major_round_trip() {
        let payload = OrderPayload::new(250.75);
        assert_eq!(payload.amount_major(), 250.75);
    }

    #[test]
    fn test_receipt_is_timestamp_derived() {
        let receipt = generate_receipt();
        let millis: i64 = receipt.strip_prefix("receipt_").unwrap().parse().unwrap();
        assert!(millis > 0);
    }
}
