//! # Payment Record
//!
//! Normalized payment shape returned to callers after a verified
//! signature. Provider-issued identifiers are opaque strings.

use serde::{Deserialize, Serialize};

/// A payment fetched from the provider, amount converted to major units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Provider-assigned payment ID
    pub id: String,

    /// Amount in major currency units
    pub amount: f64,

    /// ISO currency code
    pub currency: String,

    /// Provider payment status (e.g., "captured", "authorized")
    pub status: String,

    /// Payment method (e.g., "upi", "card", "netbanking")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Payer email, when the provider has it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Payer contact number, when the provider has it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let record = PaymentRecord {
            id: "pay_MkCfHjkhN8Z3oy".to_string(),
            amount: 10.0,
            currency: "INR".to_string(),
            status: "captured".to_string(),
            method: None,
            email: None,
            contact: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "pay_MkCfHjkhN8Z3oy");
        assert_eq!(json["amount"], 10.0);
        assert!(json.get("method").is_none());
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_full_record_serializes() {
        let record = PaymentRecord {
            id: "pay_1".to_string(),
            amount: 499.5,
            currency: "INR".to_string(),
            status: "captured".to_string(),
            method: Some("upi".to_string()),
            email: Some("payer@example.com".to_string()),
            contact: Some("+919999999999".to_string()),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["method"], "upi");
        assert_eq!(json["contact"], "+919999999999");
    }
}
