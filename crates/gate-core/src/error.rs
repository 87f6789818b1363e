//! # Gateway Error Types
//!
//! Typed error handling for the razorgate payment gateway.
//! All gateway operations return `Result<T, GatewayError>`.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request named an action the gateway does not dispatch
    #[error("Invalid action")]
    InvalidAction,

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// Payment callback signature did not match the recomputed value
    #[error("Invalid signature")]
    SignatureMismatch,

    /// Non-2xx response from the payment provider; status is forwarded
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Upstream call exceeded the client timeout
    #[error("Provider request timed out: {0}")]
    Timeout(String),

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns true if this error is retryable by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::Network(_) | GatewayError::Timeout(_) | GatewayError::Provider { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::InvalidAction => 400,
            GatewayError::InvalidRequest(_) => 400,
            GatewayError::SignatureMismatch => 400,
            GatewayError::Provider { status, .. } => *status,
            GatewayError::Timeout(_) => 504,
            GatewayError::Network(_) => 502,
            GatewayError::Serialization(_) => 500,
            GatewayError::Internal(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(GatewayError::Network("connection reset".into()).is_retryable());
        assert!(GatewayError::Timeout("10s elapsed".into()).is_retryable());
        assert!(GatewayError::Provider {
            status: 503,
            message: "service unavailable".into()
        }
        .is_retryable());
        assert!(!GatewayError::InvalidRequest("bad data".into()).is_retryable());
        assert!(!GatewayError::SignatureMismatch.is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GatewayError::InvalidRequest("Amount must be at least 1 INR".into()).status_code(),
            400
        );
        assert_eq!(GatewayError::InvalidAction.status_code(), 400);
        assert_eq!(GatewayError::SignatureMismatch.status_code(), 400);
        assert_eq!(GatewayError::Timeout("elapsed".into()).status_code(), 504);
        assert_eq!(GatewayError::Network("refused".into()).status_code(), 502);
    }

    #[test]
    fn test_provider_status_forwarded() {
        let err = GatewayError::Provider {
            status: 422,
            message: "amount exceeds maximum".into(),
        };
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "amount exceeds maximum");
    }
}
