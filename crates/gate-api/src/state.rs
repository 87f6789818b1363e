//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the payment provider and server configuration.

use gate_core::BoxedPaymentProvider;
use gate_razorpay::RazorpayGateway;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider backing the gateway
    pub provider: BoxedPaymentProvider,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState backed by the Razorpay provider.
    ///
    /// Fails fast when the Razorpay key pair is missing or malformed so
    /// the server never starts with undefined credentials.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = RazorpayGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Razorpay: {}", e))?;

        Ok(Self {
            provider: Arc::new(gateway),
            config,
        })
    }

    /// Create state around an explicit provider (for tests)
    pub fn with_provider(provider: BoxedPaymentProvider) -> Self {
        Self {
            provider,
            config: AppConfig::from_env(),
        }
    }
}
