//! Error handling for the router
//!
//! One crate-wide error enum with a distinct variant per failure kind, so
//! callers can tell a strategy miss from an open breaker from a provider
//! failure without string matching.

use thiserror::Error;

/// Result type alias for the router crate
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the router crate
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// The active strategy found no registered adapter it can use.
    /// Fatal to the call; the router does not catch and retry this.
    #[error("no suitable adapter: {0}")]
    NoSuitableAdapter(String),

    /// The selected adapter's breaker is open and still inside its cooldown
    /// window; the adapter was not invoked.
    #[error("circuit breaker open for {0}")]
    CircuitBreakerOpen(String),

    /// Failure surfaced by an adapter, propagated unchanged
    #[error("adapter error: {0}")]
    Adapter(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    /// True for the breaker-open rejection, which a caller typically handles
    /// by backing off or switching strategy rather than treating as a
    /// provider fault.
    pub fn is_circuit_open(&self) -> bool {
        matches!(self, GatewayError::CircuitBreakerOpen(_))
    }
}
