//! # Infrastructure Layer
//!
//! Concrete backends for the oob-auth issuance pipeline:
//! - **Store**: in-memory and Redis implementations of the code store
//! - **Transport**: logging (development) and HTTP webhook transporters,
//!   plus a provider-keyed factory

pub mod store;
pub mod transport;

pub use store::{InMemoryCodeStore, RedisCodeStore};
pub use transport::{create_transporters, LoggingTransporter, TransportConfig, WebhookTransporter};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis store error
    #[error("store error: {0}")]
    Store(#[from] redis::RedisError),

    /// HTTP request error for webhook delivery
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Record (de)serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport delivery error
    #[error("transport error: {0}")]
    Transport(String),
}
