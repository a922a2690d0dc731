//! Validated issuance request produced by the external request validator.

use crate::domain::entities::Client;

/// Input to the issuance pipeline.
///
/// OAuth-parameter validation happens upstream; the orchestrator only
/// re-checks its own contract (client reference present, inputs within the
/// configured length restrictions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Resolved client reference; issuance fails fast when absent.
    pub client: Option<Client>,

    /// Human-readable description of the grant being requested.
    pub description: Option<String>,

    /// URL the user agent returns to after activation.
    pub return_url: Option<String>,

    /// Scopes requested for the grant.
    pub requested_scopes: Vec<String>,

    /// Requested transport channel name.
    pub transport: String,

    /// Channel-specific addressing data.
    pub transport_data: String,

    /// Originating provider identifier.
    pub provider: Option<String>,
}

impl ValidatedRequest {
    /// Create a minimal request for the given client and transport.
    pub fn new(client: Client, transport: impl Into<String>, transport_data: impl Into<String>) -> Self {
        Self {
            client: Some(client),
            description: None,
            return_url: None,
            requested_scopes: Vec::new(),
            transport: transport.into(),
            transport_data: transport_data.into(),
            provider: None,
        }
    }
}
