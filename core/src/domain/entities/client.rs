//! Client reference data consumed by the issuance pipeline.
//!
//! Client records are owned by an external client store; the pipeline only
//! reads the identifier, the configured user-code type, and the free-form
//! property bag used for per-client overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Client metadata relevant to out-of-band code issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier.
    pub client_id: String,

    /// Human-readable client name, used in error messages.
    pub client_name: String,

    /// User-code type configured for this client; the system default type
    /// is used when absent.
    pub user_code_type: Option<String>,

    /// Free-form property bag carrying per-client overrides.
    pub properties: HashMap<String, String>,
}

impl Client {
    /// Create a client with no properties and the default user-code type.
    pub fn new(client_id: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_name: client_name.into(),
            user_code_type: None,
            properties: HashMap::new(),
        }
    }

    /// Look up a raw property value.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Look up an integer property, falling back to `default` when the
    /// property is absent or not parseable as an integer.
    pub fn int_property_or(&self, name: &str, default: i64) -> i64 {
        self.property(name)
            .and_then(|value| value.parse::<i64>().ok())
            .unwrap_or(default)
    }
}
