//! Message format resolution and rendering.
//!
//! The format for a delivery is resolved through an explicit ordered
//! fallback chain, first match wins:
//! 1. client property `formats:{transport}`;
//! 2. client override of the transport class's default-format property;
//! 3. the system-wide default format for that transport class;
//! 4. unknown transport class → [`DomainError::UnsupportedTransport`].
//!
//! Rendering is a single token substitution of the user-code placeholder;
//! no other templating features exist.

use oob_shared::config::AuthorizationOptions;
use oob_shared::constants::{client_properties, formats, transport_types};

use crate::domain::entities::Client;
use crate::errors::{DomainError, DomainResult};

/// Where in the fallback chain the format was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSource {
    /// Client property `formats:{transport}`.
    ClientTransportOverride,
    /// Client override of the transport class's default-format property.
    ClientDefaultOverride,
    /// System-wide default for the transport class.
    SystemDefault,
}

/// A resolved message format and its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub format: String,
    pub source: FormatSource,
}

/// Resolve the message format for a client and transport.
pub fn resolve_format(
    client: &Client,
    transport: &str,
    options: &AuthorizationOptions,
) -> DomainResult<ResolvedFormat> {
    let override_key = format!("{}{}", client_properties::FORMATS_PREFIX, transport);
    if let Some(format) = client.property(&override_key) {
        return Ok(ResolvedFormat {
            format: format.to_string(),
            source: FormatSource::ClientTransportOverride,
        });
    }

    let (default_property, system_default) = match transport {
        transport_types::SMS => (
            options.user_code_sms_format_property_name.as_str(),
            options.default_user_code_sms_format.as_str(),
        ),
        transport_types::EMAIL => (
            options.user_code_email_format_property_name.as_str(),
            options.default_user_code_email_format.as_str(),
        ),
        _ => {
            return Err(DomainError::UnsupportedTransport {
                transport: transport.to_string(),
                client: client.client_name.clone(),
            })
        }
    };

    if let Some(format) = client.property(default_property) {
        return Ok(ResolvedFormat {
            format: format.to_string(),
            source: FormatSource::ClientDefaultOverride,
        });
    }

    Ok(ResolvedFormat {
        format: system_default.to_string(),
        source: FormatSource::SystemDefault,
    })
}

/// Substitute every occurrence of the user-code placeholder.
pub fn render(format: &str, user_code: &str) -> String {
    format.replace(formats::USER_CODE_FIELD, user_code)
}
