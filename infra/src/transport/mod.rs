//! Transporter implementations and the provider-keyed factory.
//!
//! Two providers are built in:
//! - **logging**: writes deliveries to the log, for development and tests
//! - **webhook**: POSTs deliveries to an HTTP gateway, for real SMS/email
//!   providers fronted by a webhook

use std::sync::Arc;

use oob_core::services::transport::Transporter;

pub mod logging;
pub mod webhook;


pub use logging::LoggingTransporter;
pub use webhook::{WebhookConfig, WebhookTransporter};

use crate::InfrastructureError;

/// Per-transport provider selection.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Transport channel name this transporter serves (e.g. "sms").
    pub transport: String,
    /// Provider backing the channel: "logging" or "webhook".
    pub provider: String,
    /// Gateway endpoint, required for the webhook provider.
    pub endpoint: Option<String>,
}

/// Build transporters for every configured channel.
///
/// # Returns
///
/// * `Ok(transporters)` - One transporter per configuration entry
/// * `Err(InfrastructureError::Config)` - Unknown provider or missing
///   webhook endpoint
pub fn create_transporters(
    configs: &[TransportConfig],
) -> Result<Vec<Arc<dyn Transporter>>, InfrastructureError> {
    let mut transporters: Vec<Arc<dyn Transporter>> = Vec::with_capacity(configs.len());
    for config in configs {
        match config.provider.as_str() {
            "logging" => {
                transporters.push(Arc::new(LoggingTransporter::new(&config.transport)));
            }
            "webhook" => {
                let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                    InfrastructureError::Config(format!(
                        "webhook transporter for '{}' requires an endpoint",
                        config.transport
                    ))
                })?;
                transporters.push(Arc::new(WebhookTransporter::new(WebhookConfig {
                    transport: config.transport.clone(),
                    endpoint: endpoint.to_string(),
                    ..WebhookConfig::default()
                })?));
            }
            other => {
                return Err(InfrastructureError::Config(format!(
                    "unknown transport provider '{other}' for '{}'",
                    config.transport
                )));
            }
        }
    }
    Ok(transporters)
}
