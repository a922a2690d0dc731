//! HTTP webhook transporter.
//!
//! Covers SMS and email providers fronted by an HTTP gateway: the rendered
//! delivery is POSTed as JSON and retried with exponential backoff before
//! the failure is reported to the dispatch layer (which logs it; delivery
//! failures never reach the issuance caller).

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, warn};

use oob_core::domain::value_objects::DeliveryContext;
use oob_core::services::transport::Transporter;
use oob_shared::utils::address::mask_address;

use crate::InfrastructureError;

/// Webhook transporter configuration.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Transport channel name this transporter serves.
    pub transport: String,
    /// Gateway endpoint receiving the delivery payload.
    pub endpoint: String,
    /// Maximum send attempts per delivery.
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubles per attempt).
    pub retry_delay_ms: u64,
    /// Timeout for each request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            transport: String::new(),
            endpoint: String::new(),
            max_retries: 3,
            retry_delay_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Serialize)]
struct DeliveryPayload<'a> {
    transport: &'a str,
    to: &'a str,
    provider: Option<&'a str>,
    body: &'a str,
}

/// Transporter POSTing deliveries to an HTTP gateway.
pub struct WebhookTransporter {
    client: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookTransporter {
    pub fn new(config: WebhookConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    async fn post_once(&self, context: &DeliveryContext) -> Result<(), String> {
        let payload = DeliveryPayload {
            transport: &context.transport,
            to: &context.data,
            provider: context.provider.as_deref(),
            body: &context.body,
        };
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("gateway returned {}", response.status()))
        }
    }
}

#[async_trait]
impl Transporter for WebhookTransporter {
    fn supports(&self, transport: &str) -> bool {
        transport == self.config.transport
    }

    async fn dispatch(&self, context: &DeliveryContext) -> Result<(), String> {
        let mut delay = self.config.retry_delay_ms;
        let mut last_error = String::new();

        for attempt in 1..=self.config.max_retries {
            match self.post_once(context).await {
                Ok(()) => {
                    debug!(
                        transport = %self.config.transport,
                        to = %mask_address(&context.data),
                        attempt,
                        event = "message_sent",
                        "delivery accepted by gateway"
                    );
                    return Ok(());
                }
                Err(error) => {
                    warn!(
                        transport = %self.config.transport,
                        to = %mask_address(&context.data),
                        attempt,
                        error = %error,
                        "gateway delivery attempt failed"
                    );
                    last_error = error;
                    if attempt < self.config.max_retries {
                        sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(format!(
            "delivery failed after {} attempts: {last_error}",
            self.config.max_retries
        ))
    }
}
