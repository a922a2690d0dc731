//! Logging transporter for development and tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use oob_core::domain::value_objects::DeliveryContext;
use oob_core::services::transport::Transporter;
use oob_shared::constants::transport_types;
use oob_shared::utils::address::{is_valid_email, is_valid_phone_number, mask_address};

/// Transporter that logs deliveries instead of sending them.
///
/// Addressing data is masked in log output; the full context is retained
/// in memory so tests can assert on what would have been sent.
pub struct LoggingTransporter {
    transport_type: String,
    sent: Arc<Mutex<Vec<DeliveryContext>>>,
}

impl LoggingTransporter {
    pub fn new(transport_type: &str) -> Self {
        Self {
            transport_type: transport_type.to_string(),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Deliveries recorded so far.
    pub fn sent_messages(&self) -> Vec<DeliveryContext> {
        self.sent.lock().unwrap().clone()
    }

    fn addressing_looks_valid(&self, data: &str) -> bool {
        match self.transport_type.as_str() {
            transport_types::SMS => is_valid_phone_number(data),
            transport_types::EMAIL => is_valid_email(data),
            _ => true,
        }
    }
}

#[async_trait]
impl Transporter for LoggingTransporter {
    fn supports(&self, transport: &str) -> bool {
        transport == self.transport_type
    }

    async fn dispatch(&self, context: &DeliveryContext) -> Result<(), String> {
        if !self.addressing_looks_valid(&context.data) {
            tracing::warn!(
                transport = %self.transport_type,
                to = %mask_address(&context.data),
                event = "suspicious_addressing",
                "addressing data does not match the transport's expected shape"
            );
        }

        let message_id = Uuid::new_v4();
        tracing::info!(
            transport = %self.transport_type,
            to = %mask_address(&context.data),
            provider = context.provider.as_deref().unwrap_or("-"),
            message_id = %message_id,
            body = %context.body,
            event = "message_logged",
            "delivery written to log instead of being sent"
        );

        self.sent.lock().unwrap().push(context.clone());
        Ok(())
    }
}
