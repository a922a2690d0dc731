//! Pluggable transport dispatch.
//!
//! Transporters form a capability-indexed set: dispatch selects every
//! transporter whose declared capability matches the requested transport
//! name. Delivery runs as spawned background tasks; failures are logged
//! here and never surface through the issuance response.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::value_objects::DeliveryContext;

/// A named delivery channel implementation.
#[async_trait]
pub trait Transporter: Send + Sync {
    /// Whether this transporter handles the given transport name.
    fn supports(&self, transport: &str) -> bool;

    /// Deliver one rendered message. Errors are the transporter's concern
    /// (logging, alerting); the pipeline only records them.
    async fn dispatch(&self, context: &DeliveryContext) -> Result<(), String>;
}

/// Hand the context to every matching transporter, fire-and-forget.
///
/// Returns immediately; delivery happens on spawned tasks with an
/// at-most-once, best-effort contract. A transport name with no matching
/// transporter is logged and dropped; format resolution has already
/// rejected unknown transport classes by this point.
pub fn dispatch_fire_and_forget(transports: &[Arc<dyn Transporter>], context: DeliveryContext) {
    let matching: Vec<Arc<dyn Transporter>> = transports
        .iter()
        .filter(|t| t.supports(&context.transport))
        .cloned()
        .collect();

    if matching.is_empty() {
        tracing::warn!(
            transport = %context.transport,
            event = "transport_unmatched",
            "no transporter registered for requested transport"
        );
        return;
    }

    for transporter in matching {
        let context = context.clone();
        tokio::spawn(async move {
            if let Err(error) = transporter.dispatch(&context).await {
                tracing::error!(
                    transport = %context.transport,
                    error = %error,
                    event = "dispatch_failed",
                    "message dispatch failed"
                );
            }
        });
    }
}
