//! Ephemeral delivery context handed to transporters.

/// Everything a transporter needs to deliver one rendered message.
///
/// Built by the orchestrator per issuance and discarded after dispatch;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryContext {
    /// Requested transport channel name (e.g. "sms", "email").
    pub transport: String,

    /// Channel-specific addressing data (phone number, email address, ...).
    pub data: String,

    /// Originating provider identifier, when the caller supplied one.
    pub provider: Option<String>,

    /// Rendered message body containing the user code.
    pub body: String,
}
