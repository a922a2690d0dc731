//! Authorization response value object returned to the caller.

use serde::{Deserialize, Serialize};

/// Caller-facing result of a successful issuance.
///
/// Field semantics mirror the device-authorization response shape: the
/// opaque code, the two verification URI variants, the expiry, and the
/// polling interval. The response is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    /// Opaque verification code used for polling and redemption.
    pub verification_code: String,

    /// URI where the user enters the human code.
    pub verification_uri: String,

    /// Verification URI with the code pre-filled as a query parameter.
    pub verification_uri_complete: String,

    /// Record lifetime in seconds.
    pub expires_in: i64,

    /// Recommended polling interval in seconds.
    pub interval: i64,
}
