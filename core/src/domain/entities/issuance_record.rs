//! Issuance record persisted per out-of-band authorization request.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// State created once per issuance call and consumed by the external
/// redemption flow.
///
/// The record is keyed by the opaque verification code. Only the one-way
/// hash of the human user code is kept; the plaintext code is delivered
/// out-of-band and never retained server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    /// Identifier of the client the code was issued for.
    pub client_id: String,

    /// Opaque verification code, the record's primary key.
    pub verification_code: String,

    /// One-way digest of the human user code; unique among active records.
    pub user_code_hash: String,

    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,

    /// Record lifetime in seconds; always positive.
    pub lifetime: i64,

    /// Redemption retry budget for the downstream flow; always positive.
    pub allowed_retries: i64,

    /// Transport channel the user code was dispatched through.
    pub transport: String,

    /// Free-text description supplied by the caller.
    pub description: Option<String>,

    /// Return URL supplied by the caller.
    pub return_url: Option<String>,

    /// Scopes requested for the grant.
    pub requested_scopes: Vec<String>,
}

impl IssuanceRecord {
    /// Timestamp at which the record stops being active.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.lifetime)
    }

    /// Whether the record has expired relative to `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }

    /// Whether the record is still active relative to `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired_at(now)
    }
}
