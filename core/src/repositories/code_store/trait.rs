//! Code store trait defining the interface for issuance record persistence.

use async_trait::async_trait;

use crate::domain::entities::IssuanceRecord;
use crate::errors::DomainError;

/// Persistence contract for issuance records, keyed by verification code.
///
/// The store is the only shared mutable resource of the pipeline and must
/// support concurrent readers and writers. The orchestrator's uniqueness
/// check is optimistic (check-then-store); implementations that can enforce
/// it atomically must reject a `store` call whose user-code hash collides
/// with an active record. Backends without such a primitive carry a
/// residual race between concurrent issuance calls and must document it.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Persist a new issuance record under its verification code.
    ///
    /// # Arguments
    /// * `verification_code` - The record's primary key
    /// * `record` - The record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted
    /// * `Err(DomainError::Store)` - Backend failure, or a user-code hash
    ///   collision with an active record where the backend enforces it
    async fn store(
        &self,
        verification_code: &str,
        record: &IssuanceRecord,
    ) -> Result<(), DomainError>;

    /// Find an issuance record by its user-code hash.
    ///
    /// # Arguments
    /// * `user_code_hash` - One-way digest of a candidate user code
    /// * `include_expired` - Whether expired records count as matches
    ///
    /// # Returns
    /// * `Ok(Some(record))` - A matching record exists
    /// * `Ok(None)` - No match; the candidate hash is free
    /// * `Err(DomainError)` - Backend failure
    async fn find_by_user_code_hash(
        &self,
        user_code_hash: &str,
        include_expired: bool,
    ) -> Result<Option<IssuanceRecord>, DomainError>;
}
