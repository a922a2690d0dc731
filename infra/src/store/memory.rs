//! In-memory code store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use oob_core::domain::entities::IssuanceRecord;
use oob_core::errors::DomainError;
use oob_core::repositories::CodeStore;

/// Map-backed code store for tests and single-process deployments.
///
/// The user-code hash uniqueness check runs under the single write lock,
/// so the optimistic check-then-store race between concurrent issuance
/// calls cannot slip through this backend.
#[derive(Clone, Default)]
pub struct InMemoryCodeStore {
    records: Arc<RwLock<HashMap<String, IssuanceRecord>>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a record by verification code, regardless of expiry.
    pub async fn get(&self, verification_code: &str) -> Option<IssuanceRecord> {
        self.records.read().await.get(verification_code).cloned()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn store(
        &self,
        verification_code: &str,
        record: &IssuanceRecord,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let now = Utc::now();

        if records
            .values()
            .any(|r| r.verification_code == verification_code && r.is_active_at(now))
        {
            return Err(DomainError::Store {
                message: format!("verification code '{verification_code}' is already active"),
            });
        }
        if records
            .values()
            .any(|r| r.user_code_hash == record.user_code_hash && r.is_active_at(now))
        {
            return Err(DomainError::Store {
                message: "user-code hash collides with an active record".to_string(),
            });
        }

        records.insert(verification_code.to_string(), record.clone());
        tracing::debug!(
            client_id = %record.client_id,
            event = "record_stored",
            "issuance record stored"
        );
        Ok(())
    }

    async fn find_by_user_code_hash(
        &self,
        user_code_hash: &str,
        include_expired: bool,
    ) -> Result<Option<IssuanceRecord>, DomainError> {
        let records = self.records.read().await;
        let now = Utc::now();
        Ok(records
            .values()
            .find(|r| {
                r.user_code_hash == user_code_hash && (include_expired || r.is_active_at(now))
            })
            .cloned())
    }
}
