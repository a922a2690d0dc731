//! Mock implementation of CodeStore for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::IssuanceRecord;
use crate::errors::DomainError;

use super::trait_::CodeStore;

/// In-memory mock code store with call accounting for assertions.
pub struct MockCodeStore {
    records: Arc<RwLock<HashMap<String, IssuanceRecord>>>,
    store_calls: AtomicUsize,
    should_fail: bool,
}

impl MockCodeStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            store_calls: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Pre-seed an active record occupying `user_code_hash`, so a candidate
    /// hashing to it collides during the uniqueness loop.
    pub async fn seed_hash(&self, user_code_hash: &str) {
        self.seed_hash_with_lifetime(user_code_hash, 300).await;
    }

    /// Pre-seed a record with an explicit lifetime; a negative lifetime
    /// cannot be issued but lets tests fabricate an already-expired record.
    pub async fn seed_hash_with_lifetime(&self, user_code_hash: &str, lifetime: i64) {
        let record = IssuanceRecord {
            client_id: "seeded".to_string(),
            verification_code: format!("seeded-{user_code_hash}"),
            user_code_hash: user_code_hash.to_string(),
            created_at: Utc::now() - Duration::seconds(1),
            lifetime,
            allowed_retries: 3,
            transport: "sms".to_string(),
            description: None,
            return_url: None,
            requested_scopes: Vec::new(),
        };
        self.records
            .write()
            .await
            .insert(record.verification_code.clone(), record);
    }

    /// Number of `store` calls made so far.
    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    /// Fetch a stored record by verification code.
    pub async fn get(&self, verification_code: &str) -> Option<IssuanceRecord> {
        self.records.read().await.get(verification_code).cloned()
    }
}

impl Default for MockCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for MockCodeStore {
    async fn store(
        &self,
        verification_code: &str,
        record: &IssuanceRecord,
    ) -> Result<(), DomainError> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(DomainError::Store {
                message: "mock store failure".to_string(),
            });
        }

        let mut records = self.records.write().await;
        let now = Utc::now();
        if records
            .values()
            .any(|r| r.user_code_hash == record.user_code_hash && r.is_active_at(now))
        {
            return Err(DomainError::Store {
                message: "duplicate user-code hash".to_string(),
            });
        }
        records.insert(verification_code.to_string(), record.clone());
        Ok(())
    }

    async fn find_by_user_code_hash(
        &self,
        user_code_hash: &str,
        include_expired: bool,
    ) -> Result<Option<IssuanceRecord>, DomainError> {
        if self.should_fail {
            return Err(DomainError::Store {
                message: "mock store failure".to_string(),
            });
        }

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
