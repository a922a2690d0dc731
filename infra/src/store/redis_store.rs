//! Redis-backed code store.
//!
//! Key layout:
//! - `{prefix}:record:{verification_code}` - the record as JSON
//! - `{prefix}:hash:{user_code_hash}` - reservation mapping the hash to its
//!   verification code
//!
//! Both keys carry a TTL equal to the record lifetime, so expiry is
//! delegated to Redis: expired records simply disappear, and
//! `find_by_user_code_hash(_, include_expired=true)` cannot observe them.
//! The hash reservation is written with `SET NX`, which gives the store a
//! true atomic insert-if-absent-by-hash and closes the optimistic
//! check-then-store race between concurrent issuance calls.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Client;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use oob_core::domain::entities::IssuanceRecord;
use oob_core::errors::DomainError;
use oob_core::repositories::CodeStore;

use crate::InfrastructureError;

/// Connection settings for the Redis code store.
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    /// Redis connection URL.
    pub url: String,
    /// Prefix applied to every key.
    pub key_prefix: String,
    /// Maximum connection attempts at startup.
    pub max_retries: u32,
    /// Base delay between connection attempts (doubles per attempt).
    pub retry_delay_ms: u64,
}

impl Default for RedisStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            key_prefix: "oob".to_string(),
            max_retries: 3,
            retry_delay_ms: 100,
        }
    }
}

/// Production code store backed by Redis.
#[derive(Clone)]
pub struct RedisCodeStore {
    connection: MultiplexedConnection,
    key_prefix: String,
}

impl RedisCodeStore {
    /// Connect to Redis with bounded retry.
    pub async fn new(config: RedisStoreConfig) -> Result<Self, InfrastructureError> {
        info!(key_prefix = %config.key_prefix, "creating Redis code store");

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("invalid Redis URL: {e}"))
        })?;

        let mut attempts = 0;
        let mut delay = config.retry_delay_ms;
        let connection = loop {
            attempts += 1;
            debug!("connecting to Redis (attempt {})", attempts);
            match client.get_multiplexed_async_connection().await {
                Ok(connection) => break connection,
                Err(e) if attempts < config.max_retries => {
                    warn!("Redis connection attempt {} failed: {}", attempts, e);
                    sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                }
                Err(e) => return Err(InfrastructureError::Store(e)),
            }
        };

        info!("Redis code store connected");
        Ok(Self {
            connection,
            key_prefix: config.key_prefix,
        })
    }

    fn record_key(&self, verification_code: &str) -> String {
        format!("{}:record:{}", self.key_prefix, verification_code)
    }

    fn hash_key(&self, user_code_hash: &str) -> String {
        format!("{}:hash:{}", self.key_prefix, user_code_hash)
    }

    fn store_error(error: impl std::fmt::Display) -> DomainError {
        DomainError::Store {
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn store(
        &self,
        verification_code: &str,
        record: &IssuanceRecord,
    ) -> Result<(), DomainError> {
        let json = serde_json::to_string(record).map_err(Self::store_error)?;
        // SET EX requires a positive TTL.
        let ttl = record.lifetime.max(1);
        let mut connection = self.connection.clone();

        // Reserve the user-code hash first. NX makes this the atomic
        // insert-if-absent that the uniqueness loop's optimistic check
        // cannot provide on its own.
        let reserved: Option<String> = redis::cmd("SET")
            .arg(self.hash_key(&record.user_code_hash))
            .arg(verification_code)
            .arg("NX")
            .arg("EX")
            .arg(ttl)
            .query_async(&mut connection)
            .await
            .map_err(Self::store_error)?;
        if reserved.is_none() {
            return Err(DomainError::Store {
                message: "user-code hash is already reserved by an active record".to_string(),
            });
        }

        redis::cmd("SET")
            .arg(self.record_key(verification_code))
            .arg(json)
            .arg("EX")
            .arg(ttl)
            .query_async::<_, ()>(&mut connection)
            .await
            .map_err(Self::store_error)?;

        debug!(
            client_id = %record.client_id,
            event = "record_stored",
            "issuance record stored in Redis"
        );
        Ok(())
    }

    async fn find_by_user_code_hash(
        &self,
        user_code_hash: &str,
        _include_expired: bool,
    ) -> Result<Option<IssuanceRecord>, DomainError> {
        let mut connection = self.connection.clone();

        let verification_code: Option<String> = redis::cmd("GET")
            .arg(self.hash_key(user_code_hash))
            .query_async(&mut connection)
            .await
            .map_err(Self::store_error)?;
        let Some(verification_code) = verification_code else {
            return Ok(None);
        };

        let json: Option<String> = redis::cmd("GET")
            .arg(self.record_key(&verification_code))
            .query_async(&mut connection)
            .await
            .map_err(Self::store_error)?;
        match json {
            Some(json) => {
                let record: IssuanceRecord =
                    serde_json::from_str(&json).map_err(Self::store_error)?;
                Ok(Some(record))
            }
            // Reservation present but record missing: the record write may
            // not have landed yet. There is no record to report; the NX
            // reservation still rejects any store call reusing this hash.
            None => Ok(None),
        }
    }
}
