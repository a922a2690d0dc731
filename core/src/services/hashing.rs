//! One-way hashing of user codes before storage.
//!
//! The hash is the only server-side representation of the human code and
//! the only lookup key for redemption, so the function is injectable:
//! uniqueness and storage logic can be tested without depending on a
//! concrete digest algorithm.

use sha2::{Digest, Sha256};

/// Pure one-way digest of a user code.
pub trait UserCodeHasher: Send + Sync {
    fn hash(&self, user_code: &str) -> String;
}

/// Default hasher: SHA-256, hex-encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256UserCodeHasher;

impl UserCodeHasher for Sha256UserCodeHasher {
    fn hash(&self, user_code: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(user_code.as_bytes());
        hex::encode(hasher.finalize())
    }
}
