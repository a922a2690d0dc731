//! Opaque verification-code (handle) generation.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::DomainResult;

/// Produces the high-entropy opaque handle identifying an issuance record.
#[async_trait]
pub trait HandleGenerationService: Send + Sync {
    async fn generate(&self) -> DomainResult<String>;
}

/// Default handle generator: OS CSPRNG bytes, URL-safe base64 without
/// padding so the handle can ride in a query parameter unescaped.
pub struct DefaultHandleGenerationService {
    byte_length: usize,
}

impl DefaultHandleGenerationService {
    pub fn new(byte_length: usize) -> Self {
        Self { byte_length }
    }
}

impl Default for DefaultHandleGenerationService {
    fn default() -> Self {
        Self { byte_length: 32 }
    }
}

#[async_trait]
impl HandleGenerationService for DefaultHandleGenerationService {
    async fn generate(&self) -> DomainResult<String> {
        let mut bytes = vec![0u8; self.byte_length];
        OsRng.fill_bytes(&mut bytes);
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handles_are_url_safe() {
        let service = DefaultHandleGenerationService::default();
        let handle = service.generate().await.unwrap();
        assert!(handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[tokio::test]
    async fn handles_carry_requested_entropy() {
        let service = DefaultHandleGenerationService::new(32);
        let handle = service.generate().await.unwrap();
        // 32 bytes encode to 43 base64url characters without padding.
        assert_eq!(handle.len(), 43);
    }

    #[tokio::test]
    async fn handles_do_not_repeat() {
        let service = DefaultHandleGenerationService::default();
        let first = service.generate().await.unwrap();
        let second = service.generate().await.unwrap();
        assert_ne!(first, second);
    }
}
