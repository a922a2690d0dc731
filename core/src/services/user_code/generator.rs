//! User-code generator trait and the built-in generators.

use async_trait::async_trait;
use rand::rngs::OsRng;
use rand::RngCore;

use oob_shared::constants::code_types;

/// Ambiguity-reduced charset for alphanumeric codes (no 0/O, 1/I, vowels).
const ALPHANUMERIC_CHARSET: &[u8] = b"BCDFGHJKLMNPQRSTVWXZ23456789";

/// Produces human-presentable codes of one code type.
///
/// `generate` is stateless per call and may collide; the caller enforces
/// uniqueness and may retry at most `retry_limit` times before giving up.
#[async_trait]
pub trait UserCodeGenerator: Send + Sync {
    /// Code type string this generator is registered under.
    fn code_type(&self) -> &str;

    /// Maximum generation attempts the caller may make.
    fn retry_limit(&self) -> u32;

    /// Produce one candidate code.
    async fn generate(&self) -> String;
}

/// Digits-only codes, easy to read over the phone or type from an SMS.
pub struct NumericUserCodeGenerator {
    length: usize,
    retry_limit: u32,
}

impl NumericUserCodeGenerator {
    pub fn new(length: usize, retry_limit: u32) -> Self {
        Self {
            length,
            retry_limit,
        }
    }
}

impl Default for NumericUserCodeGenerator {
    fn default() -> Self {
        Self {
            length: 6,
            retry_limit: 5,
        }
    }
}

#[async_trait]
impl UserCodeGenerator for NumericUserCodeGenerator {
    fn code_type(&self) -> &str {
        code_types::NUMERIC
    }

    fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    async fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| char::from(b'0' + (rng.next_u32() % 10) as u8))
            .collect()
    }
}

/// Alphanumeric codes over an ambiguity-reduced charset, for larger code
/// spaces at the same visual length.
pub struct AlphanumericUserCodeGenerator {
    length: usize,
    retry_limit: u32,
}

impl AlphanumericUserCodeGenerator {
    pub fn new(length: usize, retry_limit: u32) -> Self {
        Self {
            length,
            retry_limit,
        }
    }
}

impl Default for AlphanumericUserCodeGenerator {
    fn default() -> Self {
        Self {
            length: 8,
            retry_limit: 5,
        }
    }
}

#[async_trait]
impl UserCodeGenerator for AlphanumericUserCodeGenerator {
    fn code_type(&self) -> &str {
        code_types::ALPHANUMERIC
    }

    fn retry_limit(&self) -> u32 {
        self.retry_limit
    }

    async fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| {
                let index = (rng.next_u32() as usize) % ALPHANUMERIC_CHARSET.len();
                char::from(ALPHANUMERIC_CHARSET[index])
            })
            .collect()
    }
}
