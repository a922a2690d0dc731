//! Repository interfaces for persisted issuance state.

pub mod code_store;

pub use code_store::CodeStore;

#[cfg(test)]
pub use code_store::MockCodeStore;
