//! Human-presentable user-code generation.
//!
//! Generators are pluggable per code type and resolved through a
//! type-string-indexed registry. Generation itself is stateless per call;
//! the issuance orchestrator owns uniqueness enforcement and respects each
//! generator's declared retry limit.

pub mod generator;
pub mod service;

pub use generator::{
    AlphanumericUserCodeGenerator, NumericUserCodeGenerator, UserCodeGenerator,
};
pub use service::UserCodeService;
