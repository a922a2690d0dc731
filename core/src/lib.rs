//! # OobAuth Core
//!
//! Core issuance pipeline and domain layer for out-of-band authorization
//! codes. This crate contains domain entities, the code store interface,
//! business services, and error types; concrete storage and delivery
//! backends live in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
