//! Shared configuration, constants, and utilities for the oob-auth services
//!
//! This crate provides common functionality used across the workspace:
//! - Authorization options and their startup validation
//! - Protocol constants (client property names, transport names, formats)
//! - Utility functions (addressing validation, masking, URI helpers)

pub mod config;
pub mod constants;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthorizationOptions, ConfigError, InputLengthRestrictions};
pub use utils::address::{is_valid_email, is_valid_phone_number, mask_address};
pub use utils::uri::remove_trailing_slash;
