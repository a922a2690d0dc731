//! Configuration types for the issuance pipeline.
//!
//! Loading configuration from files or the environment is the embedding
//! application's job; this module only defines the option types and their
//! eager startup validation.

pub mod options;

pub use options::{AuthorizationOptions, ConfigError, InputLengthRestrictions};
