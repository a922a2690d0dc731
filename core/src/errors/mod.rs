//! Domain-specific error types for the issuance pipeline.
//!
//! All variants propagate to the immediate caller unmodified; the only
//! internal retry is the bounded user-code uniqueness loop, which is not
//! visible externally until exhausted. Delivery failures inside a
//! transporter never surface here.

use thiserror::Error;

/// Errors surfaced by the issuance pipeline.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Caller contract violation: missing client reference or an input
    /// outside the configured length restrictions. Fails fast.
    #[error("invalid argument: {field}")]
    InvalidArgument { field: String },

    /// No unique user code was found within the generator's retry budget.
    /// Nothing has been persisted when this is returned.
    #[error("unable to create a unique user code within {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// The requested transport matches no known message-format class.
    /// The issuance record may already be persisted at this point.
    #[error("cannot find message format '{transport}' for client '{client}'")]
    UnsupportedTransport { transport: String, client: String },

    /// Code store backend failure.
    #[error("code store error: {message}")]
    Store { message: String },

    /// Wiring or collaborator failure that is not the caller's fault.
    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
