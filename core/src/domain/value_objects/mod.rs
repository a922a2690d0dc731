//! Value objects passed through the issuance pipeline.

pub mod authorization_response;
pub mod delivery_context;
pub mod validated_request;

// Re-export commonly used types
pub use authorization_response::AuthorizationResponse;
pub use delivery_context::DeliveryContext;
pub use validated_request::ValidatedRequest;
