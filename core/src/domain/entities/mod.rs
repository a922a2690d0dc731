//! Domain entities representing core business objects.

pub mod client;
pub mod issuance_record;

// Re-export commonly used types
pub use client::Client;
pub use issuance_record::IssuanceRecord;
