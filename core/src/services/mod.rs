//! Business services containing the issuance pipeline logic.

pub mod clock;
pub mod handle;
pub mod hashing;
pub mod issuance;
pub mod message;
pub mod transport;
pub mod user_code;

// Re-export commonly used types
pub use clock::{Clock, SystemClock};
pub use handle::{DefaultHandleGenerationService, HandleGenerationService};
pub use hashing::{Sha256UserCodeHasher, UserCodeHasher};
pub use issuance::IssuanceService;
pub use message::{render, resolve_format, FormatSource, ResolvedFormat};
pub use transport::{dispatch_fire_and_forget, Transporter};
pub use user_code::{
    AlphanumericUserCodeGenerator, NumericUserCodeGenerator, UserCodeGenerator, UserCodeService,
};
