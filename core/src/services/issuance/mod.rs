//! Issuance orchestration for out-of-band authorization codes.
//!
//! This module drives the whole pipeline: opaque handle generation, unique
//! user-code generation under a bounded retry budget, record persistence,
//! message rendering, and transport dispatch.

pub mod service;


pub use service::IssuanceService;
