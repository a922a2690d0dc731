//! Utility functions shared across the workspace.

pub mod address;
pub mod uri;
