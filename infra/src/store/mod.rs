//! Code store implementations.
//!
//! The in-memory store backs tests and single-process deployments; the
//! Redis store is the production backend, with record expiry delegated to
//! key TTLs and the user-code hash uniqueness enforced by `SET NX`.

pub mod memory;
pub mod redis_store;


pub use memory::InMemoryCodeStore;
pub use redis_store::RedisCodeStore;
