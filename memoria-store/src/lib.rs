//! Record store and session cache contracts for Memoria.
//!
//! The access-control core talks to persistence only through the two
//! traits defined here:
//!
//! - [`TokenStore`]: keyed lookup and update of token records
//! - [`SessionCache`]: a single durable device-local session slot
//!
//! Backends provided: an in-memory store for tests and demos, a SQLite
//! store for deployments, and a JSON-file session cache that survives
//! restarts.

mod error;
mod file_cache;
mod memory;
mod session_cache;
mod sqlite;
mod token;

pub use error::{StoreError, StoreResult};
pub use file_cache::FileSessionCache;
pub use memory::{MemorySessionCache, MemoryTokenStore};
pub use session_cache::SessionCache;
pub use sqlite::SqliteTokenStore;
pub use token::{TokenStore, TokenUpdate};
