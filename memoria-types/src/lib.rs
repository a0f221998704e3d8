//! Core type definitions for Memoria.
//!
//! This crate defines the fundamental types shared across the core:
//! - Tag and session identifiers
//! - The token record (one physical souvenir, one record)
//! - The client session model
//!
//! Flow-specific types (scan outcomes, redemption tokens, catalog
//! entries) belong in their respective crates, not here.

mod ids;
mod record;
mod session;

pub use ids::{SessionId, TagId};
pub use record::{Role, Tier, TokenRecord, TokenStatus};
pub use session::Session;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid tag identifier: {0}")]
    InvalidTagId(String),
}
