//! Error types for the access-control flows.
//!
//! Every store-level failure is converted to one of these at the flow
//! boundary; nothing below this layer reaches callers raw.

use thiserror::Error;

/// Result type for access operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors surfaced by the access-control flows.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Tag identifier absent from the store. Routes to an
    /// error/activation-choice state, never fatal.
    #[error("token not found")]
    RecordNotFound,

    /// Activation attempted on an already-active record. Terminal for
    /// that flow instance; the holder is redirected to authentication.
    #[error("this token has already been activated")]
    AlreadyActivated,

    /// Passphrase mismatch and fallback passcode mismatch. Recoverable,
    /// unlimited retries.
    #[error("access denied")]
    InvalidCredentials,

    /// Backend failure. The authentication gate degrades to
    /// fallback-passcode-only mode instead of surfacing this.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}
