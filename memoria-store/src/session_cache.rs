//! The device-local session cache contract.

use crate::StoreResult;
use async_trait::async_trait;
use memoria_types::Session;

/// A durable single-slot cache for the current session.
///
/// Scoped to the device: it survives app restarts but is not expected to
/// survive a device change. Holds at most one session at a time.
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Stores the session, replacing any previous one.
    async fn save(&self, session: &Session) -> StoreResult<()>;

    /// Loads the cached session, if any.
    async fn load(&self) -> StoreResult<Option<Session>>;

    /// Clears the slot (logout).
    async fn clear(&self) -> StoreResult<()>;
}
