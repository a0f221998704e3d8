//! Explicit session lifecycle over a device-local cache.
//!
//! Replaces the ambient "current user" slot the web client kept in
//! device-global storage: components receive a `SessionManager` and go
//! through `establish`/`restore`/`end` instead of reading a global.

use crate::{AccessError, AccessResult};
use memoria_store::SessionCache;
use memoria_types::{Session, TokenRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the session cache and the create/restore/destroy lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    cache: Arc<dyn SessionCache>,
}

impl SessionManager {
    /// Creates a manager over the given cache.
    pub fn new(cache: Arc<dyn SessionCache>) -> Self {
        Self { cache }
    }

    /// Establishes a session from an authenticated record and persists
    /// it. A cache write failure is logged, not fatal: the in-memory
    /// session is still valid for this run.
    pub async fn establish(&self, record: TokenRecord) -> Session {
        let session = Session::new(record);
        debug!(tag = %session.record.tag_id, session = %session.id, "session established");
        if let Err(e) = self.cache.save(&session).await {
            warn!(error = %e, "failed to persist session cache");
        }
        session
    }

    /// Restores the cached session from a previous run, if any. Cache
    /// read failures restore nothing rather than blocking startup.
    pub async fn restore(&self) -> Option<Session> {
        match self.cache.load().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "failed to read session cache");
                None
            }
        }
    }

    /// Destroys the current session (logout).
    pub async fn end(&self) -> AccessResult<()> {
        self.cache
            .clear()
            .await
            .map_err(|e| AccessError::StoreUnavailable(e.to_string()))
    }
}
