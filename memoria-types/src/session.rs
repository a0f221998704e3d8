//! The client session: a device-local copy of the authenticated record.

use crate::{SessionId, TokenRecord};
use serde::{Deserialize, Serialize};

/// An established client session.
///
/// Created on successful authentication or activation, destroyed on
/// explicit logout. Holds a copy of the record as it was at
/// authentication time; it is not refreshed from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Time-ordered session identifier.
    pub id: SessionId,
    /// Snapshot of the authenticated record.
    pub record: TokenRecord,
    /// When the session was established.
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Establishes a new session from an authenticated record.
    #[must_use]
    pub fn new(record: TokenRecord) -> Self {
        Self {
            id: SessionId::new(),
            record,
            started_at: chrono::Utc::now(),
        }
    }
}
