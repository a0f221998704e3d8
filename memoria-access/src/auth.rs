//! The authentication gate.
//!
//! Credentials are matched exactly against the record store. A miss or
//! a backend failure falls through to the reserved fallback passcode:
//! availability over strictness, so the vault stays reachable when the
//! store is down or a record was never provisioned. The cost is that the
//! fallback path bypasses persisted role and tier data.

use crate::{AccessConfig, AccessError, AccessResult, SessionManager};
use memoria_store::TokenStore;
use memoria_types::{Role, Session, TagId, Tier, TokenRecord, TokenStatus};
use std::sync::Arc;
use tracing::{debug, warn};

/// Validates submitted credentials and establishes sessions.
#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn TokenStore>,
    sessions: SessionManager,
    config: AccessConfig,
}

impl AuthGate {
    pub fn new(store: Arc<dyn TokenStore>, sessions: SessionManager, config: AccessConfig) -> Self {
        Self {
            store,
            sessions,
            config,
        }
    }

    /// Authenticates a tag/passphrase pair.
    ///
    /// Store errors are treated like a miss and fall through to the
    /// fallback passcode; they never abort the flow. On the fallback
    /// path the session gets an ephemeral record: admin role iff the
    /// tag contains the reserved marker, premium tier.
    pub async fn authenticate(&self, tag_id: &TagId, passphrase: &str) -> AccessResult<Session> {
        match self.store.get_by_credentials(tag_id, passphrase).await {
            Ok(Some(record)) => {
                debug!(tag = %tag_id, "credentials matched stored record");
                return Ok(self.sessions.establish(record).await);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(tag = %tag_id, error = %e, "store unreachable, degrading to fallback passcode");
            }
        }

        if passphrase == self.config.fallback_passcode {
            let record = self.fallback_record(tag_id, passphrase);
            debug!(tag = %tag_id, role = ?record.role, "fallback passcode accepted");
            return Ok(self.sessions.establish(record).await);
        }

        Err(AccessError::InvalidCredentials)
    }

    /// The ephemeral record behind a fallback login. Never written back
    /// to the store.
    fn fallback_record(&self, tag_id: &TagId, passphrase: &str) -> TokenRecord {
        let role = if tag_id.contains_marker(&self.config.admin_marker) {
            Role::Admin
        } else {
            Role::User
        };
        TokenRecord {
            tag_id: tag_id.clone(),
            status: TokenStatus::Active,
            passphrase: passphrase.to_string(),
            recovery_contact: None,
            role,
            tier: Tier::Premium,
        }
    }
}
