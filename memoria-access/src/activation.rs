//! The one-time activation flow.
//!
//! A record is provisioned `pending` by the operator; the holder scans
//! the tag, sets a passphrase, and the record flips to `active` exactly
//! once. The flip carries a status precondition so a second device
//! racing the same tag loses cleanly instead of overwriting the
//! passphrase.

use crate::{AccessError, AccessResult, SessionManager};
use memoria_store::{StoreError, TokenStore, TokenUpdate};
use memoria_types::{Session, TagId, TokenRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives activation for one scanned tag.
#[derive(Clone)]
pub struct ActivationFlow {
    store: Arc<dyn TokenStore>,
    sessions: SessionManager,
}

impl ActivationFlow {
    pub fn new(store: Arc<dyn TokenStore>, sessions: SessionManager) -> Self {
        Self { store, sessions }
    }

    /// Pre-validates the tag before showing the activation steps.
    ///
    /// Fails fast with `AlreadyActivated` for an active record so a
    /// second activation attempt never reaches the passphrase step, and
    /// with `RecordNotFound` for an unregistered identifier.
    pub async fn begin(&self, tag_id: &TagId) -> AccessResult<TokenRecord> {
        let record = self
            .store
            .get(tag_id)
            .await
            .map_err(|e| AccessError::StoreUnavailable(e.to_string()))?
            .ok_or(AccessError::RecordNotFound)?;

        if record.is_active() {
            debug!(tag = %tag_id, "activation refused, token already active");
            return Err(AccessError::AlreadyActivated);
        }
        Ok(record)
    }

    /// Performs the pending-to-active transition and establishes the
    /// holder's first session from the stored record.
    pub async fn activate(
        &self,
        tag_id: &TagId,
        passphrase: &str,
        recovery_contact: Option<String>,
    ) -> AccessResult<Session> {
        if passphrase.is_empty() {
            return Err(AccessError::InvalidCredentials);
        }

        let update = TokenUpdate::activation(passphrase.to_string(), recovery_contact);
        let updated = match self.store.update(tag_id, update).await {
            Ok(record) => record,
            // The precondition lost a race or the tag was already active.
            Err(StoreError::Conflict(reason)) => {
                warn!(tag = %tag_id, %reason, "activation conflict");
                return Err(AccessError::AlreadyActivated);
            }
            Err(StoreError::NotFound) => return Err(AccessError::RecordNotFound),
            Err(e) => return Err(AccessError::StoreUnavailable(e.to_string())),
        };

        debug!(tag = %tag_id, "token activated");
        Ok(self.sessions.establish(updated).await)
    }
}
