//! The scan policy: what a tag identifier resolves to.
//!
//! The original client compared reserved identifiers at several call
//! sites; here the precedence lives in one pure function so it can be
//! tested in isolation. The bypass identifier is checked before any
//! status branch.

use crate::{AccessConfig, AccessError, AccessResult, SessionManager};
use memoria_store::TokenStore;
use memoria_types::{Role, TagId, Tier, TokenRecord, TokenStatus};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where a scanned tag identifier routes.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// No record for this identifier; surface an error state.
    NoRecord,
    /// Route to the activation flow (pending record, or the reserved
    /// "new tag" sentinel).
    Pending,
    /// Activated record; establish a session and open the vault.
    Active(TokenRecord),
    /// The reserved administrative identifier; always opens the vault
    /// with admin role, regardless of stored status.
    AdminBypass(TokenRecord),
}

/// Evaluates the scan policy against an already-fetched lookup result.
///
/// Precedence: admin bypass, then stored status, then the new-tag
/// sentinel. A pending record for the bypass identifier never surfaces
/// the activation path.
#[must_use]
pub fn evaluate_scan(
    config: &AccessConfig,
    tag_id: &TagId,
    lookup: Option<&TokenRecord>,
) -> ScanOutcome {
    if *tag_id == config.admin_tag {
        let record = match lookup {
            Some(stored) => {
                let mut record = stored.clone();
                record.role = Role::Admin;
                record
            }
            None => synthesize_admin_record(tag_id),
        };
        return ScanOutcome::AdminBypass(record);
    }

    match lookup {
        Some(record) if record.is_active() => ScanOutcome::Active(record.clone()),
        Some(_) => ScanOutcome::Pending,
        None if *tag_id == config.new_tag_sentinel => ScanOutcome::Pending,
        None => ScanOutcome::NoRecord,
    }
}

/// The ephemeral record used when the bypass identifier has no stored
/// row. Not written back to the store.
fn synthesize_admin_record(tag_id: &TagId) -> TokenRecord {
    TokenRecord {
        tag_id: tag_id.clone(),
        status: TokenStatus::Active,
        passphrase: String::new(),
        recovery_contact: None,
        role: Role::Admin,
        tier: Tier::Premium,
    }
}

/// Resolves scans end to end: store lookup, policy, session side effect.
#[derive(Clone)]
pub struct ScanResolver {
    store: Arc<dyn TokenStore>,
    sessions: SessionManager,
    config: AccessConfig,
}

impl ScanResolver {
    pub fn new(store: Arc<dyn TokenStore>, sessions: SessionManager, config: AccessConfig) -> Self {
        Self {
            store,
            sessions,
            config,
        }
    }

    /// Resolves a scanned identifier.
    ///
    /// On `Active` or `AdminBypass` the record is persisted into the
    /// session cache before returning. A store failure surfaces
    /// `StoreUnavailable` with the backend message, except for the
    /// bypass identifier, which must resolve even with the store down
    /// so the operator can always regain entry.
    pub async fn resolve(&self, tag_id: &TagId) -> AccessResult<ScanOutcome> {
        let lookup = match self.store.get(tag_id).await {
            Ok(lookup) => lookup,
            Err(e) if *tag_id == self.config.admin_tag => {
                warn!(error = %e, "store unreachable, admin bypass proceeding without record");
                None
            }
            Err(e) => return Err(AccessError::StoreUnavailable(e.to_string())),
        };

        let outcome = evaluate_scan(&self.config, tag_id, lookup.as_ref());
        debug!(tag = %tag_id, outcome = outcome.name(), "scan resolved");

        match &outcome {
            ScanOutcome::Active(record) | ScanOutcome::AdminBypass(record) => {
                self.sessions.establish(record.clone()).await;
            }
            ScanOutcome::NoRecord | ScanOutcome::Pending => {}
        }
        Ok(outcome)
    }
}

impl ScanOutcome {
    fn name(&self) -> &'static str {
        match self {
            Self::NoRecord => "no-record",
            Self::Pending => "pending",
            Self::Active(_) => "active",
            Self::AdminBypass(_) => "admin-bypass",
        }
    }
}
