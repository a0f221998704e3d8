//! The token record store contract.

use crate::StoreResult;
use async_trait::async_trait;
use memoria_types::{Role, TagId, Tier, TokenRecord, TokenStatus};

/// A partial update to a token record.
///
/// Unset fields are left untouched. `require_status` is a write
/// precondition: when set and the stored status differs, the update
/// fails with `Conflict` and nothing is written. The activation flow
/// uses it to guard the pending-to-active transition against a second
/// device racing the same tag.
#[derive(Debug, Clone, Default)]
pub struct TokenUpdate {
    pub passphrase: Option<String>,
    pub recovery_contact: Option<String>,
    pub status: Option<TokenStatus>,
    pub role: Option<Role>,
    pub tier: Option<Tier>,
    pub require_status: Option<TokenStatus>,
}

impl TokenUpdate {
    /// The update written by the activation flow: set credentials and
    /// flip to active, but only if the record is still pending.
    #[must_use]
    pub fn activation(passphrase: String, recovery_contact: Option<String>) -> Self {
        Self {
            passphrase: Some(passphrase),
            recovery_contact,
            status: Some(TokenStatus::Active),
            require_status: Some(TokenStatus::Pending),
            ..Self::default()
        }
    }

    /// Applies the non-precondition fields to a record in place.
    pub fn apply_to(&self, record: &mut TokenRecord) {
        if let Some(passphrase) = &self.passphrase {
            record.passphrase = passphrase.clone();
        }
        if let Some(contact) = &self.recovery_contact {
            record.recovery_contact = Some(contact.clone());
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(role) = self.role {
            record.role = role;
        }
        if let Some(tier) = self.tier {
            record.tier = tier;
        }
    }
}

/// Keyed access to token records.
///
/// Implementations are externally consistent: each call is a single
/// non-transactional operation, except `update`, which must check its
/// precondition and write atomically with respect to other updates.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Looks up a record by tag identifier.
    async fn get(&self, tag_id: &TagId) -> StoreResult<Option<TokenRecord>>;

    /// Looks up a record matching both tag identifier and passphrase
    /// exactly (case-sensitive, compared in the clear).
    async fn get_by_credentials(
        &self,
        tag_id: &TagId,
        passphrase: &str,
    ) -> StoreResult<Option<TokenRecord>>;

    /// Inserts a fresh record. Fails with `Conflict` if the tag
    /// identifier already exists.
    async fn insert(&self, record: TokenRecord) -> StoreResult<()>;

    /// Applies a partial update and returns the record as stored after
    /// the write. Fails with `NotFound` if the tag is absent and with
    /// `Conflict` if `require_status` does not match.
    async fn update(&self, tag_id: &TagId, changes: TokenUpdate) -> StoreResult<TokenRecord>;
}
