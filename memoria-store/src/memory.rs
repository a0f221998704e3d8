//! In-memory backends for tests and demos.

use crate::{SessionCache, StoreError, StoreResult, TokenStore, TokenUpdate};
use async_trait::async_trait;
use memoria_types::{Session, TagId, TokenRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A token store backed by a guarded hash map.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    records: RwLock<HashMap<TagId, TokenRecord>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with records.
    pub async fn with_records(records: impl IntoIterator<Item = TokenRecord>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.write().await;
            for record in records {
                map.insert(record.tag_id.clone(), record);
            }
        }
        store
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, tag_id: &TagId) -> StoreResult<Option<TokenRecord>> {
        Ok(self.records.read().await.get(tag_id).cloned())
    }

    async fn get_by_credentials(
        &self,
        tag_id: &TagId,
        passphrase: &str,
    ) -> StoreResult<Option<TokenRecord>> {
        Ok(self
            .records
            .read()
            .await
            .get(tag_id)
            .filter(|r| r.passphrase == passphrase)
            .cloned())
    }

    async fn insert(&self, record: TokenRecord) -> StoreResult<()> {
        let mut map = self.records.write().await;
        if map.contains_key(&record.tag_id) {
            return Err(StoreError::Conflict(format!(
                "tag already registered: {}",
                record.tag_id
            )));
        }
        map.insert(record.tag_id.clone(), record);
        Ok(())
    }

    async fn update(&self, tag_id: &TagId, changes: TokenUpdate) -> StoreResult<TokenRecord> {
        let mut map = self.records.write().await;
        let record = map.get_mut(tag_id).ok_or(StoreError::NotFound)?;
        if let Some(required) = changes.require_status {
            if record.status != required {
                return Err(StoreError::Conflict(format!(
                    "status precondition failed for {tag_id}"
                )));
            }
        }
        changes.apply_to(record);
        Ok(record.clone())
    }
}

/// A session cache backed by a guarded slot.
#[derive(Debug, Default)]
pub struct MemorySessionCache {
    slot: RwLock<Option<Session>>,
}

impl MemorySessionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionCache for MemorySessionCache {
    async fn save(&self, session: &Session) -> StoreResult<()> {
        *self.slot.write().await = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<Session>> {
        Ok(self.slot.read().await.clone())
    }

    async fn clear(&self) -> StoreResult<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}
