//! Shared test helpers for the access flows.

#![allow(dead_code)]

use async_trait::async_trait;
use memoria_access::{AccessConfig, ActivationFlow, AuthGate, ScanResolver, SessionManager};
use memoria_store::{
    MemorySessionCache, MemoryTokenStore, StoreError, StoreResult, TokenStore, TokenUpdate,
};
use memoria_types::{Role, TagId, Tier, TokenRecord, TokenStatus};
use std::sync::Arc;

/// A store whose backend is always unreachable.
pub struct UnreachableStore;

#[async_trait]
impl TokenStore for UnreachableStore {
    async fn get(&self, _tag_id: &TagId) -> StoreResult<Option<TokenRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn get_by_credentials(
        &self,
        _tag_id: &TagId,
        _passphrase: &str,
    ) -> StoreResult<Option<TokenRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _record: TokenRecord) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn update(&self, _tag_id: &TagId, _changes: TokenUpdate) -> StoreResult<TokenRecord> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Wired-up flows sharing one store and one session cache.
pub struct Harness {
    pub store: Arc<dyn TokenStore>,
    pub cache: Arc<MemorySessionCache>,
    pub sessions: SessionManager,
    pub resolver: ScanResolver,
    pub activation: ActivationFlow,
    pub auth: AuthGate,
}

pub fn harness(store: Arc<dyn TokenStore>) -> Harness {
    let cache = Arc::new(MemorySessionCache::new());
    let sessions = SessionManager::new(cache.clone());
    let config = AccessConfig::default();
    Harness {
        resolver: ScanResolver::new(store.clone(), sessions.clone(), config.clone()),
        activation: ActivationFlow::new(store.clone(), sessions.clone()),
        auth: AuthGate::new(store.clone(), sessions.clone(), config),
        store,
        cache,
        sessions,
    }
}

pub async fn seeded_harness(records: Vec<TokenRecord>) -> Harness {
    harness(Arc::new(MemoryTokenStore::with_records(records).await))
}

pub fn pending(tag: &str) -> TokenRecord {
    TokenRecord::pending(tag)
}

pub fn active(tag: &str, passphrase: &str) -> TokenRecord {
    TokenRecord {
        tag_id: tag.into(),
        status: TokenStatus::Active,
        passphrase: passphrase.to_string(),
        recovery_contact: None,
        role: Role::User,
        tier: Tier::Gold,
    }
}
