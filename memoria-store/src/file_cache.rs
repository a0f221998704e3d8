//! JSON-file session cache.
//!
//! Persists the current session as one JSON document so it survives app
//! restarts. A corrupt or unreadable file loads as "no session" rather
//! than failing startup.

use crate::{SessionCache, StoreError, StoreResult};
use async_trait::async_trait;
use memoria_types::Session;
use std::path::{Path, PathBuf};
use tracing::warn;

const CACHE_FILE: &str = "session.json";

/// A session cache stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSessionCache {
    path: PathBuf,
}

impl FileSessionCache {
    /// Creates a cache at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a cache at the platform-default location
    /// (`<data-local-dir>/memoria/session.json`).
    pub fn at_default_path() -> StoreResult<Self> {
        let base = dirs::data_local_dir()
            .ok_or_else(|| StoreError::Backend("no data directory available".to_string()))?;
        Ok(Self::new(base.join("memoria").join(CACHE_FILE)))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionCache for FileSessionCache {
    async fn save(&self, session: &Session) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    async fn load(&self) -> StoreResult<Option<Session>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable session cache");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> StoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
