//! SQLite-backed token store.
//!
//! One table keyed by tag identifier, mirroring the backend `activations`
//! table. The connection sits behind a mutex; every operation is a single
//! short statement, and the precondition check in `update` runs inside
//! the same critical section as the write.

use crate::{StoreError, StoreResult, TokenStore, TokenUpdate};
use async_trait::async_trait;
use memoria_types::{Role, TagId, Tier, TokenRecord, TokenStatus};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::Mutex;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS activations (
    tag_id           TEXT PRIMARY KEY,
    status           TEXT NOT NULL,
    passphrase       TEXT NOT NULL,
    recovery_contact TEXT,
    role             TEXT NOT NULL,
    tier             TEXT NOT NULL
)";

/// A token store persisted to a SQLite database file.
pub struct SqliteTokenStore {
    conn: Mutex<Connection>,
}

impl SqliteTokenStore {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory database, useful for tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Backend("connection mutex poisoned".to_string()))
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<TokenRecord> {
    let status: String = row.get("status")?;
    let role: String = row.get("role")?;
    let tier: String = row.get("tier")?;
    Ok(TokenRecord {
        tag_id: TagId::new(row.get::<_, String>("tag_id")?),
        status: parse_status(&status),
        passphrase: row.get("passphrase")?,
        recovery_contact: row.get("recovery_contact")?,
        role: parse_role(&role),
        tier: parse_tier(&tier),
    })
}

fn parse_status(s: &str) -> TokenStatus {
    // Unknown values degrade to pending rather than failing the read.
    match s {
        "active" => TokenStatus::Active,
        _ => TokenStatus::Pending,
    }
}

fn parse_role(s: &str) -> Role {
    match s {
        "admin" => Role::Admin,
        _ => Role::User,
    }
}

fn parse_tier(s: &str) -> Tier {
    match s {
        "gold" => Tier::Gold,
        "premium" => Tier::Premium,
        _ => Tier::Standard,
    }
}

fn status_str(status: TokenStatus) -> &'static str {
    match status {
        TokenStatus::Pending => "pending",
        TokenStatus::Active => "active",
    }
}

fn role_str(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Admin => "admin",
    }
}

fn tier_str(tier: Tier) -> &'static str {
    match tier {
        Tier::Standard => "standard",
        Tier::Gold => "gold",
        Tier::Premium => "premium",
    }
}

#[async_trait]
impl TokenStore for SqliteTokenStore {
    async fn get(&self, tag_id: &TagId) -> StoreResult<Option<TokenRecord>> {
        let conn = self.lock()?;
        let record = conn
            .query_row(
                "SELECT * FROM activations WHERE tag_id = ?1",
                params![tag_id.as_str()],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    async fn get_by_credentials(
        &self,
        tag_id: &TagId,
        passphrase: &str,
    ) -> StoreResult<Option<TokenRecord>> {
        let conn = self.lock()?;
        let record = conn
            .query_row(
                "SELECT * FROM activations WHERE tag_id = ?1 AND passphrase = ?2",
                params![tag_id.as_str(), passphrase],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    async fn insert(&self, record: TokenRecord) -> StoreResult<()> {
        let conn = self.lock()?;
        let result = conn.execute(
            "INSERT INTO activations (tag_id, status, passphrase, recovery_contact, role, tier)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.tag_id.as_str(),
                status_str(record.status),
                record.passphrase,
                record.recovery_contact,
                role_str(record.role),
                tier_str(record.tier),
            ],
        );
        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::Conflict(format!(
                    "tag already registered: {}",
                    record.tag_id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, tag_id: &TagId, changes: TokenUpdate) -> StoreResult<TokenRecord> {
        let conn = self.lock()?;
        let mut record = conn
            .query_row(
                "SELECT * FROM activations WHERE tag_id = ?1",
                params![tag_id.as_str()],
                row_to_record,
            )
            .optional()?
            .ok_or(StoreError::NotFound)?;

        if let Some(required) = changes.require_status {
            if record.status != required {
                return Err(StoreError::Conflict(format!(
                    "status precondition failed for {tag_id}"
                )));
            }
        }

        changes.apply_to(&mut record);
        conn.execute(
            "UPDATE activations
             SET status = ?2, passphrase = ?3, recovery_contact = ?4, role = ?5, tier = ?6
             WHERE tag_id = ?1",
            params![
                record.tag_id.as_str(),
                status_str(record.status),
                record.passphrase,
                record.recovery_contact,
                role_str(record.role),
                tier_str(record.tier),
            ],
        )?;
        Ok(record)
    }
}
