//! Deployment configuration for the access flows.
//!
//! The reserved identifiers are agreed at deployment time; the defaults
//! here match the shipped souvenir batch. They are configuration, not
//! secrets.

use memoria_types::TagId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long callers keep the scan error banner visible before routing on.
pub const SCAN_ERROR_GRACE: Duration = Duration::from_secs(3);

/// How long callers show the inline credential-denial message.
pub const DENIAL_DISPLAY: Duration = Duration::from_secs(2);

/// Reserved identifiers and markers used by the scan policy and the
/// authentication gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// The bypass identifier: always routes to the vault as admin,
    /// regardless of stored status.
    pub admin_tag: TagId,
    /// Universal fallback passcode accepted when the store misses or is
    /// unreachable.
    pub fallback_passcode: String,
    /// Sentinel identifier that routes an unregistered scan to the
    /// activation flow instead of an error.
    pub new_tag_sentinel: TagId,
    /// Substring that makes a fallback login an administrator.
    pub admin_marker: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_tag: TagId::new("RM-ADMIN-2026"),
            fallback_passcode: "ROME2026".to_string(),
            new_tag_sentinel: TagId::new("NEW"),
            admin_marker: "ADMIN".to_string(),
        }
    }
}
