//! The token record: one physical souvenir, one record.
//!
//! Records are created in `pending` state by an administrative process,
//! transition to `active` exactly once during the holder's activation
//! flow, and are never deleted by the core.

use crate::TagId;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a token record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    /// Record exists but the holder has not yet set a passphrase.
    Pending,
    /// Record has been activated. Never regresses to `Pending`.
    Active,
}

/// Access role carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular holder.
    #[default]
    User,
    /// Elevated view access (operator dashboard).
    Admin,
}

/// Souvenir tier, determines whether redemption is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Base tier.
    #[default]
    Standard,
    /// Gold souvenir line.
    Gold,
    /// Premium souvenir line.
    Premium,
}

impl Tier {
    /// Returns true if holders of this tier claim store items for free.
    #[must_use]
    pub fn redeems_free(&self) -> bool {
        matches!(self, Self::Gold | Self::Premium)
    }
}

/// A holder's record, keyed by the tag identifier on their souvenir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// The physical tag identifier. Unique, immutable once created.
    pub tag_id: TagId,
    /// Lifecycle flag.
    pub status: TokenStatus,
    /// Set once during activation. Stored and compared in the clear.
    pub passphrase: String,
    /// Optional recovery contact (email) captured at activation.
    pub recovery_contact: Option<String>,
    /// Access role, defaults to `User`.
    pub role: Role,
    /// Souvenir tier, defaults to `Standard`.
    pub tier: Tier,
}

impl TokenRecord {
    /// Creates a fresh pending record for a tag, as the administrative
    /// provisioning process does.
    pub fn pending(tag_id: impl Into<TagId>) -> Self {
        Self {
            tag_id: tag_id.into(),
            status: TokenStatus::Pending,
            passphrase: String::new(),
            recovery_contact: None,
            role: Role::default(),
            tier: Tier::default(),
        }
    }

    /// Returns true if the record has completed activation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == TokenStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_record_defaults() {
        let rec = TokenRecord::pending("RM-ALPHA-01");
        assert_eq!(rec.status, TokenStatus::Pending);
        assert_eq!(rec.role, Role::User);
        assert_eq!(rec.tier, Tier::Standard);
        assert!(rec.passphrase.is_empty());
        assert!(!rec.is_active());
    }

    #[test]
    fn tier_free_redemption() {
        assert!(!Tier::Standard.redeems_free());
        assert!(Tier::Gold.redeems_free());
        assert!(Tier::Premium.redeems_free());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TokenStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }
}
