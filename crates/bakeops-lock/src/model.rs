//! Lock record model

use bakeops_common::ResourceKind;
use serde::{Deserialize, Serialize};

/// Identity of the editor requesting a lock, carried for conflict messaging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerIdentity {
    pub user_id: String,
    pub display_name: String,
}

/// Registry key for a lockable entity
///
/// Keyed per `(kind, id)` so identifiers never collide across entity
/// families.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LockKey {
    pub kind: ResourceKind,
    pub resource_id: String,
}

impl LockKey {
    pub fn new(kind: ResourceKind, resource_id: impl Into<String>) -> Self {
        Self {
            kind,
            resource_id: resource_id.into(),
        }
    }
}

impl std::fmt::Display for LockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@@{}", self.kind, self.resource_id)
    }
}

/// A held edit lock on a single resource
///
/// Timestamps are epoch milliseconds with `expires_at = renewed_at + TTL`.
/// A record is valid only while `now < expires_at`; an expired record is
/// logically absent even when still stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    pub resource_kind: ResourceKind,
    pub resource_id: String,
    /// Client-generated id scoping one browser tab/editing context,
    /// distinct from user identity
    pub owner_session_id: String,
    pub owner_user_id: String,
    pub owner_display_name: String,
    pub acquired_at: i64,
    pub renewed_at: i64,
    pub expires_at: i64,
}

impl LockRecord {
    pub fn key(&self) -> LockKey {
        LockKey::new(self.resource_kind, self.resource_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_key_display() {
        let key = LockKey::new(ResourceKind::CustomerOrder, "ord-1");
        assert_eq!(key.to_string(), "customer-order@@ord-1");
    }

    #[test]
    fn test_lock_keys_distinct_across_kinds() {
        let a = LockKey::new(ResourceKind::CustomerOrder, "42");
        let b = LockKey::new(ResourceKind::InternalOrder, "42");
        assert_ne!(a, b);
    }

    #[test]
    fn test_lock_record_serde_camel_case() {
        let record = LockRecord {
            resource_kind: ResourceKind::CustomerOrder,
            resource_id: "ord-1".to_string(),
            owner_session_id: "s1".to_string(),
            owner_user_id: "u1".to_string(),
            owner_display_name: "Ada".to_string(),
            acquired_at: 1000,
            renewed_at: 1000,
            expires_at: 61000,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"ownerSessionId\":\"s1\""));
        assert!(json.contains("\"expiresAt\":61000"));

        let parsed: LockRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
