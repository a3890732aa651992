//! Edit-lock service layer
//!
//! Stateless operation semantics over the [`LockRegistry`]. All operations
//! are non-blocking: conflicts are reported immediately, never queued, and
//! a losing acquirer must retry after expiry or release.

use std::sync::Arc;
use std::time::Duration;

use bakeops_common::{ResourceKind, now_millis};
use tracing::{debug, info};

use crate::model::{LockKey, LockRecord, OwnerIdentity};
use crate::registry::{LockRegistry, RenewFailure};

/// Default lock time-to-live
pub const DEFAULT_LOCK_TTL: Duration = Duration::from_secs(60);

/// Default interval between background sweeps of expired records
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Edit-lock configuration surface
#[derive(Clone, Debug)]
pub struct LockConfig {
    /// Duration after which an unrenewed lock is considered expired
    pub ttl: Duration,
    /// Cadence of the optional background sweeper
    pub sweep_interval: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_LOCK_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl LockConfig {
    /// Recommended client renewal cadence
    ///
    /// Half the TTL, so a single missed heartbeat from a slow round-trip
    /// does not cause premature expiry.
    pub fn renew_interval(&self) -> Duration {
        self.ttl / 2
    }
}

/// Lock operation errors
///
/// Every variant is recoverable and scoped to a single resource/request.
/// On `NotOwned`, `Expired`, or `NotFound` the caller must drop its local
/// belief of ownership and re-acquire before continuing to edit.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LockError {
    #[error("resource is being edited by {owner_display_name}")]
    Conflict {
        owner_user_id: String,
        owner_display_name: String,
        acquired_at: i64,
    },

    #[error("lock is held by another session")]
    NotOwned,

    #[error("lock has expired")]
    Expired,

    #[error("no lock exists for this resource")]
    NotFound,
}

/// Read-only lock state of a resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LockStatus {
    Unlocked,
    Locked(LockRecord),
}

/// Stateless edit-lock operations over a shared registry
pub struct LockService {
    registry: Arc<LockRegistry>,
    ttl_ms: i64,
}

impl LockService {
    pub fn new(config: &LockConfig) -> Self {
        Self::with_registry(Arc::new(LockRegistry::new()), config.ttl)
    }

    pub fn with_registry(registry: Arc<LockRegistry>, ttl: Duration) -> Self {
        Self {
            registry,
            ttl_ms: ttl.as_millis() as i64,
        }
    }

    /// Shared registry handle, for the background sweeper
    pub fn registry(&self) -> Arc<LockRegistry> {
        self.registry.clone()
    }

    /// Claim the edit lock for a resource
    ///
    /// Wins when no live record exists (including over an expired one) and
    /// when the caller's session already holds the lock, in which case the
    /// existing lock is extended. Returns [`LockError::Conflict`] carrying
    /// the holder's identity when another session holds a live lock.
    pub fn acquire(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        session_id: &str,
        owner: &OwnerIdentity,
    ) -> Result<LockRecord, LockError> {
        let now = now_millis();
        let key = LockKey::new(kind, resource_id);
        let record = LockRecord {
            resource_kind: kind,
            resource_id: resource_id.to_string(),
            owner_session_id: session_id.to_string(),
            owner_user_id: owner.user_id.clone(),
            owner_display_name: owner.display_name.clone(),
            acquired_at: now,
            renewed_at: now,
            expires_at: now + self.ttl_ms,
        };

        match self.registry.try_put(key, record, now) {
            Ok(record) => {
                debug!(
                    kind = %kind,
                    resource_id = %resource_id,
                    session_id = %session_id,
                    expires_at = record.expires_at,
                    "Lock acquired"
                );
                Ok(record)
            }
            Err(holder) => Err(LockError::Conflict {
                owner_user_id: holder.owner_user_id,
                owner_display_name: holder.owner_display_name,
                acquired_at: holder.acquired_at,
            }),
        }
    }

    /// Extend the caller's lock from now
    ///
    /// Succeeds only when a live record owned by `session_id` exists.
    pub fn renew(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        session_id: &str,
    ) -> Result<LockRecord, LockError> {
        let now = now_millis();
        let key = LockKey::new(kind, resource_id);

        match self
            .registry
            .extend_if_owner(&key, session_id, now, now, now + self.ttl_ms)
        {
            Ok(record) => {
                debug!(
                    kind = %kind,
                    resource_id = %resource_id,
                    session_id = %session_id,
                    expires_at = record.expires_at,
                    "Lock renewed"
                );
                Ok(record)
            }
            Err(RenewFailure::HeldByOther(_)) => Err(LockError::NotOwned),
            Err(RenewFailure::Expired) => Err(LockError::Expired),
            Err(RenewFailure::Missing) => Err(LockError::NotFound),
        }
    }

    /// Release the caller's lock
    ///
    /// Idempotent and never errors: called from cleanup paths (page unload,
    /// logout) where the caller cannot be certain of current ownership.
    /// Only a live record owned by `session_id` is deleted.
    pub fn release(&self, kind: ResourceKind, resource_id: &str, session_id: &str) {
        let key = LockKey::new(kind, resource_id);
        if self.registry.remove_if_owner(&key, session_id, now_millis()) {
            debug!(
                kind = %kind,
                resource_id = %resource_id,
                session_id = %session_id,
                "Lock released"
            );
        }
    }

    /// Read-only lock state; an expired record reads as unlocked
    pub fn status(&self, kind: ResourceKind, resource_id: &str) -> LockStatus {
        let key = LockKey::new(kind, resource_id);
        match self.registry.get(&key) {
            Some(record) if crate::expiry::is_live(&record, now_millis()) => {
                LockStatus::Locked(record)
            }
            _ => LockStatus::Unlocked,
        }
    }

    /// Delete any lock for the resource regardless of owner
    ///
    /// Invoked when the underlying resource is deleted; deletion always
    /// wins over any outstanding lock.
    pub fn purge(&self, kind: ResourceKind, resource_id: &str) {
        let key = LockKey::new(kind, resource_id);
        if self.registry.purge(&key).is_some() {
            info!(kind = %kind, resource_id = %resource_id, "Lock purged");
        }
    }
}
