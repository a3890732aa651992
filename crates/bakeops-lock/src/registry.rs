//! Durable key-value registry of lock records
//!
//! The registry is the single source of truth for "who currently owns this
//! resource". All mutating operations go through entry guards, which give
//! key-level atomic check-and-set: two simultaneous acquirers for the same
//! key can never both win.

use dashmap::{DashMap, Entry};

use crate::expiry;
use crate::model::{LockKey, LockRecord};

/// Why an ownership-conditional update did not apply
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenewFailure {
    /// A live record exists but belongs to another session
    HeldByOther(LockRecord),
    /// A record exists but is past its expiry
    Expired,
    /// No record exists for the key
    Missing,
}

/// In-memory lock registry keyed by `(kind, resource_id)`
#[derive(Default)]
pub struct LockRegistry {
    locks: DashMap<LockKey, LockRecord>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Read the stored record for a key, expired or not
    pub fn get(&self, key: &LockKey) -> Option<LockRecord> {
        self.locks.get(key).map(|entry| entry.value().clone())
    }

    /// Atomic create-or-overwrite-if-expired
    ///
    /// Inserts `record` unless a live record owned by a different session
    /// already exists, in which case the current holder is returned as the
    /// error and nothing is mutated. A live record owned by the same
    /// session is replaced but keeps its original `acquired_at`, so
    /// re-acquisition by the current holder reads as a renewal.
    ///
    /// The existence/expiry check and the write happen under one entry
    /// guard, so concurrent acquirers on the same key are serialized.
    pub fn try_put(
        &self,
        key: LockKey,
        record: LockRecord,
        now_ms: i64,
    ) -> Result<LockRecord, LockRecord> {
        match self.locks.entry(key) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get();
                if expiry::is_live(current, now_ms) {
                    if current.owner_session_id == record.owner_session_id {
                        let mut renewed = record;
                        renewed.acquired_at = current.acquired_at;
                        occupied.insert(renewed.clone());
                        Ok(renewed)
                    } else {
                        Err(current.clone())
                    }
                } else {
                    occupied.insert(record.clone());
                    Ok(record)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record.clone());
                Ok(record)
            }
        }
    }

    /// Extend the current record's validity if it is live and owned by
    /// `session_id`
    pub fn extend_if_owner(
        &self,
        key: &LockKey,
        session_id: &str,
        now_ms: i64,
        renewed_at: i64,
        expires_at: i64,
    ) -> Result<LockRecord, RenewFailure> {
        match self.locks.entry(key.clone()) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get_mut();
                if expiry::is_expired(current, now_ms) {
                    return Err(RenewFailure::Expired);
                }
                if current.owner_session_id != session_id {
                    return Err(RenewFailure::HeldByOther(current.clone()));
                }
                current.renewed_at = renewed_at;
                current.expires_at = expires_at;
                Ok(current.clone())
            }
            Entry::Vacant(_) => Err(RenewFailure::Missing),
        }
    }

    /// Delete the record if it is live and owned by `session_id`
    ///
    /// Returns `true` when a record was removed.
    pub fn remove_if_owner(&self, key: &LockKey, session_id: &str, now_ms: i64) -> bool {
        self.locks
            .remove_if(key, |_, record| {
                expiry::is_live(record, now_ms) && record.owner_session_id == session_id
            })
            .is_some()
    }

    /// Delete the record unconditionally, regardless of owner
    pub fn purge(&self, key: &LockKey) -> Option<LockRecord> {
        self.locks.remove(key).map(|(_, record)| record)
    }

    /// Drop all expired records, returning how many were removed
    ///
    /// Purely a hygiene operation; lazy checks remain authoritative.
    pub fn sweep_expired(&self, now_ms: i64) -> usize {
        let before = self.locks.len();
        self.locks
            .retain(|_, record| expiry::is_live(record, now_ms));
        before.saturating_sub(self.locks.len())
    }

    /// Snapshot of all currently live records, for lock listings
    pub fn live_records(&self, now_ms: i64) -> Vec<LockRecord> {
        self.locks
            .iter()
            .filter(|entry| expiry::is_live(entry.value(), now_ms))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
