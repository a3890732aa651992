//! Lazy expiry policy
//!
//! Expiry is a pure comparison consulted by every lock operation. No
//! background sweeper is required for correctness: any operation that
//! observes an expired record treats the resource as unlocked and is free
//! to overwrite it.

use crate::model::LockRecord;

/// A record is live while `now < expires_at`
pub fn is_live(record: &LockRecord, now_ms: i64) -> bool {
    now_ms < record.expires_at
}

/// Inverse of [`is_live`]
pub fn is_expired(record: &LockRecord, now_ms: i64) -> bool {
    !is_live(record, now_ms)
}
