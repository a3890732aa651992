//! BakeOps Lock - Order edit-lock manager
//!
//! Advisory mutual exclusion over shared order records. Multiple staff
//! members may open the same order for editing; this crate guarantees at
//! most one active editor per resource at a time and recovers from
//! abandoned sessions through TTL expiry.
//!
//! Components:
//! - [`LockRegistry`]: the single source of truth mapping `(kind, id)` to a
//!   lock record, with key-level atomic check-and-set
//! - [`LockService`]: stateless acquire/renew/release/status semantics over
//!   the registry
//! - [`expiry`]: the lazy expiry policy consulted by every operation
//! - [`LockSweeper`]: optional background cleanup of expired records
//!   (hygiene only, never required for correctness)

pub mod expiry;
pub mod model;
pub mod registry;
pub mod service;
pub mod sweeper;

pub use model::{LockKey, LockRecord, OwnerIdentity};
pub use registry::LockRegistry;
pub use service::{LockConfig, LockError, LockService, LockStatus};
pub use sweeper::LockSweeper;
