//! Lifecycle coordinator
//!
//! Thin glue invoked by the external CRUD layer, not by UI code directly:
//! status changes consult the transition graphs, deletions purge any
//! outstanding edit lock. Lock ownership is advisory and is deliberately
//! NOT checked here — the lock exists to warn, not to forbid, so admin
//! override flows keep working.

use std::sync::Arc;

use bakeops_common::ResourceKind;
use bakeops_lock::LockService;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::LifecycleError;
use crate::status::{self, ProductionOrderStatus};

/// Resource-existence and current-status lookups supplied by the external
/// CRUD layer
pub trait ResourceDirectory: Send + Sync {
    fn exists(&self, kind: ResourceKind, resource_id: &str) -> bool;

    fn status_of(&self, kind: ResourceKind, resource_id: &str) -> Option<String>;
}

/// Production scheduling details required to move an internal order from
/// `approved` to `scheduled`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleDetails {
    pub production_date: NaiveDate,
    pub assignee: Option<String>,
}

pub struct LifecycleCoordinator {
    locks: Arc<LockService>,
    directory: Arc<dyn ResourceDirectory>,
}

impl LifecycleCoordinator {
    pub fn new(locks: Arc<LockService>, directory: Arc<dyn ResourceDirectory>) -> Self {
        Self { locks, directory }
    }

    pub fn resource_exists(&self, kind: ResourceKind, resource_id: &str) -> bool {
        self.directory.exists(kind, resource_id)
    }

    /// Deletion-event hook: called after the external layer confirms the
    /// record is gone. Deletion always wins over any outstanding lock, so
    /// the purge is unconditional and ignores ownership.
    pub fn on_deleted(&self, kind: ResourceKind, resource_id: &str) {
        self.locks.purge(kind, resource_id);
        info!(kind = %kind, resource_id = %resource_id, "Resource deleted, lock purged");
    }

    /// Validate a status change and return the new status for the caller
    /// to persist
    ///
    /// Internal orders entering `scheduled` from another status must carry
    /// production details; a same-status no-op never does.
    pub fn on_status_change(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        target: &str,
        schedule: Option<&ScheduleDetails>,
    ) -> Result<String, LifecycleError> {
        let current = self
            .directory
            .status_of(kind, resource_id)
            .ok_or(LifecycleError::NotFound)?;

        if kind == ResourceKind::InternalOrder
            && target == ProductionOrderStatus::Scheduled.as_str()
            && current != target
            && schedule.is_none()
        {
            return Err(LifecycleError::ScheduleRequired);
        }

        let new_status = status::check_transition(kind, &current, target)?;
        debug!(
            kind = %kind,
            resource_id = %resource_id,
            from = %current,
            to = %new_status,
            "Status transition accepted"
        );
        Ok(new_status)
    }

    /// Move an order one step along its happy path
    ///
    /// Refuses at `approved` for internal orders: scheduling is a distinct
    /// operation gated on production details, not a generic advance.
    pub fn advance(&self, kind: ResourceKind, resource_id: &str) -> Result<String, LifecycleError> {
        let current = self
            .directory
            .status_of(kind, resource_id)
            .ok_or(LifecycleError::NotFound)?;

        if kind == ResourceKind::InternalOrder
            && current == ProductionOrderStatus::Approved.as_str()
        {
            return Err(LifecycleError::ScheduleRequired);
        }

        match status::next_status(kind, &current)? {
            Some(next) => self.on_status_change(kind, resource_id, &next, None),
            None => Err(LifecycleError::NoNextStatus(current)),
        }
    }

    /// Schedule an approved internal order for production
    pub fn schedule(
        &self,
        resource_id: &str,
        details: &ScheduleDetails,
    ) -> Result<String, LifecycleError> {
        self.on_status_change(
            ResourceKind::InternalOrder,
            resource_id,
            ProductionOrderStatus::Scheduled.as_str(),
            Some(details),
        )
    }
}
