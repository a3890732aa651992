//! Lifecycle operation errors

use bakeops_common::ResourceKind;

/// Errors from status transitions and coordinator operations
///
/// All variants are caller errors scoped to one resource/request; none is
/// fatal to the process and none is auto-retried on the caller's behalf.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("unknown status '{value}' for {kind}")]
    UnknownStatus { kind: ResourceKind, value: String },

    /// Illegal transition; `allowed` lists the legal next statuses so the
    /// caller can present valid next steps
    #[error("cannot move order from '{from}' to '{to}'")]
    InvalidTransition {
        from: String,
        to: String,
        allowed: Vec<String>,
    },

    /// Internal orders need a production date before entering `scheduled`
    #[error("a production date is required to schedule this order")]
    ScheduleRequired,

    /// The order has no further happy-path step to advance to
    #[error("order in status '{0}' has no next step")]
    NoNextStatus(String),

    #[error("order not found")]
    NotFound,
}
