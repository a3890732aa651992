//! BakeOps Lifecycle - Order status state machine
//!
//! Two independent transition graphs (customer fulfillment orders and
//! internal production orders) over one shared legality engine, plus the
//! coordinator gluing status changes and deletions to the edit-lock
//! registry.

pub mod coordinator;
pub mod error;
pub mod graph;
pub mod status;

pub use coordinator::{LifecycleCoordinator, ResourceDirectory, ScheduleDetails};
pub use error::LifecycleError;
pub use graph::TransitionGraph;
pub use status::{CustomerOrderStatus, ProductionOrderStatus, check_transition, initial_status};
