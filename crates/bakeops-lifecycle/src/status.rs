//! Order status vocabularies and their transition graphs
//!
//! The two order families carry materially different operational meaning
//! (fulfillment vs. manufacturing), so each keeps its own vocabulary and
//! graph while sharing the legality engine in [`crate::graph`].

use std::sync::LazyLock;

use bakeops_common::ResourceKind;
use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;
use crate::graph::TransitionGraph;

/// Customer fulfillment order lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerOrderStatus {
    Pending,
    Confirmed,
    Ready,
    Delivered,
    Cancelled,
}

impl CustomerOrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerOrderStatus::Pending => "pending",
            CustomerOrderStatus::Confirmed => "confirmed",
            CustomerOrderStatus::Ready => "ready",
            CustomerOrderStatus::Delivered => "delivered",
            CustomerOrderStatus::Cancelled => "cancelled",
        }
    }

    /// Next step along the happy path, if any
    pub fn next(self) -> Option<Self> {
        match self {
            CustomerOrderStatus::Pending => Some(CustomerOrderStatus::Confirmed),
            CustomerOrderStatus::Confirmed => Some(CustomerOrderStatus::Ready),
            CustomerOrderStatus::Ready => Some(CustomerOrderStatus::Delivered),
            CustomerOrderStatus::Delivered | CustomerOrderStatus::Cancelled => None,
        }
    }
}

impl std::fmt::Display for CustomerOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CustomerOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CustomerOrderStatus::Pending),
            "confirmed" => Ok(CustomerOrderStatus::Confirmed),
            "ready" => Ok(CustomerOrderStatus::Ready),
            "delivered" => Ok(CustomerOrderStatus::Delivered),
            "cancelled" => Ok(CustomerOrderStatus::Cancelled),
            _ => Err(format!("Invalid customer order status: {}", s)),
        }
    }
}

/// Internal production order lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductionOrderStatus {
    Draft,
    Requested,
    Approved,
    Scheduled,
    InProduction,
    QualityCheck,
    Ready,
    Completed,
    Delivered,
    Cancelled,
}

impl ProductionOrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductionOrderStatus::Draft => "draft",
            ProductionOrderStatus::Requested => "requested",
            ProductionOrderStatus::Approved => "approved",
            ProductionOrderStatus::Scheduled => "scheduled",
            ProductionOrderStatus::InProduction => "in_production",
            ProductionOrderStatus::QualityCheck => "quality_check",
            ProductionOrderStatus::Ready => "ready",
            ProductionOrderStatus::Completed => "completed",
            ProductionOrderStatus::Delivered => "delivered",
            ProductionOrderStatus::Cancelled => "cancelled",
        }
    }

    /// Next step along the happy path, if any
    ///
    /// `approved → scheduled` IS an edge of the graph, but scheduling is a
    /// distinct operation gated on production details — the coordinator
    /// refuses to advance past `approved` without them.
    pub fn next(self) -> Option<Self> {
        match self {
            ProductionOrderStatus::Draft => Some(ProductionOrderStatus::Requested),
            ProductionOrderStatus::Requested => Some(ProductionOrderStatus::Approved),
            ProductionOrderStatus::Approved => Some(ProductionOrderStatus::Scheduled),
            ProductionOrderStatus::Scheduled => Some(ProductionOrderStatus::InProduction),
            ProductionOrderStatus::InProduction => Some(ProductionOrderStatus::QualityCheck),
            ProductionOrderStatus::QualityCheck => Some(ProductionOrderStatus::Ready),
            ProductionOrderStatus::Ready => Some(ProductionOrderStatus::Completed),
            ProductionOrderStatus::Completed => Some(ProductionOrderStatus::Delivered),
            ProductionOrderStatus::Delivered | ProductionOrderStatus::Cancelled => None,
        }
    }
}

impl std::fmt::Display for ProductionOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProductionOrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProductionOrderStatus::Draft),
            "requested" => Ok(ProductionOrderStatus::Requested),
            "approved" => Ok(ProductionOrderStatus::Approved),
            "scheduled" => Ok(ProductionOrderStatus::Scheduled),
            "in_production" => Ok(ProductionOrderStatus::InProduction),
            "quality_check" => Ok(ProductionOrderStatus::QualityCheck),
            "ready" => Ok(ProductionOrderStatus::Ready),
            "completed" => Ok(ProductionOrderStatus::Completed),
            "delivered" => Ok(ProductionOrderStatus::Delivered),
            "cancelled" => Ok(ProductionOrderStatus::Cancelled),
            _ => Err(format!("Invalid production order status: {}", s)),
        }
    }
}

/// Customer order graph: linear happy path, cancellable until delivered
static CUSTOMER_GRAPH: LazyLock<TransitionGraph<CustomerOrderStatus>> = LazyLock::new(|| {
    use CustomerOrderStatus::*;
    TransitionGraph::new([
        (Pending, vec![Confirmed, Cancelled]),
        (Confirmed, vec![Ready, Cancelled]),
        (Ready, vec![Delivered, Cancelled]),
        (Delivered, vec![]),
        (Cancelled, vec![]),
    ])
});

/// Production order graph: strictly linear happy path, cancellable from
/// every non-terminal state
static PRODUCTION_GRAPH: LazyLock<TransitionGraph<ProductionOrderStatus>> = LazyLock::new(|| {
    use ProductionOrderStatus::*;
    TransitionGraph::new([
        (Draft, vec![Requested, Cancelled]),
        (Requested, vec![Approved, Cancelled]),
        (Approved, vec![Scheduled, Cancelled]),
        (Scheduled, vec![InProduction, Cancelled]),
        (InProduction, vec![QualityCheck, Cancelled]),
        (QualityCheck, vec![Ready, Cancelled]),
        (Ready, vec![Completed, Cancelled]),
        (Completed, vec![Delivered, Cancelled]),
        (Delivered, vec![]),
        (Cancelled, vec![]),
    ])
});

/// Status a freshly created order starts in
pub fn initial_status(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::CustomerOrder => CustomerOrderStatus::Pending.as_str(),
        ResourceKind::InternalOrder => ProductionOrderStatus::Draft.as_str(),
    }
}

/// Kind-agnostic transition check over status names
///
/// Parses the per-kind vocabulary, applies the shared legality engine, and
/// returns the normalized target status. Any target the current state
/// cannot reach is an illegal transition carrying the legal next statuses
/// for UI messaging; that includes targets outside the kind's vocabulary
/// entirely. Only an unparseable *current* state is an unknown-status
/// error, since no allowed-list exists for it.
pub fn check_transition(
    kind: ResourceKind,
    current: &str,
    target: &str,
) -> Result<String, LifecycleError> {
    match kind {
        ResourceKind::CustomerOrder => {
            let from: CustomerOrderStatus = parse_status(kind, current)?;
            match target.parse::<CustomerOrderStatus>() {
                Ok(to) if CUSTOMER_GRAPH.can_transition(from, to) => {
                    Ok(to.as_str().to_string())
                }
                _ => Err(LifecycleError::InvalidTransition {
                    from: from.as_str().to_string(),
                    to: target.to_string(),
                    allowed: status_names(CUSTOMER_GRAPH.allowed(from)),
                }),
            }
        }
        ResourceKind::InternalOrder => {
            let from: ProductionOrderStatus = parse_status(kind, current)?;
            match target.parse::<ProductionOrderStatus>() {
                Ok(to) if PRODUCTION_GRAPH.can_transition(from, to) => {
                    Ok(to.as_str().to_string())
                }
                _ => Err(LifecycleError::InvalidTransition {
                    from: from.as_str().to_string(),
                    to: target.to_string(),
                    allowed: status_names(PRODUCTION_GRAPH.allowed(from)),
                }),
            }
        }
    }
}

/// Kind-agnostic happy-path successor of a status name
pub fn next_status(kind: ResourceKind, current: &str) -> Result<Option<String>, LifecycleError> {
    match kind {
        ResourceKind::CustomerOrder => {
            let status: CustomerOrderStatus = parse_status(kind, current)?;
            Ok(status.next().map(|next| next.as_str().to_string()))
        }
        ResourceKind::InternalOrder => {
            let status: ProductionOrderStatus = parse_status(kind, current)?;
            Ok(status.next().map(|next| next.as_str().to_string()))
        }
    }
}

fn parse_status<S: std::str::FromStr>(kind: ResourceKind, value: &str) -> Result<S, LifecycleError> {
    value.parse().map_err(|_| LifecycleError::UnknownStatus {
        kind,
        value: value.to_string(),
    })
}

fn status_names<S: Copy + std::fmt::Display>(statuses: &[S]) -> Vec<String> {
    statuses.iter().map(|status| status.to_string()).collect()
}
