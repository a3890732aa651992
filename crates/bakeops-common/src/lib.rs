//! BakeOps Common - Shared types and utilities
//!
//! This crate provides the foundational types used across all BakeOps
//! components:
//! - Error codes for API responses
//! - The `ResourceKind` enum distinguishing lockable entity families
//! - Utility functions (identifier validation, time helpers)

pub mod error;
pub mod utils;

// Re-exports for convenience
pub use error::ErrorCode;
pub use utils::{is_valid_identifier, now_millis};

use serde::{Deserialize, Serialize};

/// Entity families that can be edit-locked and lifecycle-managed.
///
/// Locks are keyed per `(kind, id)`, so resource identifiers never collide
/// across kinds even when the underlying tables reuse id sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// Customer-facing fulfillment orders
    CustomerOrder,
    /// Internal production/manufacturing orders
    InternalOrder,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::CustomerOrder => "customer-order",
            ResourceKind::InternalOrder => "internal-order",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer-order" => Ok(ResourceKind::CustomerOrder),
            "internal-order" => Ok(ResourceKind::InternalOrder),
            _ => Err(format!("Invalid resource kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_round_trip() {
        assert_eq!(ResourceKind::CustomerOrder.as_str(), "customer-order");
        assert_eq!(ResourceKind::InternalOrder.as_str(), "internal-order");
        assert_eq!(
            "customer-order".parse::<ResourceKind>().unwrap(),
            ResourceKind::CustomerOrder
        );
        assert_eq!(
            "internal-order".parse::<ResourceKind>().unwrap(),
            ResourceKind::InternalOrder
        );
        assert!("recipe".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_resource_kind_serde() {
        let json = serde_json::to_string(&ResourceKind::InternalOrder).unwrap();
        assert_eq!(json, "\"internal-order\"");
        let kind: ResourceKind = serde_json::from_str("\"customer-order\"").unwrap();
        assert_eq!(kind, ResourceKind::CustomerOrder);
    }
}
