//! Resource models for the Pressflow platform
//!
//! Every model is deserialized from an API response payload and is
//! immutable after construction. Parent references are always fully
//! hydrated by the API: a database server carries its network, a
//! network carries its cloud provider. A missing required key is a
//! deserialization error, never a partially constructed model.

mod bastion;
mod cache;
mod certificate;
mod database;
mod deployment;
mod dns;
mod email;
mod environment;
mod network;
mod project;
mod provider;
mod team;
mod user;

// Re-exports
pub use bastion::*;
pub use cache::*;
pub use certificate::*;
pub use database::*;
pub use deployment::*;
pub use dns::*;
pub use email::*;
pub use environment::*;
pub use network::*;
pub use project::*;
pub use provider::*;
pub use team::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Lifecycle status reported by the platform for managed resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    /// Resource is ready for use
    Available,
    /// Resource is being created
    Creating,
    /// Resource is being deleted
    Deleting,
    /// Provisioning failed
    Failed,
    /// Any status this client version does not know about
    #[serde(other)]
    Unknown,
}

impl ResourceStatus {
    pub fn is_available(self) -> bool {
        matches!(self, ResourceStatus::Available)
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Available => write!(f, "available"),
            ResourceStatus::Creating => write!(f, "creating"),
            ResourceStatus::Deleting => write!(f, "deleting"),
            ResourceStatus::Failed => write!(f, "failed"),
            ResourceStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserializes_unknown_values() {
        let status: ResourceStatus = serde_json::from_str("\"rebooting\"").unwrap();
        assert_eq!(status, ResourceStatus::Unknown);
    }

    #[test]
    fn test_status_is_available() {
        let status: ResourceStatus = serde_json::from_str("\"available\"").unwrap();
        assert!(status.is_available());
        assert!(!ResourceStatus::Creating.is_available());
    }
}
