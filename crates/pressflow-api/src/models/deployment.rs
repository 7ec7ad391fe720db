//! Deployment model

use serde::{Deserialize, Serialize};

use super::ResourceStatus;

/// A deployment of an environment
///
/// Deployments are fire-and-forget from the CLI's perspective: the
/// platform runs them asynchronously and the client does not poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// Deployment ID
    pub id: u64,

    /// Human-readable label (usually the artifact reference)
    pub name: String,

    /// Deployment status
    pub status: ResourceStatus,
}
