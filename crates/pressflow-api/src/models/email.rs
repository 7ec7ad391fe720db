//! Email identity model

use serde::{Deserialize, Serialize};

use super::ResourceStatus;

/// An email identity (address or domain) verified for sending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailIdentity {
    /// Identity ID
    pub id: u64,

    /// The address or domain
    pub name: String,

    /// Identity status
    pub status: ResourceStatus,

    /// Whether the platform manages the identity's DNS validation
    pub managed: bool,
}
