//! Bastion host model

use serde::{Deserialize, Serialize};

use super::ResourceStatus;

/// A bastion host giving SSH access into a private network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BastionHost {
    /// Bastion host ID
    pub id: u64,

    /// Host name
    pub name: String,

    /// Host status
    pub status: ResourceStatus,

    /// SSH endpoint, once the host is available
    pub endpoint: Option<String>,
}
