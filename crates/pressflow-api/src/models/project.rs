//! Project model

use serde::{Deserialize, Serialize};

/// A project — one WordPress site with its environments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: u64,

    /// Project name
    pub name: String,

    /// Region the project deploys to
    pub region: String,

    /// ID of the cloud provider the project deploys through
    pub provider_id: u64,
}
