//! SSL certificate model

use serde::{Deserialize, Serialize};

use super::ResourceStatus;

/// An SSL certificate issued for one or more domains
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate ID
    pub id: u64,

    /// Primary domain the certificate was requested for
    pub name: String,

    /// All domains covered by the certificate
    #[serde(default)]
    pub domains: Vec<String>,

    /// Region the certificate was issued in
    pub region: String,

    /// Certificate status
    pub status: ResourceStatus,
}
