//! DNS zone and record models

use serde::{Deserialize, Serialize};

use super::ResourceStatus;

/// A DNS zone managed by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsZone {
    /// Zone ID
    pub id: u64,

    /// Domain name of the zone
    pub name: String,

    /// Zone status
    pub status: ResourceStatus,
}

/// A record in a DNS zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record ID
    pub id: u64,

    /// Record name
    pub name: String,

    /// Record type (A, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Record value
    pub value: String,
}
