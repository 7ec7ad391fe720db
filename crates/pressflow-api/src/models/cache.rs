//! Cache cluster model

use serde::{Deserialize, Serialize};

use super::{Network, ResourceStatus};

/// A managed cache cluster
///
/// Cache clusters always live on a private subnet, so their network
/// needs a NAT gateway for the platform to manage them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheCluster {
    /// Cluster ID
    pub id: u64,

    /// Cluster name
    pub name: String,

    /// Region the cluster lives in
    pub region: String,

    /// Cluster status
    pub status: ResourceStatus,

    /// Cache engine, "redis" or "valkey"
    pub engine: String,

    /// Instance type, e.g. "cache.t3.micro"
    #[serde(rename = "type")]
    pub cache_type: String,

    /// Connection endpoint, once the cluster is available
    pub endpoint: Option<String>,

    /// The network the cluster was provisioned into
    pub network: Network,
}
