//! Network model

use serde::{Deserialize, Serialize};

use super::{CloudProvider, ResourceStatus};

/// A network (VPC) provisioned inside a cloud provider account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Network ID
    pub id: u64,

    /// Network name
    pub name: String,

    /// Region the network lives in
    pub region: String,

    /// Network status
    pub status: ResourceStatus,

    /// Whether the network has a NAT gateway attached
    pub has_nat_gateway: bool,

    /// The cloud provider account the network belongs to
    pub provider: CloudProvider,
}

impl Network {
    /// Region-qualified display label, e.g. "main (eu-west-1)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_requires_hydrated_provider() {
        // parent reference missing from the payload is a hard error
        let payload = serde_json::json!({
            "id": 7,
            "name": "main",
            "region": "eu-west-1",
            "status": "available",
            "has_nat_gateway": false,
        });
        assert!(serde_json::from_value::<Network>(payload).is_err());
    }

    #[test]
    fn test_network_deserializes_from_payload() {
        let payload = serde_json::json!({
            "id": 7,
            "name": "main",
            "region": "eu-west-1",
            "status": "available",
            "has_nat_gateway": true,
            "provider": { "id": 3, "name": "aws-prod", "team_id": 1 },
        });
        let network: Network = serde_json::from_value(payload).unwrap();
        assert_eq!(network.provider.id, 3);
        assert_eq!(network.label(), "main (eu-west-1)");
    }
}
