//! Database server, database and database user models

use serde::{Deserialize, Serialize};

use super::{Network, ResourceStatus};

/// A managed database server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseServer {
    /// Server ID
    pub id: u64,

    /// Server name
    pub name: String,

    /// Region the server lives in
    pub region: String,

    /// Server status
    pub status: ResourceStatus,

    /// Instance type, e.g. "db.t3.micro", or the serverless class
    #[serde(rename = "type")]
    pub server_type: String,

    /// Allocated storage in GB. Absent for serverless servers.
    pub storage: Option<u32>,

    /// Connection endpoint, once the server is available
    pub endpoint: Option<String>,

    /// Whether the server is reachable from outside its network
    pub public: bool,

    /// Whether the server is locked against deletion
    pub locked: bool,

    /// The network the server was provisioned into
    pub network: Network,
}

impl DatabaseServer {
    /// Serverless instance classes have no fixed storage allocation
    pub fn is_serverless(&self) -> bool {
        self.server_type.starts_with("aurora")
    }
}

/// A database on a database server
///
/// Databases on private servers cannot be enumerated through the API,
/// so the client constructs them in memory with an ID of 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Database ID. 0 for databases the API never assigned an ID to.
    pub id: u64,

    /// Database name
    pub name: String,
}

impl Database {
    /// A database known only by name, e.g. on a private server
    pub fn unmanaged(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

/// A user account on a database server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseUser {
    /// User ID
    pub id: u64,

    /// Username
    pub username: String,

    /// Databases the user may access. Empty means all databases.
    #[serde(default)]
    pub databases: Vec<String>,

    /// Generated password, present only in the creation response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CloudProvider;

    fn sample_network() -> Network {
        Network {
            id: 7,
            name: "main".to_string(),
            region: "eu-west-1".to_string(),
            status: ResourceStatus::Available,
            has_nat_gateway: false,
            provider: CloudProvider {
                id: 3,
                name: "aws-prod".to_string(),
                team_id: 1,
            },
        }
    }

    #[test]
    fn test_serverless_detection() {
        let mut server = DatabaseServer {
            id: 42,
            name: "primary".to_string(),
            region: "eu-west-1".to_string(),
            status: ResourceStatus::Available,
            server_type: "db.t3.micro".to_string(),
            storage: Some(50),
            endpoint: None,
            public: true,
            locked: false,
            network: sample_network(),
        };
        assert!(!server.is_serverless());

        server.server_type = "aurora-mysql".to_string();
        assert!(server.is_serverless());
    }

    #[test]
    fn test_unmanaged_database_has_zero_id() {
        let database = Database::unmanaged("wordpress");
        assert_eq!(database.id, 0);
        assert_eq!(database.name, "wordpress");
    }

    #[test]
    fn test_database_user_password_only_on_creation() {
        let payload = serde_json::json!({
            "id": 9,
            "username": "reporting",
            "databases": ["wordpress"],
        });
        let user: DatabaseUser = serde_json::from_value(payload).unwrap();
        assert!(user.password.is_none());
        assert_eq!(user.databases, vec!["wordpress"]);
    }
}
