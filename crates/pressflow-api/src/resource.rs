//! Tagged union over the resource models
//!
//! The requirement machinery passes resources around without knowing
//! their concrete type; `Resource` is the carrier and `ResourceKind`
//! the tag used to dispatch to the matching resource definition.

use crate::models::{
    BastionHost, CacheCluster, Certificate, CloudProvider, Database, DatabaseServer, DatabaseUser,
    Deployment, DnsRecord, DnsZone, EmailIdentity, Environment, Network, Project, Secret, Team,
    User,
};

/// Identifies a resource type for definition dispatch and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Team,
    CloudProvider,
    Project,
    Environment,
    Network,
    DatabaseServer,
    Database,
    DatabaseUser,
    CacheCluster,
    Certificate,
    DnsZone,
    DnsRecord,
    EmailIdentity,
    Secret,
    BastionHost,
    Deployment,
    User,
}

impl ResourceKind {
    /// Human-readable singular name, used in prompts and errors
    pub fn describe(self) -> &'static str {
        match self {
            ResourceKind::Team => "team",
            ResourceKind::CloudProvider => "cloud provider",
            ResourceKind::Project => "project",
            ResourceKind::Environment => "environment",
            ResourceKind::Network => "network",
            ResourceKind::DatabaseServer => "database server",
            ResourceKind::Database => "database",
            ResourceKind::DatabaseUser => "database user",
            ResourceKind::CacheCluster => "cache cluster",
            ResourceKind::Certificate => "certificate",
            ResourceKind::DnsZone => "DNS zone",
            ResourceKind::DnsRecord => "DNS record",
            ResourceKind::EmailIdentity => "email identity",
            ResourceKind::Secret => "secret",
            ResourceKind::BastionHost => "bastion host",
            ResourceKind::Deployment => "deployment",
            ResourceKind::User => "user",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Any resource model, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Team(Team),
    CloudProvider(CloudProvider),
    Project(Project),
    Environment(Environment),
    Network(Network),
    DatabaseServer(DatabaseServer),
    Database(Database),
    DatabaseUser(DatabaseUser),
    CacheCluster(CacheCluster),
    Certificate(Certificate),
    DnsZone(DnsZone),
    DnsRecord(DnsRecord),
    EmailIdentity(EmailIdentity),
    Secret(Secret),
    BastionHost(BastionHost),
    Deployment(Deployment),
    User(User),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Team(_) => ResourceKind::Team,
            Resource::CloudProvider(_) => ResourceKind::CloudProvider,
            Resource::Project(_) => ResourceKind::Project,
            Resource::Environment(_) => ResourceKind::Environment,
            Resource::Network(_) => ResourceKind::Network,
            Resource::DatabaseServer(_) => ResourceKind::DatabaseServer,
            Resource::Database(_) => ResourceKind::Database,
            Resource::DatabaseUser(_) => ResourceKind::DatabaseUser,
            Resource::CacheCluster(_) => ResourceKind::CacheCluster,
            Resource::Certificate(_) => ResourceKind::Certificate,
            Resource::DnsZone(_) => ResourceKind::DnsZone,
            Resource::DnsRecord(_) => ResourceKind::DnsRecord,
            Resource::EmailIdentity(_) => ResourceKind::EmailIdentity,
            Resource::Secret(_) => ResourceKind::Secret,
            Resource::BastionHost(_) => ResourceKind::BastionHost,
            Resource::Deployment(_) => ResourceKind::Deployment,
            Resource::User(_) => ResourceKind::User,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Resource::Team(m) => m.id,
            Resource::CloudProvider(m) => m.id,
            Resource::Project(m) => m.id,
            Resource::Environment(m) => m.id,
            Resource::Network(m) => m.id,
            Resource::DatabaseServer(m) => m.id,
            Resource::Database(m) => m.id,
            Resource::DatabaseUser(m) => m.id,
            Resource::CacheCluster(m) => m.id,
            Resource::Certificate(m) => m.id,
            Resource::DnsZone(m) => m.id,
            Resource::DnsRecord(m) => m.id,
            Resource::EmailIdentity(m) => m.id,
            Resource::Secret(m) => m.id,
            Resource::BastionHost(m) => m.id,
            Resource::Deployment(m) => m.id,
            Resource::User(m) => m.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Resource::Team(m) => &m.name,
            Resource::CloudProvider(m) => &m.name,
            Resource::Project(m) => &m.name,
            Resource::Environment(m) => &m.name,
            Resource::Network(m) => &m.name,
            Resource::DatabaseServer(m) => &m.name,
            Resource::Database(m) => &m.name,
            Resource::DatabaseUser(m) => &m.username,
            Resource::CacheCluster(m) => &m.name,
            Resource::Certificate(m) => &m.name,
            Resource::DnsZone(m) => &m.name,
            Resource::DnsRecord(m) => &m.name,
            Resource::EmailIdentity(m) => &m.name,
            Resource::Secret(m) => &m.name,
            Resource::BastionHost(m) => &m.name,
            Resource::Deployment(m) => &m.name,
            Resource::User(m) => &m.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_and_accessors() {
        let resource = Resource::Team(Team {
            id: 12,
            name: "acme".to_string(),
            owner_id: 1,
        });
        assert_eq!(resource.kind(), ResourceKind::Team);
        assert_eq!(resource.id(), 12);
        assert_eq!(resource.name(), "acme");
    }

    #[test]
    fn test_kind_describe() {
        assert_eq!(ResourceKind::DatabaseServer.describe(), "database server");
        assert_eq!(ResourceKind::DnsZone.to_string(), "DNS zone");
    }
}
