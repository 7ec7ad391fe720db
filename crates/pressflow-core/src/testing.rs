//! In-memory platform fake and sample models for tests
//!
//! The fake records every create call it receives as a flat string so
//! tests can assert exactly which API mutations happened, and in what
//! order.

use std::sync::Mutex;

use async_trait::async_trait;
use pressflow_api::api::{AwsCredentials, PlatformApi, TypeOption};
use pressflow_api::error::Result;
use pressflow_api::models::{
    CacheCluster, Certificate, CloudProvider, Database, DatabaseServer, DatabaseUser, DnsZone,
    EmailIdentity, Environment, Network, Project, ResourceStatus, Team, User,
};

pub(crate) fn sample_team() -> Team {
    Team {
        id: 1,
        name: "acme".to_string(),
        owner_id: 10,
    }
}

pub(crate) fn sample_provider() -> CloudProvider {
    CloudProvider {
        id: 3,
        name: "aws-prod".to_string(),
        team_id: 1,
    }
}

pub(crate) fn sample_network(id: u64, name: &str, has_nat_gateway: bool) -> Network {
    Network {
        id,
        name: name.to_string(),
        region: "eu-west-1".to_string(),
        status: ResourceStatus::Available,
        has_nat_gateway,
        provider: sample_provider(),
    }
}

pub(crate) fn sample_server(id: u64, name: &str, public: bool) -> DatabaseServer {
    DatabaseServer {
        id,
        name: name.to_string(),
        region: "eu-west-1".to_string(),
        status: ResourceStatus::Available,
        server_type: "db.t3.micro".to_string(),
        storage: Some(50),
        endpoint: Some(format!("{}.db.pressflow.cloud", name)),
        public,
        locked: false,
        network: sample_network(7, "main", false),
    }
}

/// An in-memory [`PlatformApi`] with canned listings
pub(crate) struct FakePlatform {
    pub teams: Vec<Team>,
    pub providers: Vec<CloudProvider>,
    pub regions: Vec<String>,
    pub projects: Vec<Project>,
    pub environments: Vec<Environment>,
    pub networks: Vec<Network>,
    pub database_servers: Vec<DatabaseServer>,
    pub databases: Vec<Database>,
    pub server_types: Vec<TypeOption>,
    pub cache_types: Vec<TypeOption>,
    pub caches: Vec<CacheCluster>,
    /// Flat record of every create call, in order
    pub calls: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            teams: vec![sample_team()],
            providers: vec![sample_provider()],
            regions: vec!["eu-west-1".to_string(), "us-east-1".to_string()],
            projects: Vec::new(),
            environments: Vec::new(),
            networks: Vec::new(),
            database_servers: Vec::new(),
            databases: Vec::new(),
            server_types: vec![
                TypeOption {
                    code: "db.t3.micro".to_string(),
                    label: "2 vCPU, 1 GB".to_string(),
                    price: Some("$15/month".to_string()),
                },
                TypeOption {
                    code: "db.t3.small".to_string(),
                    label: "2 vCPU, 2 GB".to_string(),
                    price: Some("$30/month".to_string()),
                },
            ],
            cache_types: vec![TypeOption {
                code: "cache.t3.micro".to_string(),
                label: "2 vCPU, 0.5 GB".to_string(),
                price: Some("$12/month".to_string()),
            }],
            caches: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn creates(&self) -> Vec<String> {
        self.recorded_calls()
            .into_iter()
            .filter(|call| call.starts_with("create_"))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlatformApi for FakePlatform {
    async fn get_user(&self) -> Result<User> {
        Ok(User {
            id: 10,
            name: "Mallory Dev".to_string(),
            email: "dev@example.com".to_string(),
        })
    }

    async fn get_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }

    async fn get_team(&self, id: u64) -> Result<Team> {
        Ok(self
            .teams
            .iter()
            .find(|team| team.id == id)
            .cloned()
            .unwrap_or_else(sample_team))
    }

    async fn create_team(&self, name: &str) -> Result<Team> {
        self.record(format!("create_team name={}", name));
        Ok(Team {
            id: 99,
            name: name.to_string(),
            owner_id: 10,
        })
    }

    async fn get_providers(&self, _team: &Team) -> Result<Vec<CloudProvider>> {
        Ok(self.providers.clone())
    }

    async fn create_provider(
        &self,
        team: &Team,
        name: &str,
        _credentials: &AwsCredentials,
    ) -> Result<CloudProvider> {
        self.record(format!("create_provider team={} name={}", team.id, name));
        Ok(CloudProvider {
            id: 90,
            name: name.to_string(),
            team_id: team.id,
        })
    }

    async fn get_regions(&self, _provider: &CloudProvider) -> Result<Vec<String>> {
        Ok(self.regions.clone())
    }

    async fn get_projects(&self, _team: &Team) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    async fn create_project(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
        environments: &[String],
    ) -> Result<Project> {
        self.record(format!(
            "create_project provider={} name={} region={} environments={}",
            provider.id,
            name,
            region,
            environments.join(",")
        ));
        Ok(Project {
            id: 80,
            name: name.to_string(),
            region: region.to_string(),
            provider_id: provider.id,
        })
    }

    async fn get_environments(&self, _project: &Project) -> Result<Vec<Environment>> {
        Ok(self.environments.clone())
    }

    async fn create_environment(&self, project: &Project, name: &str) -> Result<Environment> {
        self.record(format!("create_environment project={} name={}", project.id, name));
        Ok(Environment {
            id: 70,
            name: name.to_string(),
            vanity_domain: None,
        })
    }

    async fn get_networks(&self, _team: &Team) -> Result<Vec<Network>> {
        Ok(self.networks.clone())
    }

    async fn create_network(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
    ) -> Result<Network> {
        self.record(format!(
            "create_network provider={} name={} region={}",
            provider.id, name, region
        ));
        Ok(Network {
            id: 60,
            name: name.to_string(),
            region: region.to_string(),
            status: ResourceStatus::Creating,
            has_nat_gateway: false,
            provider: provider.clone(),
        })
    }

    async fn get_database_servers(&self, _team: &Team) -> Result<Vec<DatabaseServer>> {
        Ok(self.database_servers.clone())
    }

    async fn get_database_server_types(
        &self,
        _provider: &CloudProvider,
    ) -> Result<Vec<TypeOption>> {
        Ok(self.server_types.clone())
    }

    async fn create_database_server(
        &self,
        network: &Network,
        name: &str,
        server_type: &str,
        storage: Option<u32>,
        public: bool,
    ) -> Result<DatabaseServer> {
        self.record(format!(
            "create_database_server network={} name={} type={} storage={:?} public={}",
            network.id, name, server_type, storage, public
        ));
        Ok(DatabaseServer {
            id: 50,
            name: name.to_string(),
            region: network.region.clone(),
            status: ResourceStatus::Creating,
            server_type: server_type.to_string(),
            storage,
            endpoint: None,
            public,
            locked: false,
            network: network.clone(),
        })
    }

    async fn get_databases(&self, _server: &DatabaseServer) -> Result<Vec<Database>> {
        Ok(self.databases.clone())
    }

    async fn create_database(&self, server: &DatabaseServer, name: &str) -> Result<Database> {
        self.record(format!("create_database server={} name={}", server.id, name));
        Ok(Database {
            id: 40,
            name: name.to_string(),
        })
    }

    async fn get_database_users(&self, _server: &DatabaseServer) -> Result<Vec<DatabaseUser>> {
        Ok(Vec::new())
    }

    async fn create_database_user(
        &self,
        server: &DatabaseServer,
        username: &str,
        databases: &[String],
    ) -> Result<DatabaseUser> {
        self.record(format!(
            "create_database_user server={} username={} databases={}",
            server.id,
            username,
            databases.join(",")
        ));
        Ok(DatabaseUser {
            id: 30,
            username: username.to_string(),
            databases: databases.to_vec(),
            password: Some("generated-password".to_string()),
        })
    }

    async fn get_caches(&self, _team: &Team) -> Result<Vec<CacheCluster>> {
        Ok(self.caches.clone())
    }

    async fn get_cache_types(&self, _provider: &CloudProvider) -> Result<Vec<TypeOption>> {
        Ok(self.cache_types.clone())
    }

    async fn create_cache(
        &self,
        network: &Network,
        name: &str,
        engine: &str,
        cache_type: &str,
    ) -> Result<CacheCluster> {
        self.record(format!(
            "create_cache network={} name={} engine={} type={}",
            network.id, name, engine, cache_type
        ));
        Ok(CacheCluster {
            id: 20,
            name: name.to_string(),
            region: network.region.clone(),
            status: ResourceStatus::Creating,
            engine: engine.to_string(),
            cache_type: cache_type.to_string(),
            endpoint: None,
            network: network.clone(),
        })
    }

    async fn get_certificates(&self, _team: &Team) -> Result<Vec<Certificate>> {
        Ok(Vec::new())
    }

    async fn get_dns_zones(&self, _team: &Team) -> Result<Vec<DnsZone>> {
        Ok(Vec::new())
    }

    async fn get_email_identities(&self, _team: &Team) -> Result<Vec<EmailIdentity>> {
        Ok(Vec::new())
    }
}
