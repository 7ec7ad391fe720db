//! Platform API client
//!
//! `PlatformApi` is the seam between the CLI and the hosting platform:
//! one method per remote operation, all returning deserialized models.
//! `HttpPlatformApi` is the production implementation over reqwest;
//! tests implement the trait in memory.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::{
    CacheCluster, Certificate, CloudProvider, Database, DatabaseServer, DatabaseUser, DnsZone,
    EmailIdentity, Environment, Network, Project, Team, User,
};

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.pressflow.cloud/v1";

/// AWS credentials used to connect a cloud provider account
#[derive(Clone)]
pub struct AwsCredentials {
    /// Access key ID
    pub access_key_id: String,

    /// Secret access key
    pub secret_access_key: String,
}

// The secret key must never end up in logs or error output.
impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"********")
            .finish()
    }
}

/// An instance type offered by the platform, with its price tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOption {
    /// Type code sent back to the API, e.g. "db.t3.micro"
    pub code: String,

    /// Human-readable description
    pub label: String,

    /// Formatted monthly price, when the platform quotes one
    pub price: Option<String>,
}

impl TypeOption {
    /// Label shown in interactive choice lists
    pub fn display(&self) -> String {
        match &self.price {
            Some(price) => format!("{} — {} ({})", self.code, self.label, price),
            None => format!("{} — {}", self.code, self.label),
        }
    }
}

/// The consumed interface of the Pressflow platform
#[async_trait]
pub trait PlatformApi: Send + Sync {
    async fn get_user(&self) -> Result<User>;

    async fn get_teams(&self) -> Result<Vec<Team>>;
    async fn get_team(&self, id: u64) -> Result<Team>;
    async fn create_team(&self, name: &str) -> Result<Team>;

    async fn get_providers(&self, team: &Team) -> Result<Vec<CloudProvider>>;
    async fn create_provider(
        &self,
        team: &Team,
        name: &str,
        credentials: &AwsCredentials,
    ) -> Result<CloudProvider>;
    async fn get_regions(&self, provider: &CloudProvider) -> Result<Vec<String>>;

    async fn get_projects(&self, team: &Team) -> Result<Vec<Project>>;
    async fn create_project(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
        environments: &[String],
    ) -> Result<Project>;

    async fn get_environments(&self, project: &Project) -> Result<Vec<Environment>>;
    async fn create_environment(&self, project: &Project, name: &str) -> Result<Environment>;

    async fn get_networks(&self, team: &Team) -> Result<Vec<Network>>;
    async fn create_network(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
    ) -> Result<Network>;

    async fn get_database_servers(&self, team: &Team) -> Result<Vec<DatabaseServer>>;
    async fn get_database_server_types(&self, provider: &CloudProvider)
        -> Result<Vec<TypeOption>>;
    async fn create_database_server(
        &self,
        network: &Network,
        name: &str,
        server_type: &str,
        storage: Option<u32>,
        public: bool,
    ) -> Result<DatabaseServer>;

    async fn get_databases(&self, server: &DatabaseServer) -> Result<Vec<Database>>;
    async fn create_database(&self, server: &DatabaseServer, name: &str) -> Result<Database>;

    async fn get_database_users(&self, server: &DatabaseServer) -> Result<Vec<DatabaseUser>>;
    async fn create_database_user(
        &self,
        server: &DatabaseServer,
        username: &str,
        databases: &[String],
    ) -> Result<DatabaseUser>;

    async fn get_caches(&self, team: &Team) -> Result<Vec<CacheCluster>>;
    async fn get_cache_types(&self, provider: &CloudProvider) -> Result<Vec<TypeOption>>;
    async fn create_cache(
        &self,
        network: &Network,
        name: &str,
        engine: &str,
        cache_type: &str,
    ) -> Result<CacheCluster>;

    async fn get_certificates(&self, team: &Team) -> Result<Vec<Certificate>>;
    async fn get_dns_zones(&self, team: &Team) -> Result<Vec<DnsZone>>;
    async fn get_email_identities(&self, team: &Team) -> Result<Vec<EmailIdentity>>;
}

/// HTTP implementation of [`PlatformApi`]
pub struct HttpPlatformApi {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpPlatformApi {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::handle(response).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &serde_json::Value) -> Result<T> {
        debug!(path, "POST");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// Map the response status to the error taxonomy, or deserialize
    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["message"].as_str().unwrap_or("").to_string();

        Err(match status.as_u16() {
            401 => ApiError::AuthenticationRequired,
            402 => ApiError::PaymentRequired(message),
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(if message.is_empty() {
                "The requested resource does not exist".to_string()
            } else {
                message
            }),
            409 => ApiError::OperationInProgress,
            410 => ApiError::BeingDeleted,
            429 => ApiError::RateLimited,
            400 | 422 => ApiError::Validation(Self::collect_validation_errors(&body)),
            _ => ApiError::Unexpected {
                status: status.as_u16(),
                message,
            },
        })
    }

    /// Flatten the platform's `{"errors": {"field": ["msg", ...]}}` shape
    fn collect_validation_errors(body: &serde_json::Value) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(fields) = body["errors"].as_object() {
            for (field, messages) in fields {
                if let Some(messages) = messages.as_array() {
                    for message in messages.iter().filter_map(|m| m.as_str()) {
                        errors.push(format!("{}: {}", field, message));
                    }
                }
            }
        }

        if errors.is_empty()
            && let Some(message) = body["message"].as_str()
        {
            errors.push(message.to_string());
        }

        errors
    }
}

#[async_trait]
impl PlatformApi for HttpPlatformApi {
    async fn get_user(&self) -> Result<User> {
        self.get("/user").await
    }

    async fn get_teams(&self) -> Result<Vec<Team>> {
        self.get("/teams").await
    }

    async fn get_team(&self, id: u64) -> Result<Team> {
        self.get(&format!("/teams/{}", id)).await
    }

    async fn create_team(&self, name: &str) -> Result<Team> {
        self.post("/teams", &serde_json::json!({ "name": name })).await
    }

    async fn get_providers(&self, team: &Team) -> Result<Vec<CloudProvider>> {
        self.get(&format!("/teams/{}/providers", team.id)).await
    }

    async fn create_provider(
        &self,
        team: &Team,
        name: &str,
        credentials: &AwsCredentials,
    ) -> Result<CloudProvider> {
        self.post(
            &format!("/teams/{}/providers", team.id),
            &serde_json::json!({
                "name": name,
                "credentials": {
                    "key": credentials.access_key_id,
                    "secret": credentials.secret_access_key,
                },
            }),
        )
        .await
    }

    async fn get_regions(&self, provider: &CloudProvider) -> Result<Vec<String>> {
        self.get(&format!("/providers/{}/regions", provider.id)).await
    }

    async fn get_projects(&self, team: &Team) -> Result<Vec<Project>> {
        self.get(&format!("/teams/{}/projects", team.id)).await
    }

    async fn create_project(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
        environments: &[String],
    ) -> Result<Project> {
        self.post(
            &format!("/providers/{}/projects", provider.id),
            &serde_json::json!({
                "name": name,
                "region": region,
                "environments": environments,
            }),
        )
        .await
    }

    async fn get_environments(&self, project: &Project) -> Result<Vec<Environment>> {
        self.get(&format!("/projects/{}/environments", project.id)).await
    }

    async fn create_environment(&self, project: &Project, name: &str) -> Result<Environment> {
        self.post(
            &format!("/projects/{}/environments", project.id),
            &serde_json::json!({ "name": name }),
        )
        .await
    }

    async fn get_networks(&self, team: &Team) -> Result<Vec<Network>> {
        self.get(&format!("/teams/{}/networks", team.id)).await
    }

    async fn create_network(
        &self,
        provider: &CloudProvider,
        name: &str,
        region: &str,
    ) -> Result<Network> {
        self.post(
            &format!("/providers/{}/networks", provider.id),
            &serde_json::json!({ "name": name, "region": region }),
        )
        .await
    }

    async fn get_database_servers(&self, team: &Team) -> Result<Vec<DatabaseServer>> {
        self.get(&format!("/teams/{}/database-servers", team.id)).await
    }

    async fn get_database_server_types(
        &self,
        provider: &CloudProvider,
    ) -> Result<Vec<TypeOption>> {
        self.get(&format!("/providers/{}/database-server-types", provider.id))
            .await
    }

    async fn create_database_server(
        &self,
        network: &Network,
        name: &str,
        server_type: &str,
        storage: Option<u32>,
        public: bool,
    ) -> Result<DatabaseServer> {
        self.post(
            &format!("/networks/{}/database-servers", network.id),
            &serde_json::json!({
                "name": name,
                "type": server_type,
                "storage": storage,
                "public": public,
            }),
        )
        .await
    }

    async fn get_databases(&self, server: &DatabaseServer) -> Result<Vec<Database>> {
        self.get(&format!("/database-servers/{}/databases", server.id)).await
    }

    async fn create_database(&self, server: &DatabaseServer, name: &str) -> Result<Database> {
        self.post(
            &format!("/database-servers/{}/databases", server.id),
            &serde_json::json!({ "name": name }),
        )
        .await
    }

    async fn get_database_users(&self, server: &DatabaseServer) -> Result<Vec<DatabaseUser>> {
        self.get(&format!("/database-servers/{}/users", server.id)).await
    }

    async fn create_database_user(
        &self,
        server: &DatabaseServer,
        username: &str,
        databases: &[String],
    ) -> Result<DatabaseUser> {
        self.post(
            &format!("/database-servers/{}/users", server.id),
            &serde_json::json!({ "username": username, "databases": databases }),
        )
        .await
    }

    async fn get_caches(&self, team: &Team) -> Result<Vec<CacheCluster>> {
        self.get(&format!("/teams/{}/caches", team.id)).await
    }

    async fn get_cache_types(&self, provider: &CloudProvider) -> Result<Vec<TypeOption>> {
        self.get(&format!("/providers/{}/cache-types", provider.id)).await
    }

    async fn create_cache(
        &self,
        network: &Network,
        name: &str,
        engine: &str,
        cache_type: &str,
    ) -> Result<CacheCluster> {
        self.post(
            &format!("/networks/{}/caches", network.id),
            &serde_json::json!({ "name": name, "engine": engine, "type": cache_type }),
        )
        .await
    }

    async fn get_certificates(&self, team: &Team) -> Result<Vec<Certificate>> {
        self.get(&format!("/teams/{}/certificates", team.id)).await
    }

    async fn get_dns_zones(&self, team: &Team) -> Result<Vec<DnsZone>> {
        self.get(&format!("/teams/{}/dns-zones", team.id)).await
    }

    async fn get_email_identities(&self, team: &Team) -> Result<Vec<EmailIdentity>> {
        self.get(&format!("/teams/{}/email-identities", team.id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = AwsCredentials {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "super-secret".to_string(),
        };
        let output = format!("{:?}", credentials);
        assert!(output.contains("AKIAEXAMPLE"));
        assert!(!output.contains("super-secret"));
    }

    #[test]
    fn test_type_option_display_includes_price() {
        let option = TypeOption {
            code: "cache.t3.micro".to_string(),
            label: "2 vCPU, 0.5 GB".to_string(),
            price: Some("$12.50/month".to_string()),
        };
        assert_eq!(
            option.display(),
            "cache.t3.micro — 2 vCPU, 0.5 GB ($12.50/month)"
        );
    }

    #[test]
    fn test_collect_validation_errors_flattens_fields() {
        let body = serde_json::json!({
            "errors": {
                "name": ["The name has already been taken."],
                "region": ["The selected region is invalid."],
            }
        });
        let mut errors = HttpPlatformApi::collect_validation_errors(&body);
        errors.sort();
        assert_eq!(
            errors,
            vec![
                "name: The name has already been taken.".to_string(),
                "region: The selected region is invalid.".to_string(),
            ]
        );
    }

    #[test]
    fn test_collect_validation_errors_falls_back_to_message() {
        let body = serde_json::json!({ "message": "The given data was invalid." });
        assert_eq!(
            HttpPlatformApi::collect_validation_errors(&body),
            vec!["The given data was invalid.".to_string()]
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpPlatformApi::with_base_url("https://api.example.test/v1/", "token");
        assert_eq!(api.base_url, "https://api.example.test/v1");
    }
}
