//! Requirements: units of work that each produce one value
//!
//! A requirement knows how to obtain one named value — a resource, a
//! string, a number, a flag — from, in priority order: a value the
//! caller pre-seeded, explicit command input, or an interactive prompt.
//! Resource definitions list their requirements in fulfillment order;
//! a requirement reading a key that an earlier requirement should have
//! produced fails with a dependency error, never silently proceeds.

mod access;
mod cache;
mod credentials;
mod resource;
mod storage;
mod text;
mod visibility;

pub use access::{DatabaseAccessRequirement, DatabaseNameRequirement};
pub use cache::{CACHE_ENGINES, CacheEngineRequirement, CacheTypeRequirement};
pub use credentials::AwsCredentialsRequirement;
pub use resource::{
    ActiveTeamRequirement, CurrentProjectRequirement, DatabaseServerRequirement,
    NetworkRequirement, ParentDatabaseServerRequirement, ProviderRequirement, RegionRequirement,
    ServerTypeRequirement,
};
pub use storage::StorageRequirement;
pub use text::{PresetListRequirement, SlugRequirement, TextRequirement, slugify};
pub use visibility::{NatGatewayConsentRequirement, PrivateFlagRequirement};

use async_trait::async_trait;
use pressflow_api::models::{DatabaseServer, Network, Team};
use pressflow_api::{AwsCredentials, Resource};

use crate::context::Context;
use crate::error::{CoreError, Result};

/// A value produced by fulfilling a requirement
#[derive(Debug, Clone)]
pub enum RequirementValue {
    /// The requirement deliberately produced nothing (e.g. storage for
    /// a serverless database server)
    None,
    Bool(bool),
    Integer(u64),
    Text(String),
    List(Vec<String>),
    Credentials(AwsCredentials),
    Resource(Resource),
}

impl RequirementValue {
    pub fn is_none(&self) -> bool {
        matches!(self, RequirementValue::None)
    }
}

/// The accumulated name → value results of a requirement chain
///
/// Insertion-ordered; requirements receive it read-only, so later
/// requirements can read earlier results but never rewrite them.
#[derive(Debug, Clone, Default)]
pub struct Fulfilled {
    values: Vec<(String, RequirementValue)>,
}

impl Fulfilled {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value up front, e.g. to force `private = false`
    pub fn with(mut self, name: &str, value: RequirementValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: RequirementValue) {
        if let Some(entry) = self.values.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.values.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&RequirementValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Read a dependency fulfilled earlier in the chain
    pub fn require(&self, name: &str) -> Result<&RequirementValue> {
        self.get(name)
            .ok_or_else(|| CoreError::RequirementDependency(name.to_string()))
    }

    pub fn team(&self, name: &str) -> Result<&Team> {
        match self.require(name)? {
            RequirementValue::Resource(Resource::Team(team)) => Ok(team),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn network(&self, name: &str) -> Result<&Network> {
        match self.require(name)? {
            RequirementValue::Resource(Resource::Network(network)) => Ok(network),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn database_server(&self, name: &str) -> Result<&DatabaseServer> {
        match self.require(name)? {
            RequirementValue::Resource(Resource::DatabaseServer(server)) => Ok(server),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn provider(&self, name: &str) -> Result<&pressflow_api::models::CloudProvider> {
        match self.require(name)? {
            RequirementValue::Resource(Resource::CloudProvider(provider)) => Ok(provider),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn project(&self, name: &str) -> Result<&pressflow_api::models::Project> {
        match self.require(name)? {
            RequirementValue::Resource(Resource::Project(project)) => Ok(project),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        match self.require(name)? {
            RequirementValue::Text(value) => Ok(value),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        match self.require(name)? {
            RequirementValue::Bool(value) => Ok(*value),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    /// Integer value, or `None` when the requirement short-circuited
    pub fn integer(&self, name: &str) -> Result<Option<u64>> {
        match self.require(name)? {
            RequirementValue::Integer(value) => Ok(Some(*value)),
            RequirementValue::None => Ok(None),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn list(&self, name: &str) -> Result<&[String]> {
        match self.require(name)? {
            RequirementValue::List(values) => Ok(values),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }

    pub fn credentials(&self, name: &str) -> Result<&AwsCredentials> {
        match self.require(name)? {
            RequirementValue::Credentials(credentials) => Ok(credentials),
            _ => Err(CoreError::RequirementDependency(name.to_string())),
        }
    }
}

/// A single-responsibility unit producing one named value
#[async_trait]
pub trait Requirement: Send + Sync {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled)
        -> Result<RequirementValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_names_the_missing_dependency() {
        let fulfilled = Fulfilled::new();
        let error = fulfilled.require("network").unwrap_err();
        assert!(matches!(error, CoreError::RequirementDependency(name) if name == "network"));
    }

    #[test]
    fn test_insert_preserves_order_and_replaces() {
        let mut fulfilled = Fulfilled::new();
        fulfilled.insert("name", RequirementValue::Text("a".into()));
        fulfilled.insert("storage", RequirementValue::Integer(50));
        fulfilled.insert("name", RequirementValue::Text("b".into()));

        assert_eq!(fulfilled.text("name").unwrap(), "b");
        assert_eq!(fulfilled.integer("storage").unwrap(), Some(50));
        assert_eq!(fulfilled.values.len(), 2);
    }

    #[test]
    fn test_typed_getter_rejects_mismatched_value() {
        let fulfilled = Fulfilled::new().with("network", RequirementValue::Text("oops".into()));
        assert!(matches!(
            fulfilled.network("network"),
            Err(CoreError::RequirementDependency(_))
        ));
    }

    #[test]
    fn test_integer_getter_allows_short_circuited_none() {
        let fulfilled = Fulfilled::new().with("storage", RequirementValue::None);
        assert_eq!(fulfilled.integer("storage").unwrap(), None);
    }
}
