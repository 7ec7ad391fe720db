//! Resource definitions
//!
//! Per-resource-type logic, split into two independent capabilities: a
//! definition may support looking up existing instances
//! ([`Resolvable`]), creating new ones ([`Provisionable`]), or both.
//! Dispatch from a [`ResourceKind`] tag to the matching definition is a
//! plain match — every supported kind is visible in one place.

mod cache;
mod database;
mod network;
mod project;
mod provider;
mod team;

pub use cache::CacheClusterDefinition;
pub use database::{DatabaseDefinition, DatabaseServerDefinition, DatabaseUserDefinition};
pub use network::NetworkDefinition;
pub use project::{DEFAULT_ENVIRONMENTS, EnvironmentDefinition, ProjectDefinition};
pub use provider::CloudProviderDefinition;
pub use team::TeamDefinition;

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::requirement::{Fulfilled, Requirement};

/// Looking up an existing resource instance
#[async_trait]
pub trait Resolvable: Send + Sync {
    /// Resolve one instance, disambiguating by `identifier` (numeric ID
    /// preferred over name) or by interactive choice
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource>;
}

/// Creating a new resource instance
#[async_trait]
pub trait Provisionable: Send + Sync {
    /// The requirements to fulfill, in fulfillment order. A requirement
    /// reading another's value must come after it in this list.
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)>;

    /// Create the resource from the fulfilled requirement values
    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource>;
}

/// Definition supporting resolution for the given kind, if any
pub fn resolvable(kind: ResourceKind) -> Option<Box<dyn Resolvable>> {
    match kind {
        ResourceKind::Team => Some(Box::new(TeamDefinition)),
        ResourceKind::CloudProvider => Some(Box::new(CloudProviderDefinition)),
        ResourceKind::Project => Some(Box::new(ProjectDefinition)),
        ResourceKind::Environment => Some(Box::new(EnvironmentDefinition)),
        ResourceKind::Network => Some(Box::new(NetworkDefinition)),
        ResourceKind::DatabaseServer => Some(Box::new(DatabaseServerDefinition)),
        ResourceKind::Database => Some(Box::new(DatabaseDefinition)),
        ResourceKind::CacheCluster => Some(Box::new(CacheClusterDefinition)),
        _ => None,
    }
}

/// Definition supporting provisioning for the given kind, if any
pub fn provisionable(kind: ResourceKind) -> Option<Box<dyn Provisionable>> {
    match kind {
        ResourceKind::Team => Some(Box::new(TeamDefinition)),
        ResourceKind::CloudProvider => Some(Box::new(CloudProviderDefinition)),
        ResourceKind::Project => Some(Box::new(ProjectDefinition)),
        ResourceKind::Environment => Some(Box::new(EnvironmentDefinition)),
        ResourceKind::Network => Some(Box::new(NetworkDefinition)),
        ResourceKind::DatabaseServer => Some(Box::new(DatabaseServerDefinition)),
        ResourceKind::Database => Some(Box::new(DatabaseDefinition)),
        ResourceKind::DatabaseUser => Some(Box::new(DatabaseUserDefinition)),
        ResourceKind::CacheCluster => Some(Box::new(CacheClusterDefinition)),
        _ => None,
    }
}

/// Shared disambiguation over a candidate list
///
/// Enforces the resolution contract: zero candidates is
/// `NoResourcesFound` (with the command to create one), a numeric
/// identifier matches by ID, a name matching more than one candidate is
/// ambiguous, and with no identifier a single candidate is taken as-is
/// while several become an interactive choice.
pub(crate) fn choose_resource(
    ctx: &Context<'_>,
    question: &str,
    kind: ResourceKind,
    suggestion: &'static str,
    input_name: &str,
    mut candidates: Vec<Resource>,
    identifier: Option<&str>,
    label: impl Fn(&Resource) -> String,
) -> Result<Resource> {
    if candidates.is_empty() {
        return Err(CoreError::NoResourcesFound { kind, suggestion });
    }

    if let Some(identifier) = identifier {
        if identifier.chars().all(|c| c.is_ascii_digit()) {
            let id: u64 = identifier.parse().map_err(|_| CoreError::ResourceNotFound {
                kind,
                identifier: identifier.to_string(),
            })?;
            return candidates
                .into_iter()
                .find(|candidate| candidate.id() == id)
                .ok_or(CoreError::ResourceNotFound {
                    kind,
                    identifier: identifier.to_string(),
                });
        }

        let mut matches: Vec<Resource> = candidates
            .into_iter()
            .filter(|candidate| candidate.name() == identifier)
            .collect();
        return match matches.len() {
            0 => Err(CoreError::ResourceNotFound {
                kind,
                identifier: identifier.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(CoreError::AmbiguousResource {
                kind,
                name: identifier.to_string(),
            }),
        };
    }

    if candidates.len() == 1 {
        let only = candidates.remove(0);
        ctx.output
            .note(&format!("Using {} \"{}\" (id: {})", kind, only.name(), only.id()));
        return Ok(only);
    }

    ctx.ensure_interactive(input_name)?;
    let labels: Vec<String> = candidates.iter().map(&label).collect();
    let index = ctx.interaction.choice(question, &labels)?;
    Ok(candidates.remove(index))
}

/// Default label for choice lists: name plus ID
pub(crate) fn label_with_id(resource: &Resource) -> String {
    format!("{} (id: {})", resource.name(), resource.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::{Answer, ScriptedPrompt};
    use crate::console::{CommandInput, Output};
    use crate::testing::{FakePlatform, sample_network, sample_team};

    #[tokio::test]
    async fn test_numeric_identifier_matches_by_id() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false), sample_network(8, "backup", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let resource = NetworkDefinition
            .resolve(&ctx, "Which network?", Some("8"))
            .await
            .unwrap();
        assert_eq!(resource.id(), 8);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_ambiguous() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false), sample_network(8, "main", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let result = NetworkDefinition
            .resolve(&ctx, "Which network?", Some("main"))
            .await;
        assert!(matches!(
            result,
            Err(CoreError::AmbiguousResource { name, .. }) if name == "main"
        ));
    }

    #[tokio::test]
    async fn test_unmatched_identifier_is_not_found() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        for identifier in ["9", "missing"] {
            let result = NetworkDefinition
                .resolve(&ctx, "Which network?", Some(identifier))
                .await;
            assert!(
                matches!(result, Err(CoreError::ResourceNotFound { .. })),
                "expected not-found for {:?}",
                identifier
            );
        }
    }

    #[tokio::test]
    async fn test_zero_candidates_suggest_a_creation_command() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let result = NetworkDefinition.resolve(&ctx, "Which network?", None).await;
        assert!(matches!(
            result,
            Err(CoreError::NoResourcesFound { suggestion, .. }) if suggestion == "network create"
        ));
    }

    #[tokio::test]
    async fn test_single_candidate_is_taken_without_prompting() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let resource = NetworkDefinition
            .resolve(&ctx, "Which network?", None)
            .await
            .unwrap();
        assert_eq!(resource.id(), 7);
    }

    #[tokio::test]
    async fn test_several_candidates_become_an_interactive_choice() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false), sample_network(8, "backup", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![Answer::Pick(1)]);
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let resource = NetworkDefinition
            .resolve(&ctx, "Which network?", None)
            .await
            .unwrap();
        assert_eq!(resource.id(), 8);
    }

    #[tokio::test]
    async fn test_several_candidates_without_identifier_fail_non_interactively() {
        let mut api = FakePlatform::new();
        api.networks = vec![sample_network(7, "main", false), sample_network(8, "backup", false)];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let result = NetworkDefinition.resolve(&ctx, "Which network?", None).await;
        assert!(matches!(
            result,
            Err(CoreError::NonInteractiveInput(name)) if name == "network"
        ));
    }
}
