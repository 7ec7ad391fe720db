//! Requirements that produce resources
//!
//! Three families: requirements that re-expose context state without
//! ever prompting (active team, current project, parent server),
//! requirements that resolve an existing resource (cloud provider),
//! and delegating requirements that resolve-or-provision (network,
//! database server). The delegating ones catch exactly the
//! no-resources-found outcome and fall back to provisioning the
//! missing resource, pre-seeding any constraints the caller imposed.

use async_trait::async_trait;
use pressflow_api::{Resource, ResourceKind, TypeOption};

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::definition::{choose_resource, label_with_id};
use crate::error::{CoreError, Result};

/// Instance type the platform provisions for `--serverless` servers
pub const SERVERLESS_TYPE: &str = "aurora-mysql";

/// Serverless classes scale storage themselves
pub(crate) fn is_serverless_type(server_type: &str) -> bool {
    server_type.starts_with("aurora")
}

/// The active team from the context. Never prompts.
pub struct ActiveTeamRequirement;

#[async_trait]
impl Requirement for ActiveTeamRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        Ok(RequirementValue::Resource(Resource::Team(ctx.team.clone())))
    }
}

/// The project the command runs inside. Never prompts.
pub struct CurrentProjectRequirement;

#[async_trait]
impl Requirement for CurrentProjectRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        match &ctx.project {
            Some(project) => Ok(RequirementValue::Resource(Resource::Project(project.clone()))),
            None => Err(CoreError::InvalidInput(
                "This command must be run inside a project directory \
                 (run \"press project init\" first)"
                    .to_string(),
            )),
        }
    }
}

/// The database server resolved earlier in the command and placed on
/// the context as the parent resource. Never prompts.
pub struct ParentDatabaseServerRequirement;

#[async_trait]
impl Requirement for ParentDatabaseServerRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        match &ctx.parent {
            Some(Resource::DatabaseServer(server)) => Ok(RequirementValue::Resource(
                Resource::DatabaseServer(server.clone()),
            )),
            _ => Err(CoreError::InvalidInput(
                "No database server was selected for this command".to_string(),
            )),
        }
    }
}

/// An existing cloud provider connection, resolved or chosen
pub struct ProviderRequirement {
    option: &'static str,
}

impl ProviderRequirement {
    pub fn new(option: &'static str) -> Self {
        Self { option }
    }
}

#[async_trait]
impl Requirement for ProviderRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let identifier = ctx.input.option(self.option);
        let provider = ctx
            .resolve(
                ResourceKind::CloudProvider,
                "Which cloud provider should be used?",
                identifier,
            )
            .await?;
        Ok(RequirementValue::Resource(provider))
    }
}

/// A region offered by the already-resolved cloud provider
///
/// Defaults to the current project's region when there is one and the
/// provider still offers it.
pub struct RegionRequirement {
    option: &'static str,
    provider_dependency: &'static str,
}

impl RegionRequirement {
    pub fn new(option: &'static str, provider_dependency: &'static str) -> Self {
        Self {
            option,
            provider_dependency,
        }
    }
}

#[async_trait]
impl Requirement for RegionRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let provider = fulfilled.provider(self.provider_dependency)?;

        let regions = ctx.api.get_regions(provider).await?;
        if regions.is_empty() {
            return Err(CoreError::RequirementFulfillment(format!(
                "The \"{}\" provider exposes no regions",
                provider.name
            )));
        }

        if let Some(value) = ctx.input.option(self.option) {
            if !regions.iter().any(|region| region == value) {
                return Err(CoreError::RequirementValidation(format!(
                    "\"{}\" is not an available region",
                    value
                )));
            }
            return Ok(RequirementValue::Text(value.to_string()));
        }

        let default = ctx
            .project
            .as_ref()
            .map(|project| project.region.clone())
            .filter(|region| regions.contains(region));

        if !ctx.interaction.is_interactive() {
            return match default {
                Some(region) => Ok(RequirementValue::Text(region)),
                None => Err(CoreError::NonInteractiveInput(self.option.to_string())),
            };
        }

        let region = match default {
            Some(default) => {
                let answer = ctx
                    .interaction
                    .ask("In which region should the resource be created?", Some(&default))?;
                if !regions.contains(&answer) {
                    return Err(CoreError::RequirementValidation(format!(
                        "\"{}\" is not an available region",
                        answer
                    )));
                }
                answer
            }
            None => {
                let index = ctx
                    .interaction
                    .choice("In which region should the resource be created?", &regions)?;
                regions[index].clone()
            }
        };

        Ok(RequirementValue::Text(region))
    }
}

/// The database server instance type, scoped by the network's provider
///
/// The `--serverless` flag short-circuits to the serverless class
/// without an API round-trip.
pub struct ServerTypeRequirement {
    option: &'static str,
    serverless_flag: &'static str,
    network_dependency: &'static str,
}

impl ServerTypeRequirement {
    pub fn new(
        option: &'static str,
        serverless_flag: &'static str,
        network_dependency: &'static str,
    ) -> Self {
        Self {
            option,
            serverless_flag,
            network_dependency,
        }
    }
}

#[async_trait]
impl Requirement for ServerTypeRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let network = fulfilled.network(self.network_dependency)?;

        if ctx.input.flag(self.serverless_flag) {
            return Ok(RequirementValue::Text(SERVERLESS_TYPE.to_string()));
        }

        let types = ctx.api.get_database_server_types(&network.provider).await?;
        if types.is_empty() {
            return Err(CoreError::RequirementFulfillment(format!(
                "No database server types are available for the \"{}\" provider",
                network.provider.name
            )));
        }

        if let Some(value) = ctx.input.option(self.option) {
            return match types.iter().find(|t| t.code == value) {
                Some(option) => Ok(RequirementValue::Text(option.code.clone())),
                None => Err(CoreError::RequirementValidation(format!(
                    "\"{}\" is not an available database server type",
                    value
                ))),
            };
        }

        ctx.ensure_interactive(self.option)?;
        let labels: Vec<String> = types.iter().map(TypeOption::display).collect();
        let index = ctx
            .interaction
            .choice("Which type of database server would you like?", &labels)?;
        Ok(RequirementValue::Text(types[index].code.clone()))
    }
}

/// An existing network, or a freshly provisioned one when the team has
/// none yet
pub struct NetworkRequirement {
    option: &'static str,
}

impl NetworkRequirement {
    pub fn new(option: &'static str) -> Self {
        Self { option }
    }
}

#[async_trait]
impl Requirement for NetworkRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let identifier = ctx.input.option(self.option);
        let network = ctx
            .resolve_or_provision(
                ResourceKind::Network,
                "Which network should be used?",
                identifier,
                Fulfilled::new(),
            )
            .await?;
        Ok(RequirementValue::Resource(network))
    }
}

/// An existing database server, or a freshly provisioned one
///
/// With `public_only` the lookup is restricted to publicly accessible
/// servers, and a fallback provisioning run is pre-seeded with
/// `private = false` so the result stays reachable.
pub struct DatabaseServerRequirement {
    option: &'static str,
    public_only: bool,
}

impl DatabaseServerRequirement {
    pub fn new(option: &'static str) -> Self {
        Self {
            option,
            public_only: false,
        }
    }

    pub fn public_only(option: &'static str) -> Self {
        Self {
            option,
            public_only: true,
        }
    }
}

#[async_trait]
impl Requirement for DatabaseServerRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let identifier = ctx.input.option(self.option);

        let mut servers = ctx.api.get_database_servers(&ctx.team).await?;
        if self.public_only {
            servers.retain(|server| server.public);
        }

        let candidates: Vec<Resource> = servers.into_iter().map(Resource::DatabaseServer).collect();
        let chosen = choose_resource(
            ctx,
            "Which database server should be used?",
            ResourceKind::DatabaseServer,
            "database server create",
            self.option,
            candidates,
            identifier,
            |resource| match resource {
                Resource::DatabaseServer(server) => format!(
                    "{} ({}, {})",
                    server.name, server.region, server.server_type
                ),
                other => label_with_id(other),
            },
        );

        let server = match chosen {
            Err(CoreError::NoResourcesFound { kind, .. }) => {
                ctx.output
                    .info(&format!("Your team has no {} yet, let's create one.", kind));
                let mut pre_fulfilled = Fulfilled::new();
                if self.public_only {
                    pre_fulfilled = pre_fulfilled.with("private", RequirementValue::Bool(false));
                }
                ctx.provision(ResourceKind::DatabaseServer, pre_fulfilled).await?
            }
            outcome => outcome?,
        };

        Ok(RequirementValue::Resource(server))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::{Answer, ScriptedPrompt};
    use crate::console::{CommandInput, Output};
    use crate::testing::{FakePlatform, sample_server, sample_team};
    use pressflow_api::models::Project;

    #[tokio::test]
    async fn test_region_defaults_to_the_current_project_region() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team())
            .with_project(Project {
                id: 5,
                name: "my-site".to_string(),
                region: "us-east-1".to_string(),
                provider_id: 3,
            });

        let fulfilled = Fulfilled::new().with(
            "provider",
            RequirementValue::Resource(Resource::CloudProvider(
                crate::testing::sample_provider(),
            )),
        );
        let value = RegionRequirement::new("region", "provider")
            .fulfill(&ctx, &fulfilled)
            .await
            .unwrap();
        assert!(matches!(value, RequirementValue::Text(region) if region == "us-east-1"));
    }

    #[tokio::test]
    async fn test_region_rejects_values_the_provider_does_not_offer() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let input = CommandInput::new().with_option("region", Some("mars-north-1"));
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let fulfilled = Fulfilled::new().with(
            "provider",
            RequirementValue::Resource(Resource::CloudProvider(
                crate::testing::sample_provider(),
            )),
        );
        let result = RegionRequirement::new("region", "provider")
            .fulfill(&ctx, &fulfilled)
            .await;
        assert!(matches!(result, Err(CoreError::RequirementValidation(_))));
    }

    #[tokio::test]
    async fn test_parent_server_requirement_reads_the_context() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team())
            .with_parent_resource(Resource::DatabaseServer(sample_server(42, "primary", true)));

        let value = ParentDatabaseServerRequirement
            .fulfill(&ctx, &Fulfilled::new())
            .await
            .unwrap();
        assert!(matches!(
            value,
            RequirementValue::Resource(Resource::DatabaseServer(server)) if server.id == 42
        ));
    }

    #[tokio::test]
    async fn test_parent_server_requirement_never_prompts() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![]);
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let result = ParentDatabaseServerRequirement
            .fulfill(&ctx, &Fulfilled::new())
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_public_only_server_lookup_ignores_private_servers() {
        let mut api = FakePlatform::new();
        api.database_servers = vec![
            sample_server(41, "internal", false),
            sample_server(42, "shared", true),
        ];
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        // only one public server, so it is taken without prompting
        let value = DatabaseServerRequirement::public_only("server")
            .fulfill(&ctx, &Fulfilled::new())
            .await
            .unwrap();
        assert!(matches!(
            value,
            RequirementValue::Resource(Resource::DatabaseServer(server)) if server.id == 42
        ));
    }

    #[tokio::test]
    async fn test_serverless_flag_short_circuits_the_type_lookup() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let input = CommandInput::new().with_flag("serverless", true);
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let fulfilled = Fulfilled::new().with(
            "network",
            RequirementValue::Resource(Resource::Network(crate::testing::sample_network(
                7, "main", false,
            ))),
        );
        let value = ServerTypeRequirement::new("type", "serverless", "network")
            .fulfill(&ctx, &fulfilled)
            .await
            .unwrap();
        assert!(matches!(value, RequirementValue::Text(t) if t == SERVERLESS_TYPE));
    }
}
