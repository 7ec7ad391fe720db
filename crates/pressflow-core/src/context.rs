//! Execution context
//!
//! The per-invocation carrier of ambient state: API handle, command
//! input, console handles, the active team and, when known, the
//! current project and a parent resource. Contexts derive by copying —
//! `with_project` and `with_parent_resource` return a new value and
//! leave the original untouched, so nothing is ever shared mutably
//! across requirements.

use std::path::PathBuf;

use pressflow_api::models::{Project, Team};
use pressflow_api::{PlatformApi, Resource, ResourceKind};
use pressflow_config::ProjectConfig;

use crate::console::{CommandInput, Interaction, Output};
use crate::error::{CoreError, Result};
use crate::provisioner;
use crate::requirement::{Fulfilled, Requirement, RequirementValue};

/// Ambient state for one command invocation
#[derive(Clone)]
pub struct Context<'a> {
    /// Platform API handle
    pub api: &'a dyn PlatformApi,

    /// Named arguments and options of the running command
    pub input: CommandInput,

    /// Output rendering
    pub output: &'a Output,

    /// Interactive prompting
    pub interaction: &'a dyn Interaction,

    /// The active team. Always present: commands resolve it before
    /// constructing a context.
    pub team: Team,

    /// The project the command runs inside, when one was discovered
    pub project: Option<Project>,

    /// A resource resolved earlier in a chain that scopes subsequent
    /// resolutions (e.g. a database server when resolving a database)
    pub parent: Option<Resource>,

    /// Root directory of the current project, when inside one
    pub project_dir: Option<PathBuf>,

    /// Parsed pressflow.yml of the current project, when inside one
    pub project_config: Option<ProjectConfig>,

    /// The user's home directory (AWS credential file lookup)
    pub home_dir: PathBuf,
}

impl<'a> Context<'a> {
    pub fn new(
        api: &'a dyn PlatformApi,
        input: CommandInput,
        output: &'a Output,
        interaction: &'a dyn Interaction,
        team: Team,
    ) -> Self {
        Self {
            api,
            input,
            output,
            interaction,
            team,
            project: None,
            parent: None,
            project_dir: None,
            project_config: None,
            home_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Derived context with the current project set
    pub fn with_project(&self, project: Project) -> Self {
        let mut derived = self.clone();
        derived.project = Some(project);
        derived
    }

    /// Derived context with a parent resource set
    pub fn with_parent_resource(&self, resource: Resource) -> Self {
        let mut derived = self.clone();
        derived.parent = Some(resource);
        derived
    }

    /// Derived context with the project directory and config set
    pub fn with_project_dir(&self, dir: PathBuf, config: ProjectConfig) -> Self {
        let mut derived = self.clone();
        derived.project_dir = Some(dir);
        derived.project_config = Some(config);
        derived
    }

    /// Derived context with a different home directory (tests)
    pub fn with_home_dir(&self, home_dir: PathBuf) -> Self {
        let mut derived = self.clone();
        derived.home_dir = home_dir;
        derived
    }

    /// Look up an existing resource of the given kind
    pub async fn resolve(
        &self,
        kind: ResourceKind,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        provisioner::resolve(self, kind, question, identifier).await
    }

    /// Create a resource of the given kind, walking its requirements
    pub async fn provision(&self, kind: ResourceKind, pre_fulfilled: Fulfilled) -> Result<Resource> {
        provisioner::provision(self, kind, pre_fulfilled).await
    }

    /// Look up a resource, falling back to provisioning when none exist
    pub async fn resolve_or_provision(
        &self,
        kind: ResourceKind,
        question: &str,
        identifier: Option<&str>,
        pre_fulfilled: Fulfilled,
    ) -> Result<Resource> {
        provisioner::resolve_or_provision(self, kind, question, identifier, pre_fulfilled).await
    }

    /// Fulfill a single requirement against this context
    pub async fn fulfill(
        &self,
        requirement: &dyn Requirement,
        fulfilled: &Fulfilled,
    ) -> Result<RequirementValue> {
        requirement.fulfill(self, fulfilled).await
    }

    /// Fail with the non-interactive error unless prompting is possible
    pub fn ensure_interactive(&self, name: &str) -> Result<()> {
        if self.interaction.is_interactive() {
            Ok(())
        } else {
            Err(CoreError::NonInteractiveInput(name.to_string()))
        }
    }
}
