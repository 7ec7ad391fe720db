//! Project and environment definitions

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::{CoreError, Result};
use crate::requirement::{
    CurrentProjectRequirement, Fulfilled, PresetListRequirement, ProviderRequirement,
    RegionRequirement, Requirement, SlugRequirement,
};

/// Environments every new project starts with
pub const DEFAULT_ENVIRONMENTS: [&str; 2] = ["staging", "production"];

pub struct ProjectDefinition;

#[async_trait]
impl Resolvable for ProjectDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let projects = ctx.api.get_projects(&ctx.team).await?;
        let candidates: Vec<Resource> = projects.into_iter().map(Resource::Project).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::Project,
            "project init",
            "project",
            candidates,
            identifier,
            label_with_id,
        )
    }
}

#[async_trait]
impl Provisionable for ProjectDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            (
                "name",
                Box::new(SlugRequirement::new("name", "What should the project be named?")),
            ),
            ("provider", Box::new(ProviderRequirement::new("provider"))),
            ("region", Box::new(RegionRequirement::new("region", "provider"))),
            (
                "environments",
                Box::new(PresetListRequirement::new(&DEFAULT_ENVIRONMENTS)),
            ),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let project = api
            .create_project(
                fulfilled.provider("provider")?,
                fulfilled.text("name")?,
                fulfilled.text("region")?,
                fulfilled.list("environments")?,
            )
            .await?;
        Ok(Resource::Project(project))
    }
}

pub struct EnvironmentDefinition;

#[async_trait]
impl Resolvable for EnvironmentDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let project = ctx.project.as_ref().ok_or_else(|| {
            CoreError::InvalidInput(
                "This command must be run inside a project directory".to_string(),
            )
        })?;

        let environments = ctx.api.get_environments(project).await?;
        let candidates: Vec<Resource> =
            environments.into_iter().map(Resource::Environment).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::Environment,
            "environment create",
            "environment",
            candidates,
            identifier,
            label_with_id,
        )
    }
}

#[async_trait]
impl Provisionable for EnvironmentDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            ("project", Box::new(CurrentProjectRequirement)),
            (
                "name",
                Box::new(SlugRequirement::new(
                    "name",
                    "What should the environment be named?",
                )),
            ),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let environment = api
            .create_environment(fulfilled.project("project")?, fulfilled.text("name")?)
            .await?;
        Ok(Resource::Environment(environment))
    }
}
