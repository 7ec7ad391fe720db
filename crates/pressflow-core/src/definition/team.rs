//! Team definition

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::Result;
use crate::requirement::{Fulfilled, Requirement, TextRequirement};

pub struct TeamDefinition;

#[async_trait]
impl Resolvable for TeamDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        // teams are the one resource not scoped by a team: list
        // everything the caller belongs to
        let teams = ctx.api.get_teams().await?;
        let candidates: Vec<Resource> = teams.into_iter().map(Resource::Team).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::Team,
            "team create",
            "team",
            candidates,
            identifier,
            label_with_id,
        )
    }
}

#[async_trait]
impl Provisionable for TeamDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![(
            "name",
            Box::new(TextRequirement::new("name", "What should the team be named?")),
        )]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let team = api.create_team(fulfilled.text("name")?).await?;
        Ok(Resource::Team(team))
    }
}
