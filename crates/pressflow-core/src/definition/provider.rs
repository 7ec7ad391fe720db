//! Cloud provider definition

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::Result;
use crate::requirement::{
    ActiveTeamRequirement, AwsCredentialsRequirement, Fulfilled, Requirement, TextRequirement,
};

pub struct CloudProviderDefinition;

#[async_trait]
impl Resolvable for CloudProviderDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let providers = ctx.api.get_providers(&ctx.team).await?;
        let candidates: Vec<Resource> = providers.into_iter().map(Resource::CloudProvider).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::CloudProvider,
            "provider connect",
            "provider",
            candidates,
            identifier,
            label_with_id,
        )
    }
}

#[async_trait]
impl Provisionable for CloudProviderDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            ("team", Box::new(ActiveTeamRequirement)),
            (
                "name",
                Box::new(TextRequirement::new(
                    "name",
                    "What should the cloud provider connection be named?",
                )),
            ),
            ("credentials", Box::new(AwsCredentialsRequirement::new("profile"))),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let provider = api
            .create_provider(
                fulfilled.team("team")?,
                fulfilled.text("name")?,
                fulfilled.credentials("credentials")?,
            )
            .await?;
        Ok(Resource::CloudProvider(provider))
    }
}
