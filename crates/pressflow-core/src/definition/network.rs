//! Network definition

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::Result;
use crate::requirement::{
    Fulfilled, ProviderRequirement, RegionRequirement, Requirement, SlugRequirement,
};

pub struct NetworkDefinition;

#[async_trait]
impl Resolvable for NetworkDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let networks = ctx.api.get_networks(&ctx.team).await?;
        let candidates: Vec<Resource> = networks.into_iter().map(Resource::Network).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::Network,
            "network create",
            "network",
            candidates,
            identifier,
            |resource| match resource {
                Resource::Network(network) => network.label(),
                other => label_with_id(other),
            },
        )
    }
}

#[async_trait]
impl Provisionable for NetworkDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            (
                "name",
                Box::new(SlugRequirement::new("name", "What should the network be named?")),
            ),
            ("provider", Box::new(ProviderRequirement::new("provider"))),
            ("region", Box::new(RegionRequirement::new("region", "provider"))),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let network = api
            .create_network(
                fulfilled.provider("provider")?,
                fulfilled.text("name")?,
                fulfilled.text("region")?,
            )
            .await?;
        Ok(Resource::Network(network))
    }
}
