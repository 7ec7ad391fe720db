//! Cache cluster definition

use async_trait::async_trait;
use pressflow_api::{PlatformApi, Resource, ResourceKind};

use super::{Provisionable, Resolvable, choose_resource, label_with_id};
use crate::context::Context;
use crate::error::Result;
use crate::requirement::{
    CacheEngineRequirement, CacheTypeRequirement, Fulfilled, NatGatewayConsentRequirement,
    NetworkRequirement, Requirement, SlugRequirement,
};

pub struct CacheClusterDefinition;

#[async_trait]
impl Resolvable for CacheClusterDefinition {
    async fn resolve(
        &self,
        ctx: &Context<'_>,
        question: &str,
        identifier: Option<&str>,
    ) -> Result<Resource> {
        let caches = ctx.api.get_caches(&ctx.team).await?;
        let candidates: Vec<Resource> = caches.into_iter().map(Resource::CacheCluster).collect();
        choose_resource(
            ctx,
            question,
            ResourceKind::CacheCluster,
            "cache create",
            "cache",
            candidates,
            identifier,
            |resource| match resource {
                Resource::CacheCluster(cache) => {
                    format!("{} ({}, {})", cache.name, cache.engine, cache.cache_type)
                }
                other => label_with_id(other),
            },
        )
    }
}

#[async_trait]
impl Provisionable for CacheClusterDefinition {
    fn requirements(&self) -> Vec<(&'static str, Box<dyn Requirement>)> {
        vec![
            (
                "name",
                Box::new(SlugRequirement::new(
                    "name",
                    "What should the cache cluster be named?",
                )),
            ),
            ("network", Box::new(NetworkRequirement::new("network"))),
            // the consent gate runs before any engine or type choice so
            // that declining aborts before other questions are asked
            ("nat", Box::new(NatGatewayConsentRequirement::new("network"))),
            ("engine", Box::new(CacheEngineRequirement::new("engine"))),
            ("type", Box::new(CacheTypeRequirement::new("type", "network", "engine"))),
        ]
    }

    async fn provision(&self, api: &dyn PlatformApi, fulfilled: &Fulfilled) -> Result<Resource> {
        let cache = api
            .create_cache(
                fulfilled.network("network")?,
                fulfilled.text("name")?,
                fulfilled.text("engine")?,
                fulfilled.text("type")?,
            )
            .await?;
        Ok(Resource::CacheCluster(cache))
    }
}
