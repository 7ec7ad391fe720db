//! Cache engine and type requirements

use async_trait::async_trait;
use pressflow_api::TypeOption;

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::error::{CoreError, Result};

/// Engines the platform can run
pub const CACHE_ENGINES: [&str; 2] = ["redis", "valkey"];

/// The cache engine, validated against the fixed engine set
pub struct CacheEngineRequirement {
    option: &'static str,
}

impl CacheEngineRequirement {
    pub fn new(option: &'static str) -> Self {
        Self { option }
    }
}

#[async_trait]
impl Requirement for CacheEngineRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        if let Some(value) = ctx.input.option(self.option) {
            if !CACHE_ENGINES.contains(&value) {
                return Err(CoreError::RequirementValidation(format!(
                    "The cache engine must be one of: {}",
                    CACHE_ENGINES.join(", ")
                )));
            }
            return Ok(RequirementValue::Text(value.to_string()));
        }

        if !ctx.interaction.is_interactive() {
            return Ok(RequirementValue::Text(CACHE_ENGINES[0].to_string()));
        }

        let options: Vec<String> = CACHE_ENGINES.iter().map(|e| e.to_string()).collect();
        let index = ctx
            .interaction
            .choice("Which cache engine would you like to use?", &options)?;
        Ok(RequirementValue::Text(options[index].clone()))
    }
}

/// The cache instance type, chosen from the provider's priced list
pub struct CacheTypeRequirement {
    option: &'static str,
    network_dependency: &'static str,
    engine_dependency: &'static str,
}

impl CacheTypeRequirement {
    pub fn new(
        option: &'static str,
        network_dependency: &'static str,
        engine_dependency: &'static str,
    ) -> Self {
        Self {
            option,
            network_dependency,
            engine_dependency,
        }
    }
}

#[async_trait]
impl Requirement for CacheTypeRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let network = fulfilled.network(self.network_dependency)?;
        let engine = fulfilled.text(self.engine_dependency)?;

        let types = ctx.api.get_cache_types(&network.provider).await?;
        if types.is_empty() {
            return Err(CoreError::RequirementFulfillment(format!(
                "The platform offers no cache types for the \"{}\" provider",
                network.provider.name
            )));
        }

        if let Some(value) = ctx.input.option(self.option) {
            return match types.iter().find(|t| t.code == value) {
                Some(option) => Ok(RequirementValue::Text(option.code.clone())),
                None => Err(CoreError::RequirementValidation(format!(
                    "\"{}\" is not an available cache type",
                    value
                ))),
            };
        }

        ctx.ensure_interactive(self.option)?;
        let labels: Vec<String> = types.iter().map(TypeOption::display).collect();
        let index = ctx.interaction.choice(
            &format!("Which type of {} cache cluster would you like?", engine),
            &labels,
        )?;
        Ok(RequirementValue::Text(types[index].code.clone()))
    }
}
