//! Visibility and NAT gateway consent requirements
//!
//! Private resources need a NAT gateway on their network for the
//! platform to keep managing them. NAT gateways are billed per hour,
//! so adding one is always gated behind an explicit confirmation;
//! declining aborts the whole command before anything is created.

use async_trait::async_trait;

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::error::{CoreError, Result};

/// Whether a database server should be private
///
/// Reads the `--private`/`--public` flags, asks otherwise, and gates
/// the private path behind NAT gateway consent when the chosen network
/// has none yet.
pub struct PrivateFlagRequirement {
    network_dependency: &'static str,
}

impl PrivateFlagRequirement {
    pub fn new(network_dependency: &'static str) -> Self {
        Self { network_dependency }
    }
}

#[async_trait]
impl Requirement for PrivateFlagRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let network = fulfilled.network(self.network_dependency)?;

        let private = if ctx.input.flag("private") {
            true
        } else if ctx.input.flag("public") {
            false
        } else if ctx.interaction.is_interactive() {
            !ctx.interaction
                .confirm("Should the database server be publicly accessible?", true)?
        } else {
            false
        };

        if private && !network.has_nat_gateway {
            let consent = ctx.interaction.confirm(
                "A private database server needs a NAT gateway on its network, \
                 which has an additional monthly cost. Add one?",
                false,
            )?;
            if !consent {
                return Err(CoreError::Cancelled);
            }
        }

        Ok(RequirementValue::Bool(private))
    }
}

/// Unconditional NAT gateway consent, for resources that always live
/// on a private subnet (cache clusters)
pub struct NatGatewayConsentRequirement {
    network_dependency: &'static str,
}

impl NatGatewayConsentRequirement {
    pub fn new(network_dependency: &'static str) -> Self {
        Self { network_dependency }
    }
}

#[async_trait]
impl Requirement for NatGatewayConsentRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let network = fulfilled.network(self.network_dependency)?;

        if network.has_nat_gateway {
            return Ok(RequirementValue::Bool(true));
        }

        let consent = ctx.interaction.confirm(
            "Cache clusters need a NAT gateway on their network, \
             which has an additional monthly cost. Add one?",
            false,
        )?;
        if !consent {
            return Err(CoreError::Cancelled);
        }

        Ok(RequirementValue::Bool(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::{Answer, ScriptedPrompt};
    use crate::console::{CommandInput, Output};
    use crate::testing::{FakePlatform, sample_network, sample_team};
    use pressflow_api::Resource;

    fn fulfilled_with_network(has_nat_gateway: bool) -> Fulfilled {
        Fulfilled::new().with(
            "network",
            RequirementValue::Resource(Resource::Network(sample_network(
                7,
                "main",
                has_nat_gateway,
            ))),
        )
    }

    #[tokio::test]
    async fn test_declining_nat_consent_cancels() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![Answer::Bool(false)]);
        let input = CommandInput::new().with_flag("private", true);
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let result = PrivateFlagRequirement::new("network")
            .fulfill(&ctx, &fulfilled_with_network(false))
            .await;
        assert!(matches!(result, Err(CoreError::Cancelled)));
    }

    #[tokio::test]
    async fn test_private_with_existing_nat_gateway_needs_no_consent() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![]);
        let input = CommandInput::new().with_flag("private", true);
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let value = PrivateFlagRequirement::new("network")
            .fulfill(&ctx, &fulfilled_with_network(true))
            .await
            .unwrap();
        assert!(matches!(value, RequirementValue::Bool(true)));
    }

    #[tokio::test]
    async fn test_public_flag_skips_the_gate_entirely() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![]);
        let input = CommandInput::new().with_flag("public", true);
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let value = PrivateFlagRequirement::new("network")
            .fulfill(&ctx, &fulfilled_with_network(false))
            .await
            .unwrap();
        assert!(matches!(value, RequirementValue::Bool(false)));
    }

    #[tokio::test]
    async fn test_cache_consent_accepted_when_gateway_exists() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::new(vec![]);
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let value = NatGatewayConsentRequirement::new("network")
            .fulfill(&ctx, &fulfilled_with_network(true))
            .await
            .unwrap();
        assert!(matches!(value, RequirementValue::Bool(true)));
    }
}
