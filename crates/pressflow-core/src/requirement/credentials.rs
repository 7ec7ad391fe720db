//! AWS credentials requirement

use async_trait::async_trait;
use pressflow_api::AwsCredentials;

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::credentials as aws;
use crate::error::{CoreError, Result};

/// Credentials for connecting a cloud provider account
///
/// Prefers a profile from the local AWS credentials file — by the
/// `--profile` option or an interactive choice — and falls back to
/// manual entry with the secret read without echo.
pub struct AwsCredentialsRequirement {
    option: &'static str,
}

impl AwsCredentialsRequirement {
    pub fn new(option: &'static str) -> Self {
        Self { option }
    }

    fn manual_entry(&self, ctx: &Context<'_>) -> Result<AwsCredentials> {
        let access_key_id = ctx.interaction.ask("AWS access key ID", None)?;
        if access_key_id.trim().is_empty() {
            return Err(CoreError::RequirementValidation(
                "The access key ID cannot be empty".to_string(),
            ));
        }

        let secret_access_key = ctx.interaction.ask_hidden("AWS secret access key")?;
        if secret_access_key.is_empty() {
            return Err(CoreError::RequirementValidation(
                "The secret access key cannot be empty".to_string(),
            ));
        }

        Ok(AwsCredentials {
            access_key_id: access_key_id.trim().to_string(),
            secret_access_key,
        })
    }
}

#[async_trait]
impl Requirement for AwsCredentialsRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        if let Some(profile) = ctx.input.option(self.option) {
            return match aws::profile_credentials(&ctx.home_dir, profile)? {
                Some(credentials) => Ok(RequirementValue::Credentials(credentials)),
                None => Err(CoreError::RequirementValidation(format!(
                    "The \"{}\" profile was not found in your AWS credentials file",
                    profile
                ))),
            };
        }

        ctx.ensure_interactive(self.option)?;

        let profiles = aws::available_profiles(&ctx.home_dir)?;
        if !profiles.is_empty() {
            let mut options = profiles.clone();
            options.push("Enter credentials manually".to_string());

            let index = ctx
                .interaction
                .choice("Which AWS credentials should be used?", &options)?;
            if index < profiles.len() {
                match aws::profile_credentials(&ctx.home_dir, &profiles[index])? {
                    Some(credentials) => return Ok(RequirementValue::Credentials(credentials)),
                    None => ctx.output.warn(&format!(
                        "The \"{}\" profile is missing keys, please enter them manually",
                        profiles[index]
                    )),
                }
            }
        }

        Ok(RequirementValue::Credentials(self.manual_entry(ctx)?))
    }
}
