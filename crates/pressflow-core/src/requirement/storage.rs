//! Storage size requirement

use async_trait::async_trait;

use super::resource::is_serverless_type;
use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::error::{CoreError, Result};

/// Allocated storage in GB for a database server
///
/// Serverless server types scale storage themselves, so the
/// requirement yields no value for them — before even looking at the
/// `--storage` option.
pub struct StorageRequirement {
    option: &'static str,
    type_dependency: &'static str,
    question: String,
    default: u64,
}

impl StorageRequirement {
    pub fn new(
        option: &'static str,
        type_dependency: &'static str,
        question: impl Into<String>,
        default: u64,
    ) -> Self {
        Self {
            option,
            type_dependency,
            question: question.into(),
            default,
        }
    }

    fn validate(&self, value: u64) -> Result<RequirementValue> {
        if value == 0 {
            return Err(CoreError::RequirementValidation(format!(
                "The \"{}\" option must be a positive number of GB",
                self.option
            )));
        }
        Ok(RequirementValue::Integer(value))
    }
}

#[async_trait]
impl Requirement for StorageRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let server_type = fulfilled.text(self.type_dependency)?;
        if is_serverless_type(server_type) {
            return Ok(RequirementValue::None);
        }

        if let Some(value) = ctx.input.integer_option(self.option)? {
            return self.validate(value);
        }

        ctx.ensure_interactive(self.option)?;
        let default = self.default.to_string();
        let answer = ctx.interaction.ask(&self.question, Some(&default))?;
        let value: u64 = answer.parse().map_err(|_| {
            CoreError::RequirementValidation(format!(
                "\"{}\" is not a valid number of GB",
                answer
            ))
        })?;

        self.validate(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::scripted::ScriptedPrompt;
    use crate::console::{CommandInput, Output};
    use crate::requirement::RequirementValue;
    use crate::testing::{FakePlatform, sample_team};

    fn requirement() -> StorageRequirement {
        StorageRequirement::new("storage", "type", "How much storage (GB)?", 50)
    }

    #[tokio::test]
    async fn test_missing_type_dependency_is_a_dependency_error() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let input = CommandInput::new().with_integer_option("storage", Some(20));
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let result = requirement().fulfill(&ctx, &Fulfilled::new()).await;
        assert!(matches!(
            result,
            Err(CoreError::RequirementDependency(name)) if name == "type"
        ));
    }

    #[tokio::test]
    async fn test_zero_storage_is_rejected() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let input = CommandInput::new().with_integer_option("storage", Some(0));
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let fulfilled =
            Fulfilled::new().with("type", RequirementValue::Text("db.t3.micro".to_string()));
        let result = requirement().fulfill(&ctx, &fulfilled).await;
        assert!(matches!(result, Err(CoreError::RequirementValidation(_))));
    }

    #[tokio::test]
    async fn test_serverless_type_short_circuits_to_no_value() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let input = CommandInput::new().with_integer_option("storage", Some(100));
        let ctx = Context::new(&api, input, &output, &prompt, sample_team());

        let fulfilled =
            Fulfilled::new().with("type", RequirementValue::Text("aurora-mysql".to_string()));
        let value = requirement().fulfill(&ctx, &fulfilled).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_absent_option_fails_non_interactively() {
        let api = FakePlatform::new();
        let output = Output::new();
        let prompt = ScriptedPrompt::non_interactive();
        let ctx = Context::new(&api, CommandInput::new(), &output, &prompt, sample_team());

        let fulfilled =
            Fulfilled::new().with("type", RequirementValue::Text("db.t3.micro".to_string()));
        let result = requirement().fulfill(&ctx, &fulfilled).await;
        assert!(matches!(
            result,
            Err(CoreError::NonInteractiveInput(name)) if name == "storage"
        ));
    }
}
