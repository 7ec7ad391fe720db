//! Text and slug requirements

use async_trait::async_trait;

use super::{Fulfilled, Requirement, RequirementValue};
use crate::context::Context;
use crate::error::{CoreError, Result};

/// Lowercase `value` and collapse every run of characters outside
/// `[a-z0-9-_]` into a single dash, trimming dashes at both ends.
/// Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut replaced = false;

    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            slug.push(c);
            replaced = false;
        } else if !replaced {
            slug.push('-');
            replaced = true;
        }
    }

    slug.trim_matches('-').to_string()
}

/// A name argument normalized to a slug
pub struct SlugRequirement {
    argument: &'static str,
    question: String,
}

impl SlugRequirement {
    pub fn new(argument: &'static str, question: impl Into<String>) -> Self {
        Self {
            argument,
            question: question.into(),
        }
    }
}

#[async_trait]
impl Requirement for SlugRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let raw = match ctx.input.argument(self.argument) {
            Some(value) => value.to_string(),
            None => {
                ctx.ensure_interactive(self.argument)?;
                ctx.interaction.ask(&self.question, None)?
            }
        };

        let slug = slugify(&raw);
        if slug.is_empty() {
            return Err(CoreError::RequirementValidation(format!(
                "\"{}\" does not contain any usable characters (a-z, 0-9, \"-\", \"_\")",
                raw.trim()
            )));
        }

        Ok(RequirementValue::Text(slug))
    }
}

/// A plain text argument, rejected when empty
pub struct TextRequirement {
    argument: &'static str,
    question: String,
}

impl TextRequirement {
    pub fn new(argument: &'static str, question: impl Into<String>) -> Self {
        Self {
            argument,
            question: question.into(),
        }
    }
}

#[async_trait]
impl Requirement for TextRequirement {
    async fn fulfill(&self, ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        let value = match ctx.input.argument(self.argument) {
            Some(value) => value.to_string(),
            None => {
                ctx.ensure_interactive(self.argument)?;
                ctx.interaction.ask(&self.question, None)?
            }
        };

        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(CoreError::RequirementValidation(format!(
                "The \"{}\" value cannot be empty",
                self.argument
            )));
        }

        Ok(RequirementValue::Text(value))
    }
}

/// A fixed list of values, never prompted for
pub struct PresetListRequirement {
    values: Vec<String>,
}

impl PresetListRequirement {
    pub fn new(values: &[&str]) -> Self {
        Self {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Requirement for PresetListRequirement {
    async fn fulfill(&self, _ctx: &Context<'_>, _fulfilled: &Fulfilled) -> Result<RequirementValue> {
        Ok(RequirementValue::List(self.values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_replaces_runs() {
        assert_eq!(slugify("My WordPress Site"), "my-wordpress-site");
        assert_eq!(slugify("hello...world"), "hello-world");
        assert_eq!(slugify("under_score-kept"), "under_score-kept");
    }

    #[test]
    fn test_slugify_trims_dashes() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for input in ["My Site", "a--b", "éléphant", "99 balloons!", "_x_"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_slugify_output_alphabet() {
        for input in ["Ünïcode", "a b\tc", "Mixed CASE 42", "🦀 crab"] {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
                "unexpected character in {:?}",
                slug
            );
        }
    }
}
