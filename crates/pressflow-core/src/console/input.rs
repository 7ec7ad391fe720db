//! Parsed command input
//!
//! Requirements read named arguments and options without knowing which
//! command they run under. Command handlers translate their clap fields
//! into a [`CommandInput`] so the same requirement works for every
//! command that carries the matching option.

use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// A named option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
    Integer(u64),
    List(Vec<String>),
}

/// The named arguments and options of one command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    arguments: HashMap<String, String>,
    options: HashMap<String, OptionValue>,
}

impl CommandInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a positional argument, skipping absent ones
    pub fn with_argument(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.arguments.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Record a text option, skipping absent ones
    pub fn with_option(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.options
                .insert(name.to_string(), OptionValue::Text(value.to_string()));
        }
        self
    }

    /// Record an integer option, skipping absent ones
    pub fn with_integer_option(mut self, name: &str, value: Option<u64>) -> Self {
        if let Some(value) = value {
            self.options.insert(name.to_string(), OptionValue::Integer(value));
        }
        self
    }

    /// Record a boolean flag. False flags are recorded too: an absent
    /// flag and an explicit `false` are the same to requirements.
    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.options.insert(name.to_string(), OptionValue::Flag(value));
        self
    }

    /// Record a repeatable option, skipping empty lists
    pub fn with_list_option(mut self, name: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.options
                .insert(name.to_string(), OptionValue::List(values.to_vec()));
        }
        self
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Text value of an option, if one was given
    pub fn option(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Integer value of an option. Accepts a text option holding
    /// digits; anything else is a validation error.
    pub fn integer_option(&self, name: &str) -> Result<Option<u64>> {
        match self.options.get(name) {
            None => Ok(None),
            Some(OptionValue::Integer(value)) => Ok(Some(*value)),
            Some(OptionValue::Text(value)) => {
                value.parse::<u64>().map(Some).map_err(|_| {
                    CoreError::RequirementValidation(format!(
                        "The \"{}\" option must be a number, got \"{}\"",
                        name, value
                    ))
                })
            }
            Some(other) => Err(CoreError::RequirementValidation(format!(
                "The \"{}\" option must be a number, got {:?}",
                name, other
            ))),
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(OptionValue::Flag(true)))
    }

    /// Whether a flag was recorded at all, regardless of its value
    pub fn has_flag(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(OptionValue::Flag(_)))
    }

    pub fn list_option(&self, name: &str) -> Option<&[String]> {
        match self.options.get(name) {
            Some(OptionValue::List(values)) => Some(values.as_slice()),
            _ => None,
        }
    }
}
