//! Core error taxonomy
//!
//! Every failure mode of the requirement and resolution machinery is a
//! variant here. Errors unwind to the command boundary uncaught; the
//! single exception is `NoResourcesFound`, which the
//! resolve-or-provision path catches to substitute a provisioning flow.

use pressflow_api::{ApiError, ResourceKind};
use pressflow_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A requirement read a key its definition never fulfilled before it.
    /// This is an ordering bug in a resource definition, not user error.
    #[error("The \"{0}\" requirement must be fulfilled first")]
    RequirementDependency(String),

    /// A user-supplied value failed a local check
    #[error("{0}")]
    RequirementValidation(String),

    /// Valid input, but upstream data left nothing to fulfill with
    #[error("{0}")]
    RequirementFulfillment(String),

    /// Resolution found zero candidates of the requested type
    #[error("Your team has no {kind} yet. You can create one with \"press {suggestion}\"")]
    NoResourcesFound {
        kind: ResourceKind,
        suggestion: &'static str,
    },

    /// An explicit identifier matched nothing
    #[error("Unable to find a {kind} matching \"{identifier}\"")]
    ResourceNotFound {
        kind: ResourceKind,
        identifier: String,
    },

    /// A non-numeric name matched more than one candidate
    #[error("Multiple {kind} resources are named \"{name}\", please use the ID instead")]
    AmbiguousResource { kind: ResourceKind, name: String },

    /// Generic user-input rejection
    #[error("{0}")]
    InvalidInput(String),

    /// The user declined a required confirmation. A deliberate abort,
    /// not a failure: nothing created so far is rolled back.
    #[error("Command cancelled")]
    Cancelled,

    /// A required argument or option was absent in a non-interactive run
    #[error("The \"{0}\" argument or option is required when running non-interactively")]
    NonInteractiveInput(String),

    #[error("A {0} cannot be provisioned through this command")]
    NotProvisionable(ResourceKind),

    #[error("A {0} cannot be resolved through this command")]
    NotResolvable(ResourceKind),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// True for the user-declined abort signal
    pub fn is_cancellation(&self) -> bool {
        matches!(self, CoreError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resources_found_carries_suggestion() {
        let error = CoreError::NoResourcesFound {
            kind: ResourceKind::Network,
            suggestion: "network create",
        };
        let message = error.to_string();
        assert!(message.contains("network"));
        assert!(message.contains("press network create"));
    }

    #[test]
    fn test_cancellation_is_not_conflated_with_errors() {
        assert!(CoreError::Cancelled.is_cancellation());
        assert!(!CoreError::InvalidInput("nope".into()).is_cancellation());
    }
}
