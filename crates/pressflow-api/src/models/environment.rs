//! Environment model

use serde::{Deserialize, Serialize};

/// An environment of a project (staging, production, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment ID
    pub id: u64,

    /// Environment name, unique within its project
    pub name: String,

    /// Vanity domain assigned by the platform, if any
    pub vanity_domain: Option<String>,
}

/// A secret stored on an environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Secret ID
    pub id: u64,

    /// Secret name
    pub name: String,
}
