//! Project configuration file (pressflow.yml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File name looked up when discovering the project root
pub const PROJECT_FILE: &str = "pressflow.yml";

/// The contents of a project's pressflow.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Platform project ID
    pub id: u64,

    /// Project name
    pub name: String,

    /// Environments the project was created with
    #[serde(default)]
    pub environments: Vec<String>,
}

impl ProjectConfig {
    /// Load the project file from a project root directory
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PROJECT_FILE);
        let contents = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }

    /// Write the project file into a project root directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(PROJECT_FILE);
        std::fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

/// Find the project root by walking up from `start`
///
/// The project root is the closest ancestor directory (including
/// `start` itself) containing a pressflow.yml.
pub fn find_project_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(PROJECT_FILE).exists() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(ConfigError::ProjectFileNotFound(start.to_path_buf())),
        }
    }
}
