//! Local configuration for the Pressflow CLI
//!
//! Two files live outside the API: the per-user CLI configuration
//! (`~/.config/pressflow/config.yml`, holding the API token and active
//! team) and the per-project `pressflow.yml` written by
//! `press project init`.

pub mod error;
pub mod project;

pub use error::*;
pub use project::{PROJECT_FILE, ProjectConfig, find_project_root};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-user CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// API token written by the login command
    pub token: Option<String>,

    /// ID of the team commands operate on by default
    pub active_team: Option<u64>,
}

impl CliConfig {
    /// Load the CLI configuration, returning defaults if none exists yet
    pub fn load() -> Result<Self> {
        let path = get_config_dir()?.join("config.yml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }

    /// Persist the CLI configuration
    pub fn save(&self) -> Result<()> {
        let path = get_config_dir()?.join("config.yml");
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

/// Pressflowの設定ディレクトリを取得（なければ作成）
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("pressflow");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir() {
        let result = get_config_dir();
        assert!(result.is_ok());

        let config_dir = result.unwrap();
        assert!(config_dir.ends_with("pressflow"));
        assert!(config_dir.exists());
    }

    #[test]
    fn test_cli_config_defaults_when_missing() {
        // load() falls back to defaults rather than failing
        let config = CliConfig::default();
        assert!(config.token.is_none());
        assert!(config.active_team.is_none());
    }
}
