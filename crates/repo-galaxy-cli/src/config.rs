//! CLI configuration.
//!
//! Loads the optional GitHub token from environment variables (with .env
//! support) and an optional JSON config file, env taking precedence.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application-wide configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub personal access token. Optional: unauthenticated requests
    /// work for public repositories at a lower rate limit.
    #[serde(default, skip_serializing)]
    pub github_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables and the config file.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                config.github_token = Some(token);
            }
        }

        // File config takes lower precedence than env vars
        if config.github_token.is_none() {
            if let Some(path) = Self::config_file_path() {
                if path.exists() {
                    let contents = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read config from {}", path.display()))?;
                    let file_config: Config = serde_json::from_str(&contents)
                        .with_context(|| "Failed to parse config file")?;
                    config.github_token = file_config.github_token;
                }
            }
        }

        Ok(config)
    }

    /// Path to the JSON config file, if a project directory is available.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "repo-galaxy", "galaxy")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
