//! Configuration surface consumed by the publication stage, stored in
//! slipway.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Name of the configuration file at the project root
pub const CONFIG_FILE: &str = "slipway.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
  /// Name of the project being released
  #[serde(default)]
  pub project_name: String,
  #[serde(default)]
  pub release: ReleaseConfig,
}

/// Settings for the release publication stage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseConfig {
  /// Disable the release stage entirely
  #[serde(default)]
  pub disable: bool,
  /// Template for the release name; empty means the built-in default
  #[serde(default)]
  pub name_template: String,
  /// Target repository on the hosting service
  #[serde(default)]
  pub repo: RepoRef,
}

/// Identity of a repository on the remote hosting service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
  #[serde(default)]
  pub owner: String,
  #[serde(default)]
  pub name: String,
}

impl RepoRef {
  pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      owner: owner.into(),
      name: name.into(),
    }
  }

  /// Whether a concrete repository has been configured
  pub fn is_set(&self) -> bool {
    !self.name.is_empty()
  }
}

impl fmt::Display for RepoRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.owner.is_empty() {
      write!(f, "{}", self.name)
    } else {
      write!(f, "{}/{}", self.owner, self.name)
    }
  }
}

impl Config {
  /// Load config from slipway.toml under the given root
  pub fn load(root: &Path) -> Result<Self> {
    let config_path = root.join(CONFIG_FILE);
    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: Config =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
    Ok(config)
  }

  /// Save config to slipway.toml under the given root
  pub fn save(&self, root: &Path) -> Result<()> {
    let config_path = root.join(CONFIG_FILE);
    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(&config_path, content).with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    Ok(())
  }

  /// Check if a config file exists at the given root
  pub fn exists(root: &Path) -> bool {
    root.join(CONFIG_FILE).exists()
  }
}
