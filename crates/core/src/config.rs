//! Configuration file parsing for .codemap.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for in the scope root and its ancestors
pub const CONFIG_FILE_NAME: &str = ".codemap.toml";

/// Main configuration structure for .codemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodemapConfig {
    #[serde(default)]
    pub structure: StructureConfig,

    #[serde(default)]
    pub statistics: StatisticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    /// Depth at which the directory tree is truncated
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Dot-prefixed entries the tree builder keeps anyway
    #[serde(default = "default_allowed_hidden")]
    pub allowed_hidden: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Length of the largest-files ranking
    #[serde(default = "default_largest_files")]
    pub largest_files: usize,

    /// Maximum entries visited by the statistics walk (0 = unlimited)
    #[serde(default)]
    pub max_entries: usize,
}

// Default functions
fn default_max_depth() -> usize {
    3
}

fn default_allowed_hidden() -> Vec<String> {
    vec![".git".to_string(), ".github".to_string()]
}

fn default_largest_files() -> usize {
    10
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            allowed_hidden: default_allowed_hidden(),
        }
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            largest_files: default_largest_files(),
            max_entries: 0,
        }
    }
}

impl CodemapConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: CodemapConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .codemap.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                log::debug!("loading config from {}", config_path.display());
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
