// File: src/config.rs
// Purpose: Collector settings from the [segments] table of rhtmx.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Segment collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentsConfig {
    /// Deepest loader tree chain the walker will follow
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: usize,
}

/// rhtmx.toml, reduced to the tables this crate reads
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    segments: SegmentsConfig,
}

fn default_max_tree_depth() -> usize {
    256
}

impl Default for SegmentsConfig {
    fn default() -> Self {
        Self {
            max_tree_depth: default_max_tree_depth(),
        }
    }
}

impl SegmentsConfig {
    /// Reads the [segments] table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).context("Failed to parse [segments] configuration")?;
        Ok(file.segments)
    }

    /// Loads settings from rhtmx.toml
    ///
    /// A missing or empty file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Loads settings from ./rhtmx.toml
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx.toml")
    }

    pub fn with_max_tree_depth(mut self, max_tree_depth: usize) -> Self {
        self.max_tree_depth = max_tree_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(SegmentsConfig::default().max_tree_depth, 256);
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        let toml = r#"
            [routing]
            pages_dir = "app"
        "#;
        let config = SegmentsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config, SegmentsConfig::default());
    }

    #[test]
    fn test_custom_depth() {
        let toml = r#"
            [segments]
            max_tree_depth = 32
        "#;
        let config = SegmentsConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.max_tree_depth, 32);
    }

    #[test]
    fn test_invalid_depth() {
        let toml = r#"
            [segments]
            max_tree_depth = "deep"
        "#;
        assert!(SegmentsConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("rhtmx-segments-{}.toml", std::process::id()));
        fs::write(&path, "[segments]\nmax_tree_depth = 8\n").unwrap();

        let config = SegmentsConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.max_tree_depth, 8);
    }

    #[test]
    fn test_missing_file() {
        let config = SegmentsConfig::load("does/not/exist/rhtmx.toml").unwrap();
        assert_eq!(config, SegmentsConfig::default());
    }
}
