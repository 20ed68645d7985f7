use crate::utils::error::{DocgenError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file; every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub render: Option<RenderConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub root: Option<String>,
    pub overview: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    pub routing_prefix: Option<String>,
    pub overview_link: Option<String>,
    pub changelog_link: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DocgenError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DocgenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}
