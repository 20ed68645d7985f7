#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::renderer::RenderSettings;
use crate::utils::error::{DocgenError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_CATALOG_PATH: &str = "_events.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub catalog_path: PathBuf,
    pub output_dir: PathBuf,
    pub overview: bool,
    pub dry_run: bool,
    pub render: RenderSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            overview: false,
            dry_run: false,
            render: RenderSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with whatever the settings file provides.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut config = Self::default();

        if let Some(input) = &file.input {
            if let Some(catalog) = &input.catalog {
                config.catalog_path = PathBuf::from(catalog);
            }
        }

        if let Some(output) = &file.output {
            if let Some(root) = &output.root {
                config.output_dir = PathBuf::from(root);
            }
            config.overview = output.overview.unwrap_or(false);
        }

        if let Some(render) = &file.render {
            if let Some(prefix) = &render.routing_prefix {
                config.render.routing_prefix = prefix.clone();
            }
            if let Some(link) = &render.overview_link {
                config.render.overview_link = link.clone();
            }
            if let Some(link) = &render.changelog_link {
                config.render.changelog_link = link.clone();
            }
        }

        config
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", &self.catalog_path.to_string_lossy())?;
        validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validate_non_empty_string("render.routing_prefix", &self.render.routing_prefix)?;
        if self.overview && self.render.overview_file().is_none() {
            return Err(DocgenError::InvalidConfigValueError {
                field: "render.overview_link".to_string(),
                value: self.render.overview_link.clone(),
                reason: "with overview enabled the link must be ../<file> so the index lands in the output root".to_string(),
            });
        }
        Ok(())
    }
}
