use crate::config::toml_config::TomlConfig;
use crate::config::GeneratorConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "event-docgen")]
#[command(about = "Generate Markdown documentation for every event in an event catalog")]
pub struct CliArgs {
    /// Event catalog to read [default: _events.yaml]
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory the domain folders are created in [default: .]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write 00-overview.md listing every event
    #[arg(long)]
    pub overview: bool,

    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliArgs {
    /// Settings file first, then flags given on the command line.
    pub fn resolve(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from {}", path.display());
                GeneratorConfig::from_toml(&TomlConfig::from_file(path)?)
            }
            None => GeneratorConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog_path = catalog.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        config.overview |= self.overview;
        config.dry_run = self.dry_run;

        Ok(config)
    }
}
