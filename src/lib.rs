pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalStorage;
pub use config::GeneratorConfig;
pub use core::{
    catalog::{load_catalog, parse_catalog},
    engine::DocsEngine,
    pipeline::CatalogPipeline,
    renderer::{MarkdownRenderer, RenderSettings},
};
pub use domain::model::{Catalog, EventDefinition, ExchangeConfig, FieldSpec, RunSummary};
pub use utils::error::{DocgenError, Result};

use utils::validation::Validate;

/// Runs the generator with fully resolved settings.
pub fn generate(config: &GeneratorConfig) -> Result<RunSummary> {
    config.validate()?;

    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = CatalogPipeline::new(storage, config.catalog_path.clone(), config.render.clone());
    DocsEngine::new(pipeline)
        .with_overview(config.overview)
        .with_dry_run(config.dry_run)
        .run()
}
