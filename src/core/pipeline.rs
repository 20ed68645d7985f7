use crate::core::catalog::load_catalog;
use crate::core::overview::render_overview;
use crate::core::renderer::{MarkdownRenderer, RenderSettings};
use crate::core::{Catalog, DocPipeline, EventDefinition, ExchangeConfig, RenderedDoc, Storage};
use crate::utils::error::{DocgenError, Result};
use std::path::{Path, PathBuf};

/// Reads the catalog from disk and writes Markdown through a [`Storage`].
pub struct CatalogPipeline<S: Storage> {
    storage: S,
    catalog_path: PathBuf,
    renderer: MarkdownRenderer,
}

impl<S: Storage> CatalogPipeline<S> {
    pub fn new<P: Into<PathBuf>>(storage: S, catalog_path: P, settings: RenderSettings) -> Self {
        Self {
            storage,
            catalog_path: catalog_path.into(),
            renderer: MarkdownRenderer::new(settings),
        }
    }
}

impl<S: Storage> DocPipeline for CatalogPipeline<S> {
    fn load_catalog(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.catalog_path.display());
        load_catalog(&self.catalog_path)
    }

    fn render(&self, event: &EventDefinition, exchange: &ExchangeConfig) -> Result<RenderedDoc> {
        self.renderer.render(event, exchange)
    }

    fn prepare_domain(&self, domain: &str) -> Result<()> {
        tracing::debug!("Ensuring directory {}", domain);
        self.storage.ensure_dir(Path::new(domain))
    }

    fn write(&self, doc: &RenderedDoc) -> Result<()> {
        self.storage
            .write_file(&doc.relative_path, doc.markdown.as_bytes())
    }

    fn write_overview(&self, catalog: &Catalog) -> Result<String> {
        let settings = self.renderer.settings();
        let file = settings
            .overview_file()
            .ok_or_else(|| DocgenError::ConfigError {
                message: format!(
                    "overview_link '{}' does not point at the output root",
                    settings.overview_link
                ),
            })?;
        self.storage
            .write_file(Path::new(file), render_overview(catalog).as_bytes())?;
        Ok(file.to_string())
    }
}
