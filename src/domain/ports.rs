use crate::domain::model::{Catalog, EventDefinition, ExchangeConfig, RenderedDoc};
use crate::utils::error::Result;
use std::path::Path;

/// Destination for generated documents. Paths are relative to the storage root.
pub trait Storage {
    /// Creates the directory if needed; succeeds when it already exists.
    fn ensure_dir(&self, path: &Path) -> Result<()>;
    /// Writes the whole file, replacing any previous content.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait DocPipeline {
    fn load_catalog(&self) -> Result<Catalog>;
    fn render(&self, event: &EventDefinition, exchange: &ExchangeConfig) -> Result<RenderedDoc>;
    fn prepare_domain(&self, domain: &str) -> Result<()>;
    fn write(&self, doc: &RenderedDoc) -> Result<()>;
    /// Writes the index page and returns its path relative to the root.
    fn write_overview(&self, catalog: &Catalog) -> Result<String>;
}
