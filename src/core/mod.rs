pub mod catalog;
pub mod engine;
pub mod overview;
pub mod pipeline;
pub mod renderer;
pub mod snippets;

pub use crate::domain::model::{Catalog, EventDefinition, ExchangeConfig, RenderedDoc, RunSummary};
pub use crate::domain::ports::{DocPipeline, Storage};
pub use crate::utils::error::Result;
