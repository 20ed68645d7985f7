use crate::domain::model::{Catalog, EventDefinition, ExchangeConfig};
use crate::utils::error::{DocgenError, Result};
use crate::utils::validation::{
    validate_min_len, validate_non_empty_string, validate_path_component, Validate,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk shape of `_events.yaml`: exchange settings sit beside the event list.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    exchange: String,
    content_types: Vec<String>,
    events: Vec<EventDefinition>,
}

impl From<CatalogDocument> for Catalog {
    fn from(doc: CatalogDocument) -> Self {
        Catalog {
            exchange: ExchangeConfig {
                exchange: doc.exchange,
                content_types: doc.content_types,
            },
            events: doc.events,
        }
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|source| DocgenError::CatalogReadError {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = parse_catalog_at(&content, path)?;
    tracing::debug!(
        "Loaded {} events from {}",
        catalog.events.len(),
        path.display()
    );
    Ok(catalog)
}

pub fn parse_catalog(content: &str) -> Result<Catalog> {
    parse_catalog_at(content, Path::new("<memory>"))
}

fn parse_catalog_at(content: &str, path: &Path) -> Result<Catalog> {
    // serde_yaml reports the field path (e.g. `events[2]: missing field `contract``).
    let doc: CatalogDocument =
        serde_yaml::from_str(content).map_err(|e| DocgenError::CatalogParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(doc.into())
}

impl Validate for ExchangeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("exchange", &self.exchange)?;
        validate_min_len("content_types", &self.content_types, 2)?;
        for (i, content_type) in self.content_types.iter().enumerate() {
            validate_non_empty_string(&format!("content_types[{}]", i), content_type)?;
        }
        if self.content_types.len() > 2 {
            tracing::warn!(
                "content_types lists {} formats; only '{}' and '{}' are documented",
                self.content_types.len(),
                self.content_types[0],
                self.content_types[1]
            );
        }
        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        self.exchange.validate()?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        for (i, event) in self.events.iter().enumerate() {
            validate_path_component(&format!("events[{}].name", i), &event.name)?;
            validate_path_component(&format!("events[{}].version", i), &event.version)?;
            validate_path_component(&format!("events[{}].domain", i), &event.domain)?;

            let path = event.display_path();
            if let Some(first) = seen.insert(path.clone(), &event.name) {
                return Err(DocgenError::DuplicateOutputPath {
                    path,
                    first: first.to_string(),
                    second: event.name.clone(),
                });
            }
        }

        if self.is_empty() {
            tracing::warn!("Catalog contains no events");
        }
        Ok(())
    }
}
