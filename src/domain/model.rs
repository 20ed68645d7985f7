use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Exchange settings shared by every event in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub exchange: String,
    /// Preferred format first, fallback second.
    pub content_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,
    pub version: String,
    pub routing_key: String,
    pub contract: String,
    pub domain: String,
    pub description: String,
    pub frequency: String,
    pub idempotent: bool,
    pub schema: IndexMap<String, FieldSpec>,
    pub example: IndexMap<String, serde_json::Value>,
}

impl EventDefinition {
    /// Output location relative to the output root: `<domain>/<name>.<version>.md`.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.domain).join(self.file_name())
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}.md", self.name.to_lowercase(), self.version)
    }

    /// Forward-slash form of [`output_path`](Self::output_path), used for
    /// progress lines and links.
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.domain, self.file_name())
    }

    /// Last dot-separated segment of the contract, e.g. `PlayerJoinedV1`.
    pub fn contract_type_name(&self) -> &str {
        self.contract.rsplit('.').next().unwrap_or(&self.contract)
    }

    /// Strips every trailing `s` from the domain (`players` -> `player`,
    /// `address` -> `addre`). Used only in wildcard routing-key samples.
    pub fn singular_domain(&self) -> &str {
        self.domain.trim_end_matches('s')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub exchange: ExchangeConfig,
    pub events: Vec<EventDefinition>,
}

impl Catalog {
    /// Distinct domains, sorted.
    pub fn domains(&self) -> BTreeSet<&str> {
        self.events.iter().map(|e| e.domain.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One generated Markdown document, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDoc {
    pub event_name: String,
    pub domain: String,
    pub relative_path: PathBuf,
    pub display_path: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    pub domains: Vec<String>,
    pub files: Vec<String>,
    pub overview_written: bool,
    pub dry_run: bool,
}
