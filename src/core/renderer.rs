use crate::core::overview::OVERVIEW_FILE;
use crate::core::snippets::{
    consume_sample, escape_non_ascii, publish_sample, MESSAGEPACK_NOTE, OPTIONAL_HEADERS,
    REQUIRED_HEADERS, SAMPLE_LANGUAGE,
};
use crate::domain::model::{EventDefinition, ExchangeConfig, RenderedDoc};
use crate::utils::error::{DocgenError, Result};
use serde::{Deserialize, Serialize};

/// Catalog-independent values that appear in every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub routing_prefix: String,
    pub overview_link: String,
    pub changelog_link: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            routing_prefix: "albion.event".to_string(),
            overview_link: format!("../{}", OVERVIEW_FILE),
            changelog_link: "../../messaging/CHANGELOG_EVENTS.md".to_string(),
        }
    }
}

impl RenderSettings {
    /// File name of the overview page at the output root, as seen from a
    /// domain directory through `overview_link`. `None` when the link points
    /// anywhere other than `../<file>`.
    pub fn overview_file(&self) -> Option<&str> {
        let name = self.overview_link.strip_prefix("../")?;
        if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
            None
        } else {
            Some(name)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    settings: RenderSettings,
}

impl MarkdownRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn render(&self, event: &EventDefinition, exchange: &ExchangeConfig) -> Result<RenderedDoc> {
        let markdown = self.render_markdown(event, exchange)?;
        Ok(RenderedDoc {
            event_name: event.name.clone(),
            domain: event.domain.clone(),
            relative_path: event.output_path(),
            display_path: event.display_path(),
            markdown,
        })
    }

    pub fn render_markdown(&self, event: &EventDefinition, exchange: &ExchangeConfig) -> Result<String> {
        let preferred = content_type(event, exchange, 0)?;
        let fallback = content_type(event, exchange, 1)?;

        let mut md: Vec<String> = Vec::new();

        md.push(format!("# {}{}", event.name, event.version.to_uppercase()));
        md.push(String::new());

        md.push("## Event Metadata".to_string());
        md.push(String::new());
        md.push("| Property | Value |".to_string());
        md.push("|----------|-------|".to_string());
        md.push(format!("| **Routing Key** | `{}` |", event.routing_key));
        md.push(format!("| **Contract** | `{}` |", event.contract));
        md.push(format!("| **Domain** | {} |", event.domain));
        md.push(format!("| **Version** | {} |", event.version));
        md.push(format!("| **Exchange** | `{}` |", exchange.exchange));
        md.push(format!(
            "| **Content-Type** | `{}` (preferred), `{}` (fallback) |",
            preferred, fallback
        ));
        md.push(String::new());

        md.push("## Description".to_string());
        md.push(String::new());
        md.push(event.description.clone());
        md.push(String::new());

        md.push("## Characteristics".to_string());
        md.push(String::new());
        md.push(format!("- **Frequency**: {}", event.frequency));
        md.push(format!("- **Idempotent**: {}", yes_no(event.idempotent)));
        md.push(String::new());

        md.push("## Headers".to_string());
        md.push(String::new());
        md.push("### Required Headers".to_string());
        md.extend(REQUIRED_HEADERS.iter().map(|line| line.to_string()));
        md.push(format!("- `x-contract`: `{}`", event.contract));
        md.push(String::new());
        md.push("### Optional Headers".to_string());
        md.extend(OPTIONAL_HEADERS.iter().map(|line| line.to_string()));
        md.push(String::new());

        md.push("## Schema".to_string());
        md.push(String::new());
        md.push("| Field | Type | Required | Description |".to_string());
        md.push("|-------|------|----------|-------------|".to_string());
        for (field_name, field) in &event.schema {
            md.push(format!(
                "| `{}` | {} | {} | {} |",
                field_name,
                field.field_type,
                yes_no(field.required),
                field.description.as_deref().unwrap_or("")
            ));
        }
        md.push(String::new());

        md.push("## Example".to_string());
        md.push(String::new());
        md.push("### JSON Payload".to_string());
        md.push("```json".to_string());
        let example = serde_json::to_string_pretty(&event.example)?;
        md.push(escape_non_ascii(&example));
        md.push("```".to_string());
        md.push(String::new());

        md.push("### MessagePack".to_string());
        md.push(MESSAGEPACK_NOTE.to_string());
        md.push(String::new());

        md.push("## Usage Notes".to_string());
        md.push(String::new());
        md.push("### Publishing".to_string());
        md.push(format!("```{}", SAMPLE_LANGUAGE));
        md.extend(publish_sample(event));
        md.push("```".to_string());
        md.push(String::new());

        md.push("### Consuming".to_string());
        md.push(format!("```{}", SAMPLE_LANGUAGE));
        md.extend(consume_sample(
            event,
            &exchange.exchange,
            &self.settings.routing_prefix,
        ));
        md.push("```".to_string());
        md.push(String::new());

        md.push("## Related Events".to_string());
        md.push(String::new());
        md.push(format!("- Other {} domain events", event.domain));
        md.push(format!(
            "- See [Event Overview]({}) for all available events",
            self.settings.overview_link
        ));
        md.push(String::new());

        md.push("## Version History".to_string());
        md.push(String::new());
        md.push(format!("- **{}** - Initial version", event.version));
        md.push(format!(
            "- See [CHANGELOG]({}) for detailed changes",
            self.settings.changelog_link
        ));
        md.push(String::new());

        Ok(md.join("\n"))
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn content_type<'a>(
    event: &EventDefinition,
    exchange: &'a ExchangeConfig,
    index: usize,
) -> Result<&'a str> {
    exchange
        .content_types
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| DocgenError::MissingContentType {
            event: event.name.clone(),
            index,
            available: exchange.content_types.len(),
        })
}
