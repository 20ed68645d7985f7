use crate::domain::model::Catalog;

pub const OVERVIEW_FILE: &str = "00-overview.md";

/// Index page linking every generated event document, grouped by domain.
pub fn render_overview(catalog: &Catalog) -> String {
    let mut md = vec![
        "# Event Overview".to_string(),
        String::new(),
        format!("All events are published to the `{}` exchange.", catalog.exchange.exchange),
        String::new(),
    ];

    for domain in catalog.domains() {
        md.push(format!("## {}", domain));
        md.push(String::new());
        md.push("| Event | Routing Key | Version | Documentation |".to_string());
        md.push("|-------|-------------|---------|---------------|".to_string());
        for event in catalog.events.iter().filter(|e| e.domain == domain) {
            md.push(format!(
                "| {} | `{}` | {} | [{}]({}) |",
                event.name,
                event.routing_key,
                event.version,
                event.file_name(),
                event.display_path()
            ));
        }
        md.push(String::new());
    }

    md.push(format!("Total: {} events", catalog.events.len()));
    md.push(String::new());
    md.join("\n")
}
