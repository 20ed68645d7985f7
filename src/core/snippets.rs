//! Fixed text blocks and C# usage samples embedded in every event page.
//!
//! The samples are plain text for readers; nothing here is compiled or checked
//! against the target language.

use crate::domain::model::EventDefinition;
use serde_json::Value;

pub const SAMPLE_LANGUAGE: &str = "csharp";

pub const REQUIRED_HEADERS: &[&str] = &[
    "- `x-event-id`: Unique event identifier (GUID/ULID)",
    "- `x-event-ts`: Event timestamp (RFC3339 UTC)",
];

pub const OPTIONAL_HEADERS: &[&str] = &[
    "- `x-profile`: Player profile identifier (when applicable)",
    "- `x-correlation-id`: For tracing related events",
    "- `x-source`: Source system identifier",
];

pub const MESSAGEPACK_NOTE: &str = "When using MessagePack serialization (preferred), the same structure is used but encoded in binary format for better performance.";

/// Literal for one example value inside the object initializer. Top-level
/// strings are double-quoted; everything else uses Python's `repr` spelling
/// (`True`, `None`, `['a', 1]`) so pages match the ones already published.
pub fn value_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => python_repr(other),
    }
}

fn python_repr(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => python_str_repr(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(python_repr).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", python_str_repr(k), python_repr(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn python_str_repr(s: &str) -> String {
    // Single quotes unless the text holds a single quote and no double quote.
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Replaces every non-ASCII character with `\uXXXX` escapes (surrogate pairs
/// above U+FFFF). Applied to serialized JSON, where such characters only
/// occur inside string literals.
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

pub fn publish_sample(event: &EventDefinition) -> Vec<String> {
    let mut lines = vec![
        format!("// Publish to: {}", event.routing_key),
        format!("var contract = new {}", event.contract_type_name()),
        "{".to_string(),
    ];
    lines.extend(
        event
            .example
            .iter()
            .map(|(field, value)| format!("    {} = {},", field, value_literal(value))),
    );
    lines.push("};".to_string());
    lines.push(format!(
        "await publisher.PublishAsync(\"{}\", contract);",
        event.routing_key
    ));
    lines
}

pub fn consume_sample(event: &EventDefinition, exchange: &str, routing_prefix: &str) -> Vec<String> {
    vec![
        "// Bind queue to routing key".to_string(),
        format!(
            "channel.QueueBind(queue: \"your-queue\", exchange: \"{}\", routingKey: \"{}\");",
            exchange, event.routing_key
        ),
        String::new(),
        "// Or use wildcard patterns:".to_string(),
        format!(
            "// - All {} events: \"{}.{}.*.v1\"",
            event.domain,
            routing_prefix,
            event.singular_domain()
        ),
        format!("// - All V1 events: \"{}.*.*.v1\"", routing_prefix),
        format!("// - All events: \"{}.#\"", routing_prefix),
    ]
}
