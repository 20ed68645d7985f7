use anyhow::Result;
use event_docgen::{
    generate, load_catalog, DocgenError, GeneratorConfig, MarkdownRenderer,
};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/_events.yaml");

const PLAYER_JOINED_DOC: &str = r#"# PlayerJoinedV1

## Event Metadata

| Property | Value |
|----------|-------|
| **Routing Key** | `albion.event.player.joined.v1` |
| **Contract** | `Albion.Events.V1.PlayerJoinedV1` |
| **Domain** | players |
| **Version** | v1 |
| **Exchange** | `albion.events` |
| **Content-Type** | `json` (preferred), `msgpack` (fallback) |

## Description

Emitted when a player enters the world.

## Characteristics

- **Frequency**: Medium
- **Idempotent**: Yes

## Headers

### Required Headers
- `x-event-id`: Unique event identifier (GUID/ULID)
- `x-event-ts`: Event timestamp (RFC3339 UTC)
- `x-contract`: `Albion.Events.V1.PlayerJoinedV1`

### Optional Headers
- `x-profile`: Player profile identifier (when applicable)
- `x-correlation-id`: For tracing related events
- `x-source`: Source system identifier

## Schema

| Field | Type | Required | Description |
|-------|------|----------|-------------|
| `playerId` | string | Yes | Unique player identifier |
| `playerName` | string | Yes | Display name |
| `guildName` | string | No |  |

## Example

### JSON Payload
```json
{
  "playerId": "7f1c2a9e",
  "playerName": "Morgana",
  "guildName": "Avalon Rising"
}
```

### MessagePack
When using MessagePack serialization (preferred), the same structure is used but encoded in binary format for better performance.

## Usage Notes

### Publishing
```csharp
// Publish to: albion.event.player.joined.v1
var contract = new PlayerJoinedV1
{
    playerId = "7f1c2a9e",
    playerName = "Morgana",
    guildName = "Avalon Rising",
};
await publisher.PublishAsync("albion.event.player.joined.v1", contract);
```

### Consuming
```csharp
// Bind queue to routing key
channel.QueueBind(queue: "your-queue", exchange: "albion.events", routingKey: "albion.event.player.joined.v1");

// Or use wildcard patterns:
// - All players events: "albion.event.player.*.v1"
// - All V1 events: "albion.event.*.*.v1"
// - All events: "albion.event.#"
```

## Related Events

- Other players domain events
- See [Event Overview](../00-overview.md) for all available events

## Version History

- **v1** - Initial version
- See [CHANGELOG](../../messaging/CHANGELOG_EVENTS.md) for detailed changes
"#;

fn setup(catalog: &str) -> Result<(TempDir, GeneratorConfig)> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("_events.yaml");
    fs::write(&catalog_path, catalog)?;

    let config = GeneratorConfig {
        catalog_path,
        output_dir: temp_dir.path().join("docs"),
        ..GeneratorConfig::default()
    };
    fs::create_dir_all(&config.output_dir)?;
    Ok((temp_dir, config))
}

fn read_tree(root: &Path, files: &[&str]) -> Result<Vec<String>> {
    files
        .iter()
        .map(|f| Ok(fs::read_to_string(root.join(f))?))
        .collect()
}

fn extract_json_block(markdown: &str) -> &str {
    let start = markdown.find("```json\n").unwrap() + "```json\n".len();
    let end = start + markdown[start..].find("\n```").unwrap();
    &markdown[start..end]
}

#[test]
fn test_generates_one_file_per_event() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    let summary = generate(&config)?;

    assert_eq!(summary.documents, 3);
    assert_eq!(summary.domains, vec!["markets", "players"]);
    assert_eq!(
        summary.files,
        vec![
            "players/playerjoined.v1.md",
            "players/playerdied.v1.md",
            "markets/marketorderplaced.v2.md",
        ]
    );
    for file in &summary.files {
        assert!(config.output_dir.join(file).is_file(), "{file} missing");
    }
    assert!(!config.output_dir.join("00-overview.md").exists());
    Ok(())
}

#[test]
fn test_document_matches_expected_layout() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    generate(&config)?;

    let doc = fs::read_to_string(config.output_dir.join("players/playerjoined.v1.md"))?;
    assert_eq!(doc, PLAYER_JOINED_DOC);
    Ok(())
}

#[test]
fn test_output_paths_are_unique() -> Result<()> {
    let catalog = load_catalog(Path::new("tests/fixtures/_events.yaml"))?;
    let paths: HashSet<PathBuf> = catalog.events.iter().map(|e| e.output_path()).collect();
    assert_eq!(paths.len(), catalog.events.len());
    Ok(())
}

#[test]
fn test_colliding_events_are_rejected_before_writing() -> Result<()> {
    let duplicated = FIXTURE.replace("name: PlayerDied", "name: playerjoined");
    let (_temp_dir, config) = setup(&duplicated)?;

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DocgenError::DuplicateOutputPath { .. }));
    assert!(!config.output_dir.join("players").exists());
    Ok(())
}

#[test]
fn test_example_json_round_trips() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    generate(&config)?;
    let catalog = load_catalog(&config.catalog_path)?;

    for event in &catalog.events {
        let doc = fs::read_to_string(config.output_dir.join(event.output_path()))?;
        let parsed: IndexMap<String, serde_json::Value> =
            serde_json::from_str(extract_json_block(&doc))?;

        assert_eq!(parsed, event.example);
        assert!(
            parsed.keys().eq(event.example.keys()),
            "key order differs for {}",
            event.name
        );
    }
    Ok(())
}

#[test]
fn test_publish_sample_literals() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    generate(&config)?;

    let doc = fs::read_to_string(config.output_dir.join("players/playerdied.v1.md"))?;
    let expected = [
        "var contract = new PlayerDiedV1",
        "{",
        "    playerId = \"7f1c2a9e\",",
        "    fame = 15200,",
        "    positionX = 102.5,",
        "    inParty = True,",
        "    killerId = None,",
        "    zoneName = \"Fort Sterling \u{2013} Caf\u{e9}\",",
        "};",
    ]
    .join("\n");
    assert!(doc.contains(&expected));
    Ok(())
}

#[test]
fn test_example_json_escapes_non_ascii() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    generate(&config)?;

    let doc = fs::read_to_string(config.output_dir.join("players/playerdied.v1.md"))?;
    let json = extract_json_block(&doc);
    assert!(json.is_ascii());
    assert!(json.contains("  \"inParty\": true,"));
    assert!(json.contains("  \"killerId\": null,"));
    assert!(json.contains("  \"zoneName\": \"Fort Sterling \\u2013 Caf\\u00e9\""));
    Ok(())
}

#[test]
fn test_wildcard_uses_naive_domain_strip() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    generate(&config)?;

    let players = fs::read_to_string(config.output_dir.join("players/playerdied.v1.md"))?;
    assert!(players.contains("// - All players events: \"albion.event.player.*.v1\""));

    let markets =
        fs::read_to_string(config.output_dir.join("markets/marketorderplaced.v2.md"))?;
    assert!(markets.contains("// - All markets events: \"albion.event.market.*.v1\""));
    Ok(())
}

#[test]
fn test_every_trailing_s_is_stripped() -> Result<()> {
    let catalog = FIXTURE.replace("domain: markets", "domain: address");
    let (_temp_dir, config) = setup(&catalog)?;
    generate(&config)?;

    let doc = fs::read_to_string(config.output_dir.join("address/marketorderplaced.v2.md"))?;
    assert!(doc.contains("\"albion.event.addre.*.v1\""));
    Ok(())
}

#[test]
fn test_single_content_type_fails_to_render() -> Result<()> {
    let mut catalog = load_catalog(Path::new("tests/fixtures/_events.yaml"))?;
    catalog.exchange.content_types = vec!["json".to_string()];

    let err = MarkdownRenderer::default()
        .render(&catalog.events[0], &catalog.exchange)
        .unwrap_err();
    assert!(matches!(
        err,
        DocgenError::MissingContentType { index: 1, .. }
    ));
    Ok(())
}

#[test]
fn test_single_content_type_aborts_run() -> Result<()> {
    let catalog = FIXTURE.replace("  - json\n  - msgpack\n", "  - json\n");
    let (_temp_dir, config) = setup(&catalog)?;

    assert!(generate(&config).is_err());
    assert!(!config.output_dir.join("players/playerjoined.v1.md").exists());
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    let files = [
        "players/playerjoined.v1.md",
        "players/playerdied.v1.md",
        "markets/marketorderplaced.v2.md",
    ];

    generate(&config)?;
    let first = read_tree(&config.output_dir, &files)?;
    generate(&config)?;
    let second = read_tree(&config.output_dir, &files)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_existing_files_are_overwritten() -> Result<()> {
    let (_temp_dir, config) = setup(FIXTURE)?;
    let target = config.output_dir.join("players/playerjoined.v1.md");
    fs::create_dir_all(target.parent().unwrap())?;
    fs::write(&target, "stale")?;

    generate(&config)?;
    assert_eq!(fs::read_to_string(&target)?, PLAYER_JOINED_DOC);
    Ok(())
}

#[test]
fn test_missing_catalog_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GeneratorConfig {
        catalog_path: temp_dir.path().join("_events.yaml"),
        output_dir: temp_dir.path().to_path_buf(),
        ..GeneratorConfig::default()
    };

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DocgenError::CatalogReadError { .. }));
    Ok(())
}

#[test]
fn test_missing_event_field_is_reported() -> Result<()> {
    let catalog = FIXTURE.replace("    frequency: High\n", "");
    let (_temp_dir, config) = setup(&catalog)?;

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DocgenError::CatalogParseError { .. }));
    assert!(err.to_string().contains("frequency"));
    assert!(!config.output_dir.join("players").exists());
    Ok(())
}

#[test]
fn test_malformed_yaml_writes_nothing() -> Result<()> {
    let broken = FIXTURE.replace("  - name: PlayerDied\n", "  - name: [PlayerDied\n");
    let (_temp_dir, config) = setup(&broken)?;

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DocgenError::CatalogParseError { .. }));
    assert_eq!(fs::read_dir(&config.output_dir)?.count(), 0);
    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let (_temp_dir, mut config) = setup(FIXTURE)?;
    config.dry_run = true;
    config.overview = true;

    let summary = generate(&config)?;
    assert!(summary.dry_run);
    assert_eq!(summary.documents, 3);
    assert_eq!(fs::read_dir(&config.output_dir)?.count(), 0);
    Ok(())
}

#[test]
fn test_overview_index() -> Result<()> {
    let (_temp_dir, mut config) = setup(FIXTURE)?;
    config.overview = true;

    let summary = generate(&config)?;
    assert!(summary.overview_written);

    let overview = fs::read_to_string(config.output_dir.join("00-overview.md"))?;
    assert!(overview.starts_with("# Event Overview\n"));
    assert!(overview.contains(
        "| PlayerDied | `albion.event.player.died.v1` | v1 | [playerdied.v1.md](players/playerdied.v1.md) |"
    ));
    assert!(overview.find("## markets").unwrap() < overview.find("## players").unwrap());
    assert!(overview.contains("Total: 3 events"));
    Ok(())
}

#[test]
fn test_overview_follows_custom_link() -> Result<()> {
    let (_temp_dir, mut config) = setup(FIXTURE)?;
    config.overview = true;
    config.render.overview_link = "../index.md".to_string();

    generate(&config)?;

    let doc = fs::read_to_string(config.output_dir.join("players/playerjoined.v1.md"))?;
    assert!(doc.contains("- See [Event Overview](../index.md) for all available events"));
    assert!(config.output_dir.join("index.md").is_file());
    assert!(!config.output_dir.join("00-overview.md").exists());
    Ok(())
}

#[test]
fn test_overview_link_outside_root_is_rejected() -> Result<()> {
    let (_temp_dir, mut config) = setup(FIXTURE)?;
    config.overview = true;
    config.render.overview_link = "../../index.md".to_string();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, DocgenError::InvalidConfigValueError { .. }));
    assert_eq!(fs::read_dir(&config.output_dir)?.count(), 0);
    Ok(())
}
