//! Integration tests for config module public API.

use cmdtree::config::{
    load_config, load_database_info, parse_port, process_section, validate, ConfigSection,
    DatabaseInfoSection, Manifest, DEFAULT_CONFIG_FILE,
};
use cmdtree::CmdTreeError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn public_api_is_accessible() {
    let _manifest = Manifest::default();
    let _section = DatabaseInfoSection::new();
    assert_eq!(DEFAULT_CONFIG_FILE, "cmdtree.yml");
}

#[test]
fn full_config_workflow() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        temp.path().join(DEFAULT_CONFIG_FILE),
        r#"
name: demo
commands:
  account:
    aliases: [acct]
database:
  host: db.internal
  database: game
  port: 3306
  tables:
    players: tbl_players
    scores: tbl_scores
"#,
    )
    .unwrap();

    let manifest = load_config(&nested, None).unwrap();
    validate(&manifest).unwrap();
    assert_eq!(manifest.name.as_deref(), Some("demo"));
    assert_eq!(manifest.commands["account"].aliases, vec!["acct"]);

    let info = load_database_info(&temp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
    assert_eq!(info.host(), "db.internal");
    assert_eq!(info.port(), Some(3306));
    assert_eq!(info.tables()["scores"], "tbl_scores");
}

#[test]
fn bad_port_fails_before_structure_info() {
    assert!(parse_port("80a").is_err());
    assert!(parse_port("70000").is_err());
    assert_eq!(parse_port("8080").unwrap(), 8080);

    let mapping: serde_yaml::Mapping =
        serde_yaml::from_str("host: h\ndatabase: d\nport: 80a\n").unwrap();
    let err = DatabaseInfoSection::from_mapping(&mapping).unwrap_err();
    assert!(matches!(err, CmdTreeError::ConfigValidationError { .. }));
}

#[test]
fn custom_sections_see_only_their_keys() {
    #[derive(Default)]
    struct Greeting {
        seen: Vec<String>,
    }

    impl ConfigSection for Greeting {
        fn keys(&self) -> &'static [&'static str] {
            &["hello", "bye"]
        }

        fn on_key(&mut self, key: &str, _value: &serde_yaml::Value) -> cmdtree::Result<()> {
            self.seen.push(key.to_string());
            Ok(())
        }
    }

    let mapping: serde_yaml::Mapping =
        serde_yaml::from_str("bye: 1\nother: 2\nhello: 3\n").unwrap();
    let mut section = Greeting::default();
    process_section(&mut section, &mapping).unwrap();

    assert_eq!(section.seen, vec!["hello", "bye"]);
}

#[test]
fn missing_explicit_config_is_not_found() {
    let err = load_config(Path::new("."), Some(Path::new("/nonexistent/cmdtree.yml"))).unwrap_err();
    assert!(matches!(err, CmdTreeError::ConfigNotFound { .. }));
}
