//! Database connection section.
//!
//! Processes a `database:` configuration section into an immutable
//! [`StructureInfo`] through a [`StructureInfoBuilder`]. Values are
//! validated as they are read, so an invalid section never yields a record.
//!
//! ```yaml
//! database:
//!   host: localhost
//!   port: 3306
//!   user: admin
//!   pass: secret
//!   database: main
//!   tables:
//!     users: demo_users
//! ```
//!
//! # Example
//!
//! ```
//! use cmdtree::config::DatabaseInfoSection;
//!
//! let mapping = serde_yaml::from_str("host: db\nport: 5432\ndatabase: main").unwrap();
//! let info = DatabaseInfoSection::from_mapping(&mapping)
//!     .and_then(|section| section.structure_info())
//!     .unwrap();
//! assert_eq!(info.host(), "db");
//! assert_eq!(info.port(), Some(5432));
//! ```

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::loader::load_config_file;
use crate::config::schema::Manifest;
use crate::config::section::{expect_scalar, process_section, string_map, ConfigSection};
use crate::error::{CmdTreeError, Result};

/// Database name key.
pub const DATABASE_KEY: &str = "database";

/// Server username key.
pub const USERNAME_KEY: &str = "user";

/// Server password key.
pub const PASSWORD_KEY: &str = "pass";

/// Table name mapping key.
pub const TABLES_KEY: &str = "tables";

/// Server address key.
pub const HOST_KEY: &str = "host";

/// Server port key.
pub const PORT_KEY: &str = "port";

/// Top-level manifest key holding the section.
pub const SECTION_KEY: &str = "database";

const KEYS: &[&str] = &[
    DATABASE_KEY,
    USERNAME_KEY,
    PASSWORD_KEY,
    TABLES_KEY,
    HOST_KEY,
    PORT_KEY,
];

/// Immutable database structure info produced by a processed section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureInfo {
    host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing)]
    password: Option<String>,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    tables: BTreeMap<String, String>,
}

impl StructureInfo {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Logical table name to actual table name.
    pub fn tables(&self) -> &BTreeMap<String, String> {
        &self.tables
    }
}

/// Builder for the immutable [`StructureInfo`].
#[derive(Debug, Clone, Default)]
pub struct StructureInfoBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    database: Option<String>,
    port: Option<u16>,
    tables: BTreeMap<String, String>,
}

impl StructureInfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = Some(host.into());
        self
    }

    pub fn username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    pub fn database(&mut self, database: impl Into<String>) -> &mut Self {
        self.database = Some(database.into());
        self
    }

    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    pub fn tables(&mut self, tables: BTreeMap<String, String>) -> &mut Self {
        self.tables = tables;
        self
    }

    /// Build the record.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if `host` or `database` was never set.
    pub fn build(&self) -> Result<StructureInfo> {
        let host = self.host.clone().ok_or_else(|| missing(HOST_KEY))?;
        let database = self.database.clone().ok_or_else(|| missing(DATABASE_KEY))?;

        Ok(StructureInfo {
            host,
            username: self.username.clone(),
            password: self.password.clone(),
            database,
            port: self.port,
            tables: self.tables.clone(),
        })
    }
}

fn missing(key: &str) -> CmdTreeError {
    CmdTreeError::ConfigValidationError {
        key: key.to_string(),
        message: "required key is missing".to_string(),
    }
}

/// Parse a port, accepting only ASCII digits that fit a `u16`.
pub fn parse_port(value: &str) -> Result<u16> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(CmdTreeError::ConfigValidationError {
            key: PORT_KEY.to_string(),
            message: format!("Cannot parse number \"{}\"", value),
        });
    }

    value
        .parse::<u16>()
        .map_err(|_| CmdTreeError::ConfigValidationError {
            key: PORT_KEY.to_string(),
            message: format!("Port {} is out of range", value),
        })
}

/// Section processor for database connection info.
#[derive(Debug, Default)]
pub struct DatabaseInfoSection {
    builder: StructureInfoBuilder,
}

impl DatabaseInfoSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a mapping into a new section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for the first invalid value.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        let mut section = Self::new();
        process_section(&mut section, mapping)?;
        Ok(section)
    }

    /// Process a raw section value, which must be a mapping.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mapping = value
            .as_mapping()
            .ok_or_else(|| CmdTreeError::ConfigValidationError {
                key: SECTION_KEY.to_string(),
                message: "expected a mapping".to_string(),
            })?;
        Self::from_mapping(mapping)
    }

    /// The builder collecting this section's values.
    pub fn builder(&self) -> &StructureInfoBuilder {
        &self.builder
    }

    /// The processed record.
    pub fn structure_info(&self) -> Result<StructureInfo> {
        self.builder.build()
    }
}

impl ConfigSection for DatabaseInfoSection {
    fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    fn on_key(&mut self, key: &str, value: &Value) -> Result<()> {
        match key {
            HOST_KEY => {
                self.builder.host(expect_scalar(key, value)?);
            }
            USERNAME_KEY => {
                self.builder.username(expect_scalar(key, value)?);
            }
            PASSWORD_KEY => {
                self.builder.password(expect_scalar(key, value)?);
            }
            DATABASE_KEY => {
                self.builder.database(expect_scalar(key, value)?);
            }
            PORT_KEY => {
                let port = parse_port(&expect_scalar(key, value)?)?;
                self.builder.port(port);
            }
            TABLES_KEY => {
                self.builder.tables(string_map(key, value)?);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Process the manifest's `database` section.
///
/// # Errors
///
/// Returns `ConfigValidationError` if the section is missing or invalid.
pub fn database_info(manifest: &Manifest) -> Result<StructureInfo> {
    let value = manifest.database.as_ref().ok_or_else(|| missing(SECTION_KEY))?;
    DatabaseInfoSection::from_value(value)?.structure_info()
}

/// Load a config file and process its `database` section.
pub fn load_database_info(path: &Path) -> Result<StructureInfo> {
    database_info(&load_config_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn process(yaml: &str) -> Result<StructureInfo> {
        let mapping: Mapping = serde_yaml::from_str(yaml).unwrap();
        DatabaseInfoSection::from_mapping(&mapping)?.structure_info()
    }

    #[test]
    fn full_section_builds_record() {
        let info = process(
            r#"
host: localhost
port: 3306
user: admin
pass: secret
database: main
tables:
  users: demo_users
  bans: demo_bans
"#,
        )
        .unwrap();

        assert_eq!(info.host(), "localhost");
        assert_eq!(info.port(), Some(3306));
        assert_eq!(info.username(), Some("admin"));
        assert_eq!(info.password(), Some("secret"));
        assert_eq!(info.database(), "main");
        assert_eq!(info.tables().len(), 2);
        assert_eq!(info.tables()["users"], "demo_users");
    }

    #[test]
    fn partial_section_can_be_completed_through_builder() {
        let mapping: Mapping = serde_yaml::from_str("host: h\nport: 3306").unwrap();
        let section = DatabaseInfoSection::from_mapping(&mapping).unwrap();
        assert!(section.structure_info().is_err());

        let mut builder = section.builder().clone();
        let info = builder.database("fallback").build().unwrap();
        assert_eq!(info.database(), "fallback");
        assert_eq!(info.port(), Some(3306));
    }

    #[test]
    fn quoted_numeric_port_is_accepted() {
        let info = process("host: h\ndatabase: d\nport: \"8080\"").unwrap();
        assert_eq!(info.port(), Some(8080));
    }

    #[test]
    fn non_numeric_port_fails_before_build() {
        let mapping: Mapping = serde_yaml::from_str("host: h\ndatabase: d\nport: 80a").unwrap();
        let err = DatabaseInfoSection::from_mapping(&mapping).unwrap_err();
        match err {
            CmdTreeError::ConfigValidationError { key, message } => {
                assert_eq!(key, "port");
                assert!(message.contains("80a"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn port_out_of_range_fails() {
        let err = process("host: h\ndatabase: d\nport: 70000").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn negative_port_fails() {
        assert!(process("host: h\ndatabase: d\nport: -1").is_err());
    }

    #[test]
    fn empty_port_fails() {
        assert!(parse_port("").is_err());
        assert_eq!(parse_port("0").unwrap(), 0);
    }

    #[test]
    fn missing_host_fails_on_build() {
        let err = process("database: d").unwrap_err();
        assert!(matches!(err, CmdTreeError::ConfigValidationError { ref key, .. } if key == "host"));
    }

    #[test]
    fn optional_fields_default() {
        let info = process("host: h\ndatabase: d").unwrap();
        assert_eq!(info.username(), None);
        assert_eq!(info.password(), None);
        assert_eq!(info.port(), None);
        assert!(info.tables().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let info = process("host: h\ndatabase: d\ncharset: utf8").unwrap();
        assert_eq!(info.host(), "h");
    }

    #[test]
    fn scalar_values_are_stringified() {
        let info = process("host: 10\ndatabase: true\npass: 1234").unwrap();
        assert_eq!(info.host(), "10");
        assert_eq!(info.database(), "true");
        assert_eq!(info.password(), Some("1234"));
    }

    #[test]
    fn tables_must_be_a_mapping() {
        let err = process("host: h\ndatabase: d\ntables: [a, b]").unwrap_err();
        assert!(matches!(err, CmdTreeError::ConfigValidationError { ref key, .. } if key == "tables"));
    }

    #[test]
    fn password_is_not_serialized() {
        let info = process("host: h\ndatabase: d\npass: secret").unwrap();
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"host\":\"h\""));
    }

    #[test]
    fn builder_is_reusable() {
        let mut builder = StructureInfoBuilder::new();
        builder.host("a").database("b").port(1);
        let first = builder.build().unwrap();
        builder.host("c");
        let second = builder.build().unwrap();
        assert_eq!(first.host(), "a");
        assert_eq!(second.host(), "c");
        assert_eq!(second.port(), Some(1));
    }

    #[test]
    fn database_info_requires_section() {
        let err = database_info(&Manifest::default()).unwrap_err();
        assert!(err.to_string().contains("database"));
    }

    #[test]
    fn database_section_must_be_mapping() {
        let manifest: Manifest = serde_yaml::from_str("database: nope").unwrap();
        assert!(database_info(&manifest).is_err());
    }

    #[test]
    fn load_database_info_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cmdtree.yml");
        fs::write(&path, "database:\n  host: db\n  database: main\n  port: 5432\n").unwrap();

        let info = load_database_info(&path).unwrap();
        assert_eq!(info.host(), "db");
        assert_eq!(info.port(), Some(5432));
    }
}
