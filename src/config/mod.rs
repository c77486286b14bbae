//! Configuration loading, parsing, and validation for cmdtree.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Keyed section processing in [`section`]
//! - The database connection section in [`database`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use cmdtree::config::{database_info, load_config_file, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("cmdtree.yml");
//! fs::write(&path, "name: test\ndatabase:\n  host: db\n  database: main\n").unwrap();
//!
//! let manifest = load_config_file(&path).unwrap();
//! validate(&manifest).unwrap();
//! assert_eq!(database_info(&manifest).unwrap().host(), "db");
//! ```

pub mod database;
pub mod loader;
pub mod schema;
pub mod section;
pub mod validator;

// Schema re-exports
pub use schema::{CommandEntry, Manifest};

// Loader re-exports
pub use loader::{
    find_config, load_config, load_config_file, load_config_value, parse_config,
    DEFAULT_CONFIG_FILE,
};

// Section re-exports
pub use section::{process_section, scalar_to_string, ConfigSection};

// Database re-exports
pub use database::{
    database_info, load_database_info, parse_port, DatabaseInfoSection, StructureInfo,
    StructureInfoBuilder,
};

// Validator re-exports
pub use validator::{validate, validate_manifest, ValidationError};
