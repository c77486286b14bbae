//! Configuration file discovery and loading.

use crate::config::schema::Manifest;
use crate::error::{CmdTreeError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cmdtree.yml";

/// Find the nearest config file by walking up from `start`.
///
/// # Returns
///
/// The path to `cmdtree.yml` in `start` or its closest ancestor, or None.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into a Manifest.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<Manifest> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into a Manifest.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|e| CmdTreeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML Value.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    serde_yaml::from_str(&content).map_err(|e| CmdTreeError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config at `config_override`, or the nearest one above `start`.
///
/// A missing file is only an error when it was asked for explicitly;
/// otherwise an empty manifest is returned.
pub fn load_config(start: &Path, config_override: Option<&Path>) -> Result<Manifest> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match find_config(start) {
        Some(path) => load_config_file(&path),
        None => Ok(Manifest::default()),
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CmdTreeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CmdTreeError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "name: test").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, temp.path().join(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "name: test").unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, temp.path().join(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_file_parses_valid_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("cmdtree.yml");
        fs::write(&config_path, "name: TestHost").unwrap();

        let manifest = load_config_file(&config_path).unwrap();
        assert_eq!(manifest.name, Some("TestHost".to_string()));
    }

    #[test]
    fn load_config_file_returns_not_found_error() {
        let result = load_config_file(Path::new("/nonexistent/cmdtree.yml"));
        assert!(matches!(result, Err(CmdTreeError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let content = "invalid: yaml: content: [";
        let result = parse_config(content, Path::new("test.yml"));
        assert!(matches!(result, Err(CmdTreeError::ConfigParseError { .. })));
    }

    #[test]
    fn load_config_value_returns_raw_value() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("cmdtree.yml");
        fs::write(&config_path, "key: value\nnested:\n  inner: 42").unwrap();

        let value = load_config_value(&config_path).unwrap();
        assert_eq!(value["key"], "value");
        assert_eq!(value["nested"]["inner"], 42);
    }

    #[test]
    fn load_config_file_handles_empty_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("cmdtree.yml");
        fs::write(&config_path, "").unwrap();

        let manifest = load_config_file(&config_path).unwrap();
        assert!(manifest.name.is_none());
        assert!(manifest.commands.is_empty());
    }

    #[test]
    fn load_config_with_override() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.yml");
        fs::write(&custom, "name: custom").unwrap();

        let manifest = load_config(temp.path(), Some(&custom)).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("custom"));
    }

    #[test]
    fn load_config_with_missing_override_fails() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("missing.yml")));
        assert!(matches!(result, Err(CmdTreeError::ConfigNotFound { .. })));
    }
}
