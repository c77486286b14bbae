//! Keyed processing of YAML configuration sections.
//!
//! A [`ConfigSection`] names the keys it understands and receives each one
//! that is present. Unknown keys are ignored, and null values count as
//! absent.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

use crate::error::{CmdTreeError, Result};

/// A handler for one configuration section.
pub trait ConfigSection {
    /// Recognised keys, in processing order.
    fn keys(&self) -> &'static [&'static str];

    /// Handle one present key.
    fn on_key(&mut self, key: &str, value: &Value) -> Result<()>;
}

/// Feed every recognised key present in `mapping` to `section`.
///
/// # Errors
///
/// Stops at the first key the section rejects.
pub fn process_section(section: &mut dyn ConfigSection, mapping: &Mapping) -> Result<()> {
    for key in section.keys() {
        match mapping.get(*key) {
            None | Some(Value::Null) => continue,
            Some(value) => section.on_key(key, value)?,
        }
    }
    Ok(())
}

/// Render a scalar the way it was written: strings as-is, numbers and bools
/// in their canonical form. Returns None for nulls, sequences and mappings.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Like [`scalar_to_string`], but a non-scalar is a validation error for `key`.
pub fn expect_scalar(key: &str, value: &Value) -> Result<String> {
    scalar_to_string(value).ok_or_else(|| CmdTreeError::ConfigValidationError {
        key: key.to_string(),
        message: "expected a scalar value".to_string(),
    })
}

/// Flatten a mapping of scalars into string pairs.
///
/// # Errors
///
/// Fails when `value` is not a mapping or holds a non-scalar entry.
pub fn string_map(key: &str, value: &Value) -> Result<BTreeMap<String, String>> {
    let mapping = value
        .as_mapping()
        .ok_or_else(|| CmdTreeError::ConfigValidationError {
            key: key.to_string(),
            message: "expected a mapping".to_string(),
        })?;

    let mut map = BTreeMap::new();
    for (entry_key, entry_value) in mapping {
        let name = expect_scalar(key, entry_key)?;
        let entry = expect_scalar(&format!("{}.{}", key, name), entry_value)?;
        map.insert(name, entry);
    }
    Ok(map)
}
