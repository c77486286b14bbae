//! Configuration schema definitions for cmdtree.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure for cmdtree.yml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Name of the host or plugin owning these commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command bindings declared up front
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub commands: BTreeMap<String, CommandEntry>,

    /// Raw database section, processed by
    /// [`DatabaseInfoSection`](crate::config::DatabaseInfoSection)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<serde_yaml::Value>,
}

/// A declared command binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandEntry {
    /// Short description shown in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Usage line shown in listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Alternative names routed to the same command
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}
