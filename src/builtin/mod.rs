//! Built-in demonstration commands.
//!
//! - [`account`] - `account [name] [-v] [info | grant <perm>... [notify]]`
//! - [`ping`] - `ping [args...]`
//!
//! [`command_map`] binds all of them into a routing table, reusing any
//! bindings the manifest declares.

pub mod account;
pub mod ping;

use crate::command::CommandNode;
use crate::config::Manifest;
use crate::registry::{register, CommandMap};

/// Every built-in root command.
pub fn builtin_commands() -> Vec<CommandNode> {
    vec![account::account(), ping::ping()]
}

/// Routing table holding the manifest's declarations and every built-in.
pub fn command_map(manifest: &Manifest) -> CommandMap {
    let mut map = CommandMap::from_manifest(manifest);
    for node in builtin_commands() {
        register(&mut map, node);
    }
    map
}

/// Candidates starting with `partial`, case-insensitively, in their given order.
pub fn complete_from(candidates: &[&str], partial: Option<&str>) -> Vec<String> {
    let prefix = partial.unwrap_or("").to_ascii_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&prefix))
        .map(|candidate| candidate.to_string())
        .collect()
}
