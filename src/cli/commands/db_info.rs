//! `cmdtree db-info` - show the processed `database` section.
//!
//! The password is never printed.

use crate::cli::args::DbInfoArgs;
use crate::config::{database_info, Manifest, StructureInfo};
use crate::error::Result;
use crate::sender::CommandSender;

use super::dispatcher::{CliCommand, CommandResult};

/// The db-info command implementation.
pub struct DbInfoCommand {
    manifest: Manifest,
    args: DbInfoArgs,
}

impl DbInfoCommand {
    pub fn new(manifest: Manifest, args: DbInfoArgs) -> Self {
        Self { manifest, args }
    }
}

/// Human-readable lines describing `info`.
pub fn describe(info: &StructureInfo) -> Vec<String> {
    let mut lines = vec![
        format!("host: {}", info.host()),
        format!("database: {}", info.database()),
    ];
    if let Some(port) = info.port() {
        lines.push(format!("port: {}", port));
    }
    if let Some(username) = info.username() {
        lines.push(format!("user: {}", username));
    }
    if info.password().is_some() {
        lines.push("pass: ********".to_string());
    }
    if !info.tables().is_empty() {
        lines.push("tables:".to_string());
        for (logical, actual) in info.tables() {
            lines.push(format!("  {} -> {}", logical, actual));
        }
    }
    lines
}

impl CliCommand for DbInfoCommand {
    fn execute(&self, sender: &mut dyn CommandSender) -> Result<CommandResult> {
        let info = database_info(&self.manifest)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&info)
                .map_err(|e| anyhow::anyhow!("Failed to serialize database info: {}", e))?;
            sender.send_message(&json);
        } else {
            for line in describe(&info) {
                sender.send_message(&line);
            }
        }

        Ok(CommandResult::success())
    }
}
