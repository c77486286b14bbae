//! cmdtree CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use cmdtree::cli::{Cli, CliDispatcher};
use cmdtree::sender::{should_use_colors, CommandSender, ConsoleSender, SenderTheme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cmdtree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cmdtree=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cmdtree starting with args: {:?}", cli);

    let theme = if cli.no_color || !should_use_colors() {
        SenderTheme::plain()
    } else {
        SenderTheme::new()
    };
    let mut sender = ConsoleSender::with_theme(cli.sender.as_str(), theme.clone());

    let project_root = std::env::current_dir().unwrap_or_default();
    let dispatcher = CliDispatcher::new(project_root, cli.config.clone(), theme);

    match dispatcher.dispatch(&cli, &mut sender) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            sender.send_error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
