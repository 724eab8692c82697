//! AssetMini CLI
//!
//! Usage: assetmini <COMMAND>
//!
//! Commands:
//!   install   Copy the package skeleton into the target directory
//!   update    Refresh managed files that still carry the ownership signature
//!   supports  Check whether a package type is handled
//!   config    Print the resolved configuration

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Install { paths } => commands::install::cmd_install(&cli.project, &paths, cli.json),
        Commands::Update {
            paths,
            dry_run,
            lock,
        } => commands::update::cmd_update(&cli.project, &paths, dry_run, lock, cli.json),
        Commands::Supports { package_type } => {
            let supported = commands::supports::cmd_supports(&cli.project, &package_type, cli.json)?;
            if !supported {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Config => commands::config::cmd_config(&cli.project, cli.json),
    }
}

/// Log to stderr so stdout stays clean for `--json`.
///
/// `ASSETMINI_LOG` takes a full filter directive; otherwise `-v` raises the
/// level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ASSETMINI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("assetmini={level}")));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(ui::terminal::stderr_supports_color())
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
