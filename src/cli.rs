use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// AssetMini - provision and refresh the assets directory of a gears-assetmini install
#[derive(Parser, Debug)]
#[command(name = "assetmini")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root (the directory holding composer.json)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the package and target live, overriding configuration
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Installed package root (default: <project>/<vendor_dir>/<package_name>)
    #[arg(long)]
    pub package_root: Option<PathBuf>,

    /// Target directory, relative to the project root
    #[arg(short, long)]
    pub target: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the package skeleton into the target directory (if it does not exist)
    Install {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Refresh managed files that still carry the ownership signature
    Update {
        #[command(flatten)]
        paths: PathArgs,

        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,

        /// Hold an exclusive lock on the target while updating
        #[arg(long)]
        lock: bool,
    },

    /// Check whether a package type is handled by this installer (exit 1 if not)
    Supports {
        /// Package type, e.g. gears-assetmini
        package_type: String,
    },

    /// Print the resolved configuration
    Config,
}
