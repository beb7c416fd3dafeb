//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Roll five dice in your terminal.
#[derive(Debug, Parser)]
#[command(name = "rollfive", version, about)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of discarding them.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
