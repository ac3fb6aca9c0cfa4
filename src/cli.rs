use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Read-only terminal dashboard for a features.json file.
/// Renders one frame and exits when stdin is not a terminal.
#[derive(Parser)]
#[command(name = "fv", version, about = "Feature progress viewer for features.json")]
pub struct Cli {
    /// Path to the features document.
    #[arg(default_value = "features.json")]
    pub path: PathBuf,

    /// Override the detected terminal width.
    #[arg(long, value_name = "N")]
    pub width: Option<u16>,

    /// Override the detected terminal height.
    #[arg(long, value_name = "N")]
    pub height: Option<u16>,

    /// Append diagnostic logs to this file.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `feature_viewer=debug`.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}
