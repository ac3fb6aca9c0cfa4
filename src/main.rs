//! # fv - Feature Viewer
//!
//! A read-only terminal dashboard for a `features.json` tracking document.
//!
//! ## Views
//!
//! - **Dashboard**: overall progress, per-epic bars, recent activity and the next
//!   features to pick up
//! - **Epic**: every feature in one epic with its status and dependencies
//! - **Feature**: full detail for one feature, including what it blocks and unlocks
//! - **Help**: key bindings and the status legend
//!
//! ## Quick Start
//!
//! ```bash
//! # View features.json in the current directory
//! fv
//!
//! # View a specific file
//! fv path/to/features.json
//!
//! # Print a single frame (stdin not a terminal)
//! fv --width 100 < /dev/null
//! ```
//!
//! The document is a JSON array of feature objects; only `id` is required.
//! Nothing is ever written back.

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod feature;
pub mod fields;
pub mod logging;
pub mod model;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod frame;
    pub mod input;
    pub mod nav;
    pub mod run;
    pub mod style;
    pub mod views;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        cmd_completions(shell);
        return;
    }

    if let Err(e) = logging::init_logging(cli.log_file.as_deref(), &cli.log_level) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    cmd_view(&cli.path, cli.width, cli.height);
}
