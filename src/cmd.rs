use std::io::{self, IsTerminal, Write};
use std::path::Path;

use clap_complete::{generate, Shell};

use crate::model::Model;
use crate::tui::app::App;
use crate::tui::run::run_tui;

const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 24;

/// Pick the first usable dimension: flag, environment, terminal, default.
fn pick(flag: Option<u16>, env: Option<&str>, terminal: Option<u16>, default: usize) -> usize {
    flag.map(usize::from)
        .filter(|&n| n > 0)
        .or_else(|| env.and_then(|v| v.trim().parse::<usize>().ok()).filter(|&n| n > 0))
        .or_else(|| terminal.map(usize::from).filter(|&n| n > 0))
        .unwrap_or(default)
}

/// Resolve the output size for one-shot rendering.
pub fn detect_size(width: Option<u16>, height: Option<u16>) -> (usize, usize) {
    let terminal = crossterm::terminal::size().ok();
    let columns = std::env::var("COLUMNS").ok();
    let lines = std::env::var("LINES").ok();
    (
        pick(width, columns.as_deref(), terminal.map(|(w, _)| w), DEFAULT_WIDTH),
        pick(height, lines.as_deref(), terminal.map(|(_, h)| h), DEFAULT_HEIGHT),
    )
}

/// Load the document and show the dashboard.
///
/// Interactive when stdin is a terminal, otherwise prints a single frame.
pub fn cmd_view(path: &Path, width: Option<u16>, height: Option<u16>) {
    let model = match Model::load(path) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(error = %e, "load failed");
            eprintln!("{e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            std::process::exit(1);
        },
    };

    let mut app = App::new(model, path);

    if !io::stdin().is_terminal() {
        let (width, height) = detect_size(width, height);
        tracing::info!(width, height, "stdin is not a terminal, printing one frame");
        let mut out = io::stdout().lock();
        for line in app.frame(width, height) {
            if writeln!(out, "{line}").is_err() {
                return;
            }
        }
        let _ = out.flush();
        return;
    }

    tracing::info!("starting interactive dashboard");
    if let Err(e) = run_tui(&mut app) {
        tracing::error!(error = %e, "terminal failure");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut io::stdout());
}
