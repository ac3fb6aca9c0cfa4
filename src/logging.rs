//! Diagnostic logging.
//!
//! The terminal belongs to the dashboard, so records never go to stdout or
//! stderr: they are written to `--log-file` when given and dropped otherwise.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logging(log_file: Option<&Path>, level: &str) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            // Ignore a subscriber already installed by an embedding caller.
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        },
        None => {
            let _ = builder.with_writer(io::sink).try_init();
        },
    }
    Ok(())
}
