//! Common helpers for fv integration tests.
//!
//! Each `TestDoc` owns a temporary directory, so tests can run in parallel.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
pub use tempfile::TempDir;

pub struct TestDoc {
    pub dir: TempDir,
}

impl TestDoc {
    /// An empty directory with no features.json in it.
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// A directory holding `features.json` with `contents`.
    pub fn with(contents: &str) -> Self {
        let doc = Self::empty();
        std::fs::write(doc.path(), contents).unwrap();
        doc
    }

    /// Path of `features.json` inside the directory.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("features.json")
    }

    pub fn dir_path(&self) -> &Path {
        self.dir.path()
    }

    /// `fv` running in the document's directory with a fixed size and no tty.
    pub fn fv(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fv"));
        cmd.current_dir(self.dir.path());
        cmd.env_remove("COLUMNS").env_remove("LINES").env_remove("RUST_LOG");
        cmd.write_stdin("");
        cmd
    }
}
