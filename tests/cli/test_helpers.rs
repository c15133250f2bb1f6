//! Shared helpers for CLI command tests

use kewl::cli::commands::input::{MatchArgs, TextArgs};
use std::path::PathBuf;
use tempfile::TempDir;

/// Text given inline with --text
pub fn inline(text: &str) -> TextArgs {
    TextArgs {
        text: Some(text.to_string()),
        file: None,
    }
}

/// Write `contents` into a temp file; keep the TempDir alive
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}

/// No match flags given
pub fn no_flags() -> MatchArgs {
    MatchArgs::default()
}
