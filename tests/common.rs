//! Shared test utilities for integration tests.
//!
//! Provides fixture directories, formatters and helpers for running the
//! `standup` binary.

#![allow(dead_code)]

use anyhow::{Context, Result};
use standup::{PrefixProfileUrl, StaticDirectory, UpdateFormatter};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Creates formatter knowing the given user slugs, default profile URLs.
pub fn formatter(slugs: &[&str]) -> UpdateFormatter<StaticDirectory, PrefixProfileUrl> {
    UpdateFormatter::new(
        StaticDirectory::new(slugs.iter().copied()),
        PrefixProfileUrl::default(),
    )
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Runs the standup binary with arguments and optional stdin.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or waited on
pub fn run_standup(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_standup"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("Failed to spawn standup")?;

    {
        let mut pipe = child.stdin.take().context("No stdin pipe")?;
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes())?;
        }
    }

    Ok(child.wait_with_output()?)
}
