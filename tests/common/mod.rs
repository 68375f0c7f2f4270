//! Common test utilities for notifier CLI tests.
//!
//! - `run_notifier`: run the built binary with a clean environment
//! - `ConfigFile`: a temp config file that lives as long as the test

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub const CANONICAL_OUTPUT: &str = "User: Sending user email to john smith\n\
Admin: Sending admin email to john smith. The email address is \"john@example.com\".\n";

/// Result of running the notifier CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run the notifier binary with `args`, plus extra environment variables.
///
/// `NOTIFIER_*` and `RUST_LOG` from the outer environment are removed first.
pub fn run_notifier(args: &[&str], envs: &[(&str, &str)]) -> TestResult {
    let bin = env!("CARGO_BIN_EXE_notifier");

    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env_remove("NOTIFIER_FORMAT")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().expect("failed to run notifier binary");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run the notifier binary with its stdout pipe closed before it writes.
///
/// Only stderr is captured.
pub fn run_notifier_closed_stdout(args: &[&str]) -> TestResult {
    let bin = env!("CARGO_BIN_EXE_notifier");

    let mut child = Command::new(bin)
        .args(args)
        .env_remove("NOTIFIER_FORMAT")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn notifier binary");
    drop(child.stdout.take());

    let output = child
        .wait_with_output()
        .expect("failed to wait for notifier binary");
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::new(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// A config file in its own temp directory
pub struct ConfigFile {
    _dir: TempDir,
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("notifier.toml");
        std::fs::write(&path, contents).expect("write config");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 temp path")
    }
}

/// Parse NDJSON stdout into values
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
        .collect()
}
