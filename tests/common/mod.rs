//! Shared helpers for spawning the menucli binary in isolation.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the menucli binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Temporary working directory and config home for one test
pub struct TestEnv {
    pub cwd: TempDir,
    pub home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            cwd: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.cwd.path().join("menucli.toml"), content).unwrap();
    }

    pub fn path(&self, relative: &str) -> std::path::PathBuf {
        self.cwd.path().join(relative)
    }

    /// Command with color off and no user config leaking in
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_menucli"));
        cmd.current_dir(self.cwd.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("MENUCLI_ROOT_TITLE")
            .env_remove("MENUCLI_BLANK_LINES")
            .env_remove("MENUCLI_COLOR")
            .env_remove("MENUCLI_PROMPT")
            .env_remove("MENUCLI_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command();
        cmd.args(args);
        for (k, v) in vars {
            cmd.env(k, v);
        }
        cmd.output().unwrap().into()
    }

    /// Run interactively, feeding `input` on stdin
    pub fn run_interactive(&self, args: &[&str], input: &str) -> TestResult {
        run_with_stdin(self.command().args(args), input)
    }

    pub fn home_path(&self) -> &Path {
        self.home.path()
    }
}

pub fn run_with_stdin(cmd: &mut Command, input: &str) -> TestResult {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap().into()
}
