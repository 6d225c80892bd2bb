//! Shared testing utilities for semcfg CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory per test.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `semcfg` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("semcfg").expect("Failed to locate semcfg binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the deploy/ directory in the work directory.
    pub fn deploy_path(&self) -> PathBuf {
        self.work_dir.join("deploy")
    }

    /// Path to deploy/process.toml.
    pub fn process_path(&self) -> PathBuf {
        self.deploy_path().join("process.toml")
    }

    /// Path to deploy/stylesheet.toml.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.deploy_path().join("stylesheet.toml")
    }

    /// Overwrite deploy/process.toml with the given content.
    pub fn write_process(&self, content: &str) {
        fs::write(self.process_path(), content).expect("Failed to write process.toml");
    }

    /// Overwrite deploy/stylesheet.toml with the given content.
    pub fn write_stylesheet(&self, content: &str) {
        fs::write(self.stylesheet_path(), content).expect("Failed to write stylesheet.toml");
    }

    /// Assert the deploy/ directory and both descriptors exist.
    pub fn assert_deploy_exists(&self) {
        assert!(self.deploy_path().is_dir(), "deploy/ directory missing");
        assert!(self.process_path().is_file(), "process.toml missing");
        assert!(self.stylesheet_path().is_file(), "stylesheet.toml missing");
    }
}
