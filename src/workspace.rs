//! Workspace operations for the `deploy/` descriptor directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::scaffold;

/// The descriptor directory name.
pub const DEPLOY_DIR: &str = "deploy";

/// Process-supervisor manifest file name.
pub const PROCESS_FILE: &str = "process.toml";

/// CSS build-tool descriptor file name.
pub const STYLESHEET_FILE: &str = "stylesheet.toml";

/// Represents a `deploy/` workspace rooted at a given directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// The root directory containing `deploy/`.
    root: PathBuf,
}

impl Workspace {
    /// Create a workspace instance for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a workspace instance for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the `deploy/` directory.
    pub fn deploy_path(&self) -> PathBuf {
        self.root.join(DEPLOY_DIR)
    }

    /// Path to `deploy/process.toml`.
    pub fn process_path(&self) -> PathBuf {
        self.deploy_path().join(PROCESS_FILE)
    }

    /// Path to `deploy/stylesheet.toml`.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.deploy_path().join(STYLESHEET_FILE)
    }

    /// Check if a `deploy/` directory exists.
    pub fn exists(&self) -> bool {
        self.deploy_path().exists()
    }

    /// Read a descriptor file from `deploy/`.
    pub fn read_descriptor(&self, file: &str) -> Result<String, AppError> {
        let path = self.deploy_path().join(file);
        if !path.exists() {
            return Err(AppError::DescriptorMissing(format!("{DEPLOY_DIR}/{file}")));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Create `deploy/` and write the embedded default descriptors.
    pub fn create_structure(&self) -> Result<(), AppError> {
        let deploy = self.deploy_path();
        fs::create_dir_all(&deploy)?;

        for entry in scaffold::scaffold_files() {
            let path = deploy.join(&entry.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, entry.content)?;
        }

        Ok(())
    }
}
