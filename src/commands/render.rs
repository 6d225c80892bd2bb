//! Render command: produce the tool-facing JavaScript artifacts.

use std::fs;
use std::path::PathBuf;

use crate::domain::{parse_process_manifest, parse_stylesheet_config};
use crate::error::AppError;
use crate::render::{ECOSYSTEM_ARTIFACT, TAILWIND_ARTIFACT, render_ecosystem, render_tailwind};
use crate::workspace::{PROCESS_FILE, STYLESHEET_FILE, Workspace};

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Output directory for rendered artifacts (defaults to the workspace root).
    pub out: Option<PathBuf>,
}

/// Paths written by a completed render run.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub written: Vec<PathBuf>,
}

/// Execute the render command.
///
/// Descriptors are validated before anything is written; an invalid
/// descriptor leaves the output directory untouched.
pub fn execute(workspace: &Workspace, options: &RenderOptions) -> Result<RenderResult, AppError> {
    if !workspace.exists() {
        return Err(AppError::DeployNotFound);
    }

    let manifest = parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE)?)?;
    let stylesheet = parse_stylesheet_config(&workspace.read_descriptor(STYLESHEET_FILE)?)?;

    let artifacts = [
        (ECOSYSTEM_ARTIFACT, render_ecosystem(&manifest)?),
        (TAILWIND_ARTIFACT, render_tailwind(&stylesheet)?),
    ];

    let out_dir = options.out.clone().unwrap_or_else(|| workspace.root().to_path_buf());
    fs::create_dir_all(&out_dir)?;

    let mut written = Vec::new();
    for (artifact, content) in artifacts {
        let path = out_dir.join(artifact);
        fs::write(&path, content)?;
        written.push(path);
    }

    Ok(RenderResult { written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{self, InitOptions};
    use tempfile::TempDir;

    #[test]
    fn render_writes_both_artifacts() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf());
        init::execute(&workspace, &InitOptions::default()).unwrap();

        let result = execute(&workspace, &RenderOptions::default()).unwrap();

        assert_eq!(result.written.len(), 2);
        let ecosystem = fs::read_to_string(dir.path().join(ECOSYSTEM_ARTIFACT)).unwrap();
        assert!(ecosystem.contains("API_GETAWAY_SEMAFOROS"));
        let tailwind = fs::read_to_string(dir.path().join(TAILWIND_ARTIFACT)).unwrap();
        assert!(tailwind.contains(r#"require("daisyui")"#));
    }

    #[test]
    fn render_honors_output_directory() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf());
        init::execute(&workspace, &InitOptions::default()).unwrap();

        let out = dir.path().join("dist");
        execute(&workspace, &RenderOptions { out: Some(out.clone()) }).unwrap();

        assert!(out.join(ECOSYSTEM_ARTIFACT).is_file());
        assert!(out.join(TAILWIND_ARTIFACT).is_file());
    }

    #[test]
    fn render_rejects_invalid_descriptor() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf());
        init::execute(&workspace, &InitOptions::default()).unwrap();
        fs::write(workspace.process_path(), "apps = []\n").unwrap();

        let result = execute(&workspace, &RenderOptions::default());

        assert!(matches!(result, Err(AppError::NoApps)));
        assert!(!dir.path().join(ECOSYSTEM_ARTIFACT).exists());
    }
}
