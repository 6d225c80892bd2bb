//! Show command: print a resolved descriptor.

use crate::domain::{parse_process_manifest, parse_stylesheet_config};
use crate::error::AppError;
use crate::workspace::{PROCESS_FILE, STYLESHEET_FILE, Workspace};

/// Which descriptor to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    Process,
    Stylesheet,
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Json,
    Toml,
}

/// Execute the show command, returning the rendered descriptor.
pub fn execute(
    workspace: &Workspace,
    descriptor: Descriptor,
    format: ShowFormat,
) -> Result<String, AppError> {
    if !workspace.exists() {
        return Err(AppError::DeployNotFound);
    }

    let rendered = match descriptor {
        Descriptor::Process => {
            let manifest = parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE)?)?;
            match format {
                ShowFormat::Json => serde_json::to_string_pretty(&manifest)?,
                ShowFormat::Toml => toml::to_string_pretty(&manifest)?,
            }
        }
        Descriptor::Stylesheet => {
            let config = parse_stylesheet_config(&workspace.read_descriptor(STYLESHEET_FILE)?)?;
            match format {
                ShowFormat::Json => serde_json::to_string_pretty(&config)?,
                ShowFormat::Toml => toml::to_string_pretty(&config)?,
            }
        }
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{self, InitOptions};
    use tempfile::TempDir;

    fn scaffolded_workspace(dir: &TempDir) -> Workspace {
        let workspace = Workspace::new(dir.path().to_path_buf());
        init::execute(&workspace, &InitOptions::default()).unwrap();
        workspace
    }

    #[test]
    fn show_process_as_json_exposes_defaults() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let rendered = execute(&workspace, Descriptor::Process, ShowFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let app = &value["apps"][0];
        assert_eq!(app["name"], "API_GETAWAY_SEMAFOROS");
        assert_eq!(app["instances"], 1);
        assert_eq!(app["autorestart"], true);
        assert_eq!(app["env"]["NODE_ENV"], "production");
    }

    #[test]
    fn show_stylesheet_as_toml_round_trips() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let rendered = execute(&workspace, Descriptor::Stylesheet, ShowFormat::Toml).unwrap();
        let reparsed = parse_stylesheet_config(&rendered).unwrap();

        assert_eq!(reparsed.themes[0].colors["primary"], "#009485");
    }
}
