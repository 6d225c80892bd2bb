//! Template command: append a descriptor entry from a built-in starter.

use std::collections::BTreeMap;
use std::fs;

use crate::domain::{AppSpec, ThemeSpec, parse_process_manifest, parse_stylesheet_config};
use crate::error::AppError;
use crate::workspace::{PROCESS_FILE, STYLESHEET_FILE, Workspace};

/// Starting colors for a new theme, matching the embedded default palette.
const STARTER_COLORS: [(&str, &str); 9] = [
    ("primary", "#009485"),
    ("secondary", "#8b5cf6"),
    ("accent", "#22d3ee"),
    ("neutral", "#a855f7"),
    ("base-100", "#ffffff"),
    ("info", "#4ade80"),
    ("success", "#448aff"),
    ("warning", "#ffa65c"),
    ("error", "#ff0000"),
];

/// Which descriptor entry to scaffold.
#[derive(Debug, Clone)]
pub enum TemplateTarget {
    /// A managed app appended to process.toml.
    App { name: String, script: String },
    /// A named palette appended to stylesheet.toml.
    Theme { name: String },
}

/// Describes the created descriptor entry.
#[derive(Debug, Clone)]
pub enum TemplateOutcome {
    App { name: String },
    Theme { name: String },
}

impl TemplateOutcome {
    /// Descriptor file the entry was added to.
    pub fn file(&self) -> &'static str {
        match self {
            TemplateOutcome::App { .. } => PROCESS_FILE,
            TemplateOutcome::Theme { .. } => STYLESHEET_FILE,
        }
    }
}

/// Execute the template command.
///
/// The descriptor is re-validated with the new entry before anything is
/// written; a rejected entry leaves the file untouched.
pub fn execute(workspace: &Workspace, target: TemplateTarget) -> Result<TemplateOutcome, AppError> {
    if !workspace.exists() {
        return Err(AppError::DeployNotFound);
    }

    match target {
        TemplateTarget::App { name, script } => add_app(workspace, name, script),
        TemplateTarget::Theme { name } => add_theme(workspace, name),
    }
}

fn add_app(
    workspace: &Workspace,
    name: String,
    script: String,
) -> Result<TemplateOutcome, AppError> {
    let mut manifest = parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE)?)?;

    if manifest.apps.iter().any(|app| app.name == name) {
        return Err(AppError::AppExists(name));
    }

    manifest.apps.push(AppSpec {
        name: name.clone(),
        script,
        instances: 1,
        autorestart: true,
        watch: false,
        max_memory_restart: None,
        env: BTreeMap::new(),
    });
    manifest.validate()?;

    fs::write(workspace.process_path(), toml::to_string_pretty(&manifest)?)?;
    Ok(TemplateOutcome::App { name })
}

fn add_theme(workspace: &Workspace, name: String) -> Result<TemplateOutcome, AppError> {
    let mut config = parse_stylesheet_config(&workspace.read_descriptor(STYLESHEET_FILE)?)?;

    if config.themes.iter().any(|theme| theme.name == name) {
        return Err(AppError::ThemeExists(name));
    }

    config.themes.push(ThemeSpec { name: name.clone(), colors: starter_palette() });
    config.validate()?;

    fs::write(workspace.stylesheet_path(), toml::to_string_pretty(&config)?)?;
    Ok(TemplateOutcome::Theme { name })
}

fn starter_palette() -> BTreeMap<String, String> {
    STARTER_COLORS
        .into_iter()
        .map(|(role, value)| (role.to_string(), value.to_string()))
        .collect()
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
    fn template_requires_workspace() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().to_path_buf());

        let result = execute(
            &workspace,
            TemplateTarget::App { name: "admin_ui".into(), script: "docker-compose up admin".into() },
        );
        assert!(matches!(result, Err(AppError::DeployNotFound)));
    }

    #[test]
    fn template_app_appends_supervised_entry() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let outcome = execute(
            &workspace,
            TemplateTarget::App { name: "admin_ui".into(), script: "docker-compose up admin".into() },
        )
        .unwrap();
        assert_eq!(outcome.file(), PROCESS_FILE);

        let manifest =
            parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE).unwrap()).unwrap();
        assert_eq!(manifest.apps.len(), 2);

        let app = &manifest.apps[1];
        assert_eq!(app.name, "admin_ui");
        assert_eq!(app.script, "docker-compose up admin");
        assert_eq!(app.instances, 1);
        assert!(app.autorestart);
        assert!(!app.watch);
    }

    #[test]
    fn template_app_rejects_duplicate_name() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let result = execute(
            &workspace,
            TemplateTarget::App {
                name: "API_GETAWAY_SEMAFOROS".into(),
                script: "docker-compose up".into(),
            },
        );
        assert!(matches!(result, Err(AppError::AppExists(_))));

        let manifest =
            parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE).unwrap()).unwrap();
        assert_eq!(manifest.apps.len(), 1);
    }

    #[test]
    fn template_app_rejects_empty_name_without_writing() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let result = execute(
            &workspace,
            TemplateTarget::App { name: String::new(), script: "docker-compose up admin".into() },
        );
        assert!(matches!(result, Err(AppError::EmptyAppField { field: "name", .. })));

        let manifest =
            parse_process_manifest(&workspace.read_descriptor(PROCESS_FILE).unwrap()).unwrap();
        assert_eq!(manifest.apps.len(), 1);
    }

    #[test]
    fn template_theme_seeds_default_palette() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        execute(&workspace, TemplateTarget::Theme { name: "corporate".into() }).unwrap();

        let config =
            parse_stylesheet_config(&workspace.read_descriptor(STYLESHEET_FILE).unwrap()).unwrap();
        assert_eq!(config.themes.len(), 2);

        let theme = &config.themes[1];
        assert_eq!(theme.name, "corporate");
        assert_eq!(theme.colors.len(), 9);
        assert_eq!(theme.colors["primary"], "#009485");
        assert!(config.unknown_roles().is_empty());
    }

    #[test]
    fn template_theme_rejects_duplicate_name() {
        let dir = TempDir::new().unwrap();
        let workspace = scaffolded_workspace(&dir);

        let result = execute(&workspace, TemplateTarget::Theme { name: "mytheme".into() });
        assert!(matches!(result, Err(AppError::ThemeExists(_))));
    }

    #[test]
    fn starter_palette_matches_embedded_default() {
        let content = crate::scaffold::scaffold_files()
            .into_iter()
            .find(|file| file.path == STYLESHEET_FILE)
            .unwrap()
            .content;
        let config = parse_stylesheet_config(content).unwrap();

        assert_eq!(starter_palette(), config.themes[0].colors);
    }
}
