//! Check command: validate both descriptors and report diagnostics.

use crate::domain::diagnostics::Diagnostics;
use crate::domain::{ProcessManifest, StylesheetConfig};
use crate::error::AppError;
use crate::workspace::{PROCESS_FILE, STYLESHEET_FILE, Workspace};

/// Options for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Treat warnings as failures (exit code 2).
    pub strict: bool,
}

/// Summary of a completed check run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Execute the check command.
pub fn execute(workspace: &Workspace, options: &CheckOptions) -> Result<CheckOutcome, AppError> {
    if !workspace.exists() {
        return Err(AppError::DeployNotFound);
    }

    let mut diagnostics = Diagnostics::default();
    check_process(workspace, &mut diagnostics);
    check_stylesheet(workspace, &mut diagnostics);
    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}

fn check_process(workspace: &Workspace, diagnostics: &mut Diagnostics) {
    let content = match workspace.read_descriptor(PROCESS_FILE) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push_error(PROCESS_FILE, e.to_string());
            return;
        }
    };

    let manifest: ProcessManifest = match toml::from_str(&content) {
        Ok(manifest) => manifest,
        Err(e) => {
            diagnostics.push_error(PROCESS_FILE, format!("TOML parse error: {e}"));
            return;
        }
    };

    for violation in manifest.violations() {
        diagnostics.push_error(PROCESS_FILE, violation.to_string());
    }

    for app in &manifest.apps {
        for (key, value) in &app.env {
            if value.is_empty() {
                diagnostics.push_warning(
                    PROCESS_FILE,
                    format!("App '{}': env var '{}' is set to an empty string", app.name, key),
                );
            }
        }
    }
}

fn check_stylesheet(workspace: &Workspace, diagnostics: &mut Diagnostics) {
    let content = match workspace.read_descriptor(STYLESHEET_FILE) {
        Ok(content) => content,
        Err(e) => {
            diagnostics.push_error(STYLESHEET_FILE, e.to_string());
            return;
        }
    };

    let config: StylesheetConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            diagnostics.push_error(STYLESHEET_FILE, format!("TOML parse error: {e}"));
            return;
        }
    };

    for violation in config.violations() {
        diagnostics.push_error(STYLESHEET_FILE, violation.to_string());
    }

    for (theme, role) in config.unknown_roles() {
        diagnostics.push_warning(
            STYLESHEET_FILE,
            format!("Theme '{}': color role '{}' is not recognized by the palette plugin", theme, role),
        );
    }

    for theme in &config.themes {
        if theme.colors.is_empty() {
            diagnostics.push_warning(
                STYLESHEET_FILE,
                format!("Theme '{}' declares no colors", theme.name),
            );
        }
    }
}
