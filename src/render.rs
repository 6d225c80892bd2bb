//! Rendering of the tool-facing JavaScript artifacts from typed descriptors.

use minijinja::{AutoEscape, Environment, Value};

use crate::domain::{ProcessManifest, StylesheetConfig};
use crate::error::AppError;

/// File name of the rendered process-supervisor artifact.
pub const ECOSYSTEM_ARTIFACT: &str = "ecosystem.config.js";

/// File name of the rendered CSS build-tool artifact.
pub const TAILWIND_ARTIFACT: &str = "tailwind.config.js";

static ECOSYSTEM_TEMPLATE: &str = include_str!("templates/ecosystem.config.js.j2");
static TAILWIND_TEMPLATE: &str = include_str!("templates/tailwind.config.js.j2");

/// Render `ecosystem.config.js` from a validated process manifest.
pub fn render_ecosystem(manifest: &ProcessManifest) -> Result<String, AppError> {
    render(ECOSYSTEM_ARTIFACT, ECOSYSTEM_TEMPLATE, Value::from_serialize(manifest))
}

/// Render `tailwind.config.js` from a validated stylesheet descriptor.
pub fn render_tailwind(config: &StylesheetConfig) -> Result<String, AppError> {
    render(TAILWIND_ARTIFACT, TAILWIND_TEMPLATE, Value::from_serialize(config))
}

fn render(artifact: &str, source: &str, ctx: Value) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    // Artifact names end in .js, which the default callback would JSON-escape.
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_template(artifact, source).map_err(|e| AppError::Render {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })?;

    let template = env.get_template(artifact).map_err(|e| AppError::Render {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })?;

    template.render(ctx).map_err(|e| AppError::Render {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })
}
