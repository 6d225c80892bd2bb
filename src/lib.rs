//! semcfg: Scaffold, validate, and render the Semaforos gateway deployment descriptors.
//!
//! The source of truth is a `deploy/` directory holding two TOML files:
//! `process.toml` (process-supervisor manifest) and `stylesheet.toml`
//! (CSS build-tool descriptor). The external tools consume rendered
//! JavaScript artifacts, which `semcfg render` produces from those files.

pub mod commands;
pub mod domain;
pub mod error;
pub mod render;
pub mod scaffold;
pub mod workspace;

use commands::{
    check as check_cmd, init as init_cmd, render as render_cmd, show as show_cmd,
    template as template_cmd,
};
use workspace::Workspace;

pub use commands::check::{CheckOptions, CheckOutcome};
pub use commands::render::{RenderOptions, RenderResult};
pub use commands::show::{Descriptor, ShowFormat};
pub use commands::template::{TemplateOutcome, TemplateTarget};
pub use error::AppError;

/// Initialize a `deploy/` descriptor directory in the current directory.
pub fn init(force: bool) -> Result<(), AppError> {
    let workspace = Workspace::current()?;

    init_cmd::execute(&workspace, &init_cmd::InitOptions { force })?;
    println!("✅ Initialized deploy/ descriptors");
    Ok(())
}

/// Validate both descriptors and report diagnostics.
///
/// Returns an outcome carrying the intended process exit code:
/// 0 clean, 1 on errors, 2 on warnings under `--strict`.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let workspace = Workspace::current()?;

    check_cmd::execute(&workspace, &options)
}

/// Render `ecosystem.config.js` and `tailwind.config.js` from the descriptors.
pub fn render(options: RenderOptions) -> Result<RenderResult, AppError> {
    let workspace = Workspace::current()?;

    let result = render_cmd::execute(&workspace, &options)?;
    for path in &result.written {
        println!("✅ Wrote {}", path.display());
    }
    Ok(result)
}

/// Append a descriptor entry from a built-in starter template.
///
/// Returns a `TemplateOutcome` describing the created entry.
pub fn template(target: TemplateTarget) -> Result<TemplateOutcome, AppError> {
    let workspace = Workspace::current()?;

    let outcome = template_cmd::execute(&workspace, target)?;
    match &outcome {
        TemplateOutcome::App { name } => {
            println!("✅ Added app '{}' to deploy/{}", name, outcome.file());
        }
        TemplateOutcome::Theme { name } => {
            println!("✅ Added theme '{}' to deploy/{}", name, outcome.file());
        }
    }
    Ok(outcome)
}

/// Print a resolved descriptor to stdout.
pub fn show(descriptor: Descriptor, format: ShowFormat) -> Result<(), AppError> {
    let workspace = Workspace::current()?;

    let rendered = show_cmd::execute(&workspace, descriptor, format)?;
    println!("{rendered}");
    Ok(())
}
