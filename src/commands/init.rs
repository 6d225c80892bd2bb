//! Init command: create `deploy/` and write the default descriptors.

use crate::error::AppError;
use crate::workspace::Workspace;

/// Options for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing deploy/ directory.
    pub force: bool,
}

/// Execute the init command.
pub fn execute(workspace: &Workspace, options: &InitOptions) -> Result<(), AppError> {
    if workspace.exists() && !options.force {
        return Err(AppError::DeployExists);
    }

    workspace.create_structure()?;
    Ok(())
}
