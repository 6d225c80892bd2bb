use std::io;

use thiserror::Error;

/// Library-wide error type for semcfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Descriptor failed to decode as TOML.
    #[error("Malformed descriptor: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Descriptor failed to encode as TOML (show --format toml).
    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    /// Descriptor failed to encode as JSON (show --format json).
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// deploy/ directory already exists at the target location.
    #[error("deploy/ directory already exists (use --force to overwrite)")]
    DeployExists,

    /// No deploy/ directory found in the current directory.
    #[error("No deploy/ directory found. Run 'semcfg init' first.")]
    DeployNotFound,

    /// A descriptor file is missing from deploy/.
    #[error("Descriptor not found: {0}")]
    DescriptorMissing(String),

    /// The process manifest declares no apps.
    #[error("Process manifest declares no apps")]
    NoApps,

    /// An app entry has an empty required field.
    #[error("App #{index}: '{field}' must be a non-empty string")]
    EmptyAppField { index: usize, field: &'static str },

    /// instances must be at least 1.
    #[error("App '{name}': instances must be >= 1")]
    InvalidInstances { name: String },

    /// max_memory_restart does not parse as a memory threshold.
    #[error("App '{name}': invalid memory threshold '{value}' (expected e.g. \"512M\" or \"2G\")")]
    InvalidMemoryLimit { name: String, value: String },

    /// An app with the same name already exists in the manifest.
    #[error("App '{0}' already exists in process.toml")]
    AppExists(String),

    /// A theme with the same name already exists in the descriptor.
    #[error("Theme '{0}' already exists in stylesheet.toml")]
    ThemeExists(String),

    /// The stylesheet descriptor lists no content globs.
    #[error("Stylesheet descriptor 'content' must list at least one glob pattern")]
    NoContentGlobs,

    /// A content glob is empty.
    #[error("Stylesheet descriptor 'content' contains an empty glob pattern")]
    EmptyContentGlob,

    /// A named theme has an empty name.
    #[error("Theme #{0}: name must be non-empty")]
    EmptyThemeName(usize),

    /// A palette color value is not a hex color string.
    #[error("Theme '{theme}': color '{role}' has invalid hex value '{value}'")]
    InvalidColor { theme: String, role: String, value: String },

    /// A plugin is referenced more than once.
    #[error("Plugin '{0}' is listed more than once")]
    DuplicatePlugin(String),

    /// Template rendering failure.
    #[error("Failed to render '{artifact}': {reason}")]
    Render { artifact: String, reason: String },
}
