//! Typed descriptor models and validation.

pub mod color;
pub mod diagnostics;
pub mod process;
pub mod stylesheet;

pub use color::is_hex_color;
pub use process::{AppSpec, ProcessManifest, parse_memory_limit, parse_process_manifest};
pub use stylesheet::{
    KNOWN_COLOR_ROLES, StylesheetConfig, ThemeSpec, parse_stylesheet_config,
};
