//! Command implementations.

pub mod check;
pub mod init;
pub mod render;
pub mod show;
pub mod template;
