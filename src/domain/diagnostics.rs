//! Diagnostic collection for `semcfg check`.

/// Severity of a reported finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding against one descriptor file.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Descriptor file the finding refers to.
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

/// Collects findings across both descriptors before emission.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            file: file.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            file: file.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Print all findings to stderr, errors first.
    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.file, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.file, diagnostic.message);
        }
    }
}
