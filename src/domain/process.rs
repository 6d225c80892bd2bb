//! Process-supervisor manifest: typed model, parsing, validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

fn default_instances() -> u32 {
    1
}

fn default_autorestart() -> bool {
    true
}

/// Top-level process descriptor (`deploy/process.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessManifest {
    /// Managed applications, supervised in declaration order.
    #[serde(default)]
    pub apps: Vec<AppSpec>,
}

/// One supervised application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSpec {
    /// Identifier the supervisor reports the process under.
    pub name: String,
    /// Command line to execute.
    pub script: String,
    /// Desired replica count.
    #[serde(default = "default_instances")]
    pub instances: u32,
    /// Restart the process when it exits.
    #[serde(default = "default_autorestart")]
    pub autorestart: bool,
    /// Restart the process on filesystem changes.
    #[serde(default)]
    pub watch: bool,
    /// Memory threshold (e.g. "2G") that triggers a restart when exceeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_restart: Option<String>,
    /// Environment variables applied to the spawned process.
    ///
    /// Key uniqueness is enforced at parse time: TOML rejects duplicate keys.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl ProcessManifest {
    /// All violated schema invariants, in declaration order.
    pub fn violations(&self) -> Vec<AppError> {
        let mut violations = Vec::new();
        if self.apps.is_empty() {
            violations.push(AppError::NoApps);
        }
        for (index, app) in self.apps.iter().enumerate() {
            app.collect_violations(index, &mut violations);
        }
        violations
    }

    /// Validate, failing on the first violated invariant.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}

impl AppSpec {
    fn collect_violations(&self, index: usize, violations: &mut Vec<AppError>) {
        if self.name.trim().is_empty() {
            violations.push(AppError::EmptyAppField { index, field: "name" });
        }
        if self.script.trim().is_empty() {
            violations.push(AppError::EmptyAppField { index, field: "script" });
        }
        if self.instances < 1 {
            violations.push(AppError::InvalidInstances { name: self.name.clone() });
        }
        if let Some(limit) = &self.max_memory_restart
            && parse_memory_limit(limit).is_none()
        {
            violations.push(AppError::InvalidMemoryLimit {
                name: self.name.clone(),
                value: limit.clone(),
            });
        }
    }
}

/// Parse and validate a process manifest from TOML content.
pub fn parse_process_manifest(content: &str) -> Result<ProcessManifest, AppError> {
    let manifest: ProcessManifest = toml::from_str(content)?;
    manifest.validate()?;
    Ok(manifest)
}

/// Parse a memory threshold like `"512M"` or `"2G"` into bytes.
///
/// Accepts a positive integer with an optional K, M, or G suffix
/// (case-insensitive). Returns `None` for anything else.
pub fn parse_memory_limit(value: &str) -> Option<u64> {
    let value = value.trim();
    let (digits, multiplier) = match value.as_bytes().last()? {
        b'K' | b'k' => (&value[..value.len() - 1], 1024u64),
        b'M' | b'm' => (&value[..value.len() - 1], 1024 * 1024),
        b'G' | b'g' => (&value[..value.len() - 1], 1024 * 1024 * 1024),
        _ => (value, 1),
    };
    // u64::from_str tolerates a leading '+'; the threshold syntax does not.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count: u64 = digits.parse().ok()?;
    if count == 0 {
        return None;
    }
    count.checked_mul(multiplier)
}
