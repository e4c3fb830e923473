//! Settings file loading
//!
//! A settings file mirrors the host editor's layered configuration:
//! top-level sections hold user-wide values, `[workspace."<folder>"]`
//! tables hold per-workspace overrides.
//!
//! ```toml
//! [seek-bug-dap]
//! executable-path = "/opt/seek-bug/bin/seek-bug-dap"
//!
//! [workspace."/home/me/project".seek-bug-dap]
//! deep-seek-llm-path = "/models/DeepSeek-R1-Distill-Llama-8B-Q8_0.gguf"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur during settings loading
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Parsed settings file with user-wide and per-workspace layers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    /// Per-workspace overrides keyed by folder, then by section
    #[serde(default)]
    workspace: BTreeMap<String, BTreeMap<String, toml::Table>>,

    /// User-wide sections
    #[serde(flatten)]
    sections: BTreeMap<String, toml::Table>,
}

impl SettingsFile {
    /// Look up a string value, most specific layer first.
    ///
    /// A value present in the folder's layer wins even when it is empty, so
    /// a workspace can clear a user-wide setting. Non-string values are
    /// ignored.
    pub fn get_string(&self, section: &str, key: &str, folder: Option<&str>) -> Option<String> {
        let workspace_value = folder
            .and_then(|f| self.workspace.get(f))
            .and_then(|sections| sections.get(section))
            .and_then(|table| string_value(table, key));

        workspace_value
            .or_else(|| {
                self.sections
                    .get(section)
                    .and_then(|table| string_value(table, key))
            })
            .map(str::to_string)
    }

    /// Workspace folders that carry overrides
    pub fn workspace_folders(&self) -> impl Iterator<Item = &str> {
        self.workspace.keys().map(String::as_str)
    }
}

fn string_value<'a>(table: &'a toml::Table, key: &str) -> Option<&'a str> {
    table
        .get(key)
        .and_then(toml::Value::as_str)
}

/// Load a settings file (strict - errors if the file is missing)
pub fn load_settings(path: &Path) -> Result<SettingsFile, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "Loading settings file");
    let content = std::fs::read_to_string(path)?;
    load_settings_from_str(&content)
}

/// Parse settings from TOML text
pub fn load_settings_from_str(content: &str) -> Result<SettingsFile, ConfigError> {
    let settings: SettingsFile = toml::from_str(content)?;
    debug!(
        sections = settings.sections.len(),
        workspaces = settings.workspace.len(),
        "Parsed settings"
    );
    Ok(settings)
}
