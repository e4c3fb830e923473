//! Typed view of the `seek-bug-dap` configuration section

use serde::{Deserialize, Serialize};

/// Settings read from the `seek-bug-dap` section
///
/// Fields hold values exactly as configured. The accessors treat an empty
/// string as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSettings {
    /// Debug adapter executable overriding the host default
    #[serde(
        default,
        rename = "executable-path",
        skip_serializing_if = "Option::is_none"
    )]
    pub executable_path: Option<String>,

    /// Path handed to the suggestion service with every `aiRequest`
    #[serde(
        default,
        rename = "deep-seek-llm-path",
        skip_serializing_if = "Option::is_none"
    )]
    pub deep_seek_llm_path: Option<String>,
}

impl ExtensionSettings {
    /// Executable override, with empty strings treated as unset
    pub fn executable_path(&self) -> Option<&str> {
        non_empty(self.executable_path.as_deref())
    }

    /// Suggestion-service path, with empty strings treated as unset
    pub fn deep_seek_llm_path(&self) -> Option<&str> {
        non_empty(self.deep_seek_llm_path.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
