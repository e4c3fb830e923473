//! Workspace configuration port

use seekbug_config::constants::keys;
use seekbug_config::{ExtensionSettings, SettingsFile, CONFIG_SECTION};
use serde::{Deserialize, Serialize};

/// A folder opened in the host editor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// Display name
    pub name: String,
    /// Folder location as the host identifies it (path or URI)
    pub uri: String,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// Read access to the host's layered configuration store.
///
/// Lookups are scoped: a folder-level value shadows the user-wide one.
/// The extension never writes configuration.
pub trait WorkspaceConfiguration: Send + Sync {
    /// String value of `section.key` as seen from `scope`
    fn get_string(&self, section: &str, key: &str, scope: Option<&WorkspaceFolder>)
        -> Option<String>;

    /// Folders currently open, in host order
    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        Vec::new()
    }

    /// The SeekBug section as seen from `scope`, read fresh on every call
    fn extension_settings(&self, scope: Option<&WorkspaceFolder>) -> ExtensionSettings {
        ExtensionSettings {
            executable_path: self.get_string(CONFIG_SECTION, keys::EXECUTABLE_PATH, scope),
            deep_seek_llm_path: self.get_string(CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, scope),
        }
    }
}

impl WorkspaceConfiguration for SettingsFile {
    fn get_string(
        &self,
        section: &str,
        key: &str,
        scope: Option<&WorkspaceFolder>,
    ) -> Option<String> {
        SettingsFile::get_string(self, section, key, scope.map(|f| f.uri.as_str()))
    }

    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        SettingsFile::workspace_folders(self)
            .map(|uri| {
                let name = uri
                    .trim_end_matches('/')
                    .rsplit('/')
                    .next()
                    .unwrap_or(uri);
                WorkspaceFolder::new(name, uri)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbug_config::load_settings_from_str;

    #[test]
    fn test_settings_file_scoped_lookup() {
        let settings = load_settings_from_str(
            r#"
[seek-bug-dap]
executable-path = "/usr/bin/seek-bug-dap"

[workspace."/src/app".seek-bug-dap]
executable-path = "/src/app/bin/seek-bug-dap"
"#,
        )
        .unwrap();
        let config: &dyn WorkspaceConfiguration = &settings;
        let folder = WorkspaceFolder::new("app", "/src/app");

        assert_eq!(
            config.get_string(CONFIG_SECTION, keys::EXECUTABLE_PATH, Some(&folder)),
            Some("/src/app/bin/seek-bug-dap".to_string())
        );
        assert_eq!(
            config.get_string(CONFIG_SECTION, keys::EXECUTABLE_PATH, None),
            Some("/usr/bin/seek-bug-dap".to_string())
        );
        assert_eq!(config.workspace_folders(), vec![folder]);
    }

    #[test]
    fn test_extension_settings_keep_empty_override() {
        let settings = load_settings_from_str(
            r#"
[seek-bug-dap]
executable-path = "/usr/bin/seek-bug-dap"
deep-seek-llm-path = "/models/m.gguf"

[workspace."/src/app".seek-bug-dap]
executable-path = ""
"#,
        )
        .unwrap();
        let folder = WorkspaceFolder::new("app", "/src/app");

        let scoped = settings.extension_settings(Some(&folder));
        assert_eq!(scoped.executable_path, Some(String::new()));
        assert_eq!(scoped.executable_path(), None);
        assert_eq!(scoped.deep_seek_llm_path(), Some("/models/m.gguf"));

        let global = settings.extension_settings(None);
        assert_eq!(global.executable_path(), Some("/usr/bin/seek-bug-dap"));
    }
}
