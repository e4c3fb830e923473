//! Fake configuration store

use super::lock;
use seekbug_ports::{WorkspaceConfiguration, WorkspaceFolder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type Key = (String, String);

/// In-memory layered configuration
///
/// Folder-scoped values shadow user-wide ones, like the real host. Values
/// are returned exactly as set, empty strings included.
#[derive(Debug, Default)]
pub struct FakeWorkspace {
    global: Mutex<HashMap<Key, String>>,
    scoped: Mutex<HashMap<String, HashMap<Key, String>>>,
    folders: Mutex<Vec<WorkspaceFolder>>,
    lookups: AtomicUsize,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a user-wide value
    pub fn set(&self, section: &str, key: &str, value: impl Into<String>) {
        lock(&self.global).insert((section.to_string(), key.to_string()), value.into());
    }

    /// Set a value for one folder
    pub fn set_scoped(
        &self,
        folder: &WorkspaceFolder,
        section: &str,
        key: &str,
        value: impl Into<String>,
    ) {
        lock(&self.scoped)
            .entry(folder.uri.clone())
            .or_default()
            .insert((section.to_string(), key.to_string()), value.into());
    }

    /// Remove a user-wide value
    pub fn unset(&self, section: &str, key: &str) {
        lock(&self.global).remove(&(section.to_string(), key.to_string()));
    }

    pub fn add_folder(&self, folder: WorkspaceFolder) {
        lock(&self.folders).push(folder);
    }

    /// Number of `get_string` calls so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl WorkspaceConfiguration for FakeWorkspace {
    fn get_string(
        &self,
        section: &str,
        key: &str,
        scope: Option<&WorkspaceFolder>,
    ) -> Option<String> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        let k = (section.to_string(), key.to_string());

        let scoped = scope.and_then(|folder| {
            lock(&self.scoped)
                .get(&folder.uri)
                .and_then(|values| values.get(&k).cloned())
        });
        scoped.or_else(|| lock(&self.global).get(&k).cloned())
    }

    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        lock(&self.folders).clone()
    }
}
