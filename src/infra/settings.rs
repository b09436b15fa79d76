//! Usage: Read-only access to persisted user settings (`settings.json`, dotted-key lookup).

use crate::shared::fs::read_optional_file;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<serde_json::Value>;
}

/// Re-reads the file on every lookup so edits made by the UI are picked up
/// by the next window build.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SETTINGS_FILE_NAME))
    }

    fn read_root(&self) -> Result<Option<serde_json::Value>, String> {
        let Some(bytes) = read_optional_file(&self.path)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| format!("failed to parse {}: {e}", self.path.display()))
    }
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Option<serde_json::Value> {
        let root = match self.read_root() {
            Ok(root) => root?,
            Err(err) => {
                tracing::warn!("settings read failed: {}", err);
                return None;
            }
        };
        lookup(&root, key).cloned()
    }
}

fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    key.split('.')
        .try_fold(root, |node, segment| node.as_object()?.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fs::test_support::unique_tmp_dir;
    use serde_json::json;

    #[test]
    fn lookup_walks_nested_objects() {
        let root = json!({"appearance": {"theme": "ultra-dark", "scale": 2}});
        assert_eq!(lookup(&root, "appearance.theme"), Some(&json!("ultra-dark")));
        assert_eq!(lookup(&root, "appearance.scale"), Some(&json!(2)));
        assert_eq!(lookup(&root, "appearance.missing"), None);
        assert_eq!(lookup(&root, "appearance.theme.deeper"), None);
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = unique_tmp_dir("settings");
        let store = JsonSettingsStore::in_dir(&dir);
        assert_eq!(store.get("appearance.theme"), None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn reads_value_from_file_on_each_lookup() {
        let dir = unique_tmp_dir("settings");
        let path = dir.join(SETTINGS_FILE_NAME);
        let store = JsonSettingsStore::new(path.clone());

        std::fs::write(&path, r#"{"appearance":{"theme":"light"}}"#).expect("write");
        assert_eq!(store.get("appearance.theme"), Some(json!("light")));

        std::fs::write(&path, r#"{"appearance":{"theme":"ultra-dark"}}"#).expect("write");
        assert_eq!(store.get("appearance.theme"), Some(json!("ultra-dark")));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_file_yields_none() {
        let dir = unique_tmp_dir("settings");
        std::fs::write(dir.join(SETTINGS_FILE_NAME), "{not json").expect("write");
        let store = JsonSettingsStore::in_dir(&dir);
        assert_eq!(store.get("appearance.theme"), None);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
