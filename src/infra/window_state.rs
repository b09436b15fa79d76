//! Usage: File-backed geometry store (`window-state.json` in the app data dir).

use crate::domain::geometry::{GeometryStore, SavedWindowState};
use crate::shared::fs::{read_optional_file, write_file_atomic_if_changed};
use std::path::{Path, PathBuf};

pub const WINDOW_STATE_FILE_NAME: &str = "window-state.json";

pub struct JsonGeometryStore {
    path: PathBuf,
}

impl JsonGeometryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(WINDOW_STATE_FILE_NAME))
    }

    fn read(&self) -> Result<Option<SavedWindowState>, String> {
        let Some(bytes) = read_optional_file(&self.path)? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| format!("failed to parse {}: {e}", self.path.display()))
    }
}

impl GeometryStore for JsonGeometryStore {
    fn load(&self) -> Option<SavedWindowState> {
        match self.read() {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("ignoring saved window state: {}", err);
                None
            }
        }
    }

    fn save(&self, state: &SavedWindowState) -> Result<(), String> {
        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| format!("failed to serialize window state: {e}"))?;
        if write_file_atomic_if_changed(&self.path, &bytes)? {
            tracing::debug!(
                x = state.geometry.x,
                y = state.geometry.y,
                width = state.geometry.width,
                height = state.geometry.height,
                maximized = state.maximized,
                "window state saved"
            );
        }
        Ok(())
    }
}
