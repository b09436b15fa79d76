//! Usage: Window geometry persistence (restore last bounds, record moves/resizes).

use crate::app::shell::ShellWindow;
use crate::domain::window_config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::shared::mutex_ext::MutexExt;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Last known window rectangle, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWindowState {
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default)]
    pub maximized: bool,
    /// No normal bounds were ever observed: only the size is meaningful and
    /// the window opens centred.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub centered: bool,
}

/// Where the next window should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Option<Position>,
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            maximized: false,
        }
    }
}

/// Work area of one display, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl MonitorRect {
    fn contains(&self, g: &Geometry) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        g.x >= self.x
            && g.y >= self.y
            && i64::from(g.x) + i64::from(g.width) <= right
            && i64::from(g.y) + i64::from(g.height) <= bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub geometry: Geometry,
    pub maximized: bool,
    pub minimized: bool,
}

pub trait GeometryStore: Send + Sync {
    fn load(&self) -> Option<SavedWindowState>;
    fn save(&self, state: &SavedWindowState) -> Result<(), String>;
}

pub struct GeometryKeeper {
    store: Arc<dyn GeometryStore>,
    last: Mutex<Option<SavedWindowState>>,
}

impl GeometryKeeper {
    pub fn new(store: Arc<dyn GeometryStore>) -> Self {
        Self {
            store,
            last: Mutex::new(None),
        }
    }

    /// Best-effort placement for the next window. An empty monitor list means
    /// the displays are unknown and saved bounds are trusted as-is.
    pub fn restore(&self, monitors: &[MonitorRect]) -> Placement {
        let saved = self.store.load();
        let mut last = self.last.lock_or_recover();

        let Some(saved) = saved else {
            *last = None;
            return Placement::default();
        };

        if saved.centered {
            *last = Some(saved);
            return Placement {
                maximized: saved.maximized,
                ..Placement::default()
            };
        }

        if !monitors.is_empty() && !monitors.iter().any(|m| m.contains(&saved.geometry)) {
            tracing::info!(
                x = saved.geometry.x,
                y = saved.geometry.y,
                width = saved.geometry.width,
                height = saved.geometry.height,
                "saved window bounds are off-screen; using defaults"
            );
            *last = None;
            return Placement::default();
        }

        *last = Some(saved);
        Placement {
            position: Some(Position {
                x: saved.geometry.x,
                y: saved.geometry.y,
            }),
            width: saved.geometry.width.max(MIN_WIDTH),
            height: saved.geometry.height.max(MIN_HEIGHT),
            maximized: saved.maximized,
        }
    }

    pub fn record(&self, snapshot: WindowSnapshot) {
        if snapshot.minimized || snapshot.geometry.width == 0 || snapshot.geometry.height == 0 {
            return;
        }

        let next = {
            let mut last = self.last.lock_or_recover();
            // A maximized window keeps its last normal bounds so un-maximizing
            // after a restart lands where the user left it. Without any, the
            // default size is kept and the window reopens centred.
            let (geometry, centered) = match (snapshot.maximized, last.as_ref()) {
                (true, Some(prev)) => (prev.geometry, prev.centered),
                (true, None) => (
                    Geometry {
                        x: 0,
                        y: 0,
                        width: DEFAULT_WIDTH,
                        height: DEFAULT_HEIGHT,
                    },
                    true,
                ),
                (false, _) => (snapshot.geometry, false),
            };
            let next = SavedWindowState {
                geometry,
                maximized: snapshot.maximized,
                centered,
            };
            if last.as_ref() == Some(&next) {
                return;
            }
            *last = Some(next);
            next
        };

        if let Err(err) = self.store.save(&next) {
            tracing::warn!("failed to persist window state: {}", err);
        }
    }

    pub fn manage<W: ShellWindow>(self: &Arc<Self>, window: &W) {
        window.track_geometry(self.clone());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    #[derive(Default)]
    pub(crate) struct MemoryGeometryStore {
        pub(crate) state: Mutex<Option<SavedWindowState>>,
        pub(crate) saves: Mutex<Vec<SavedWindowState>>,
        pub(crate) fail_saves: bool,
    }

    impl MemoryGeometryStore {
        pub(crate) fn with_state(state: SavedWindowState) -> Self {
            Self {
                state: Mutex::new(Some(state)),
                ..Self::default()
            }
        }
    }

    impl GeometryStore for MemoryGeometryStore {
        fn load(&self) -> Option<SavedWindowState> {
            *self.state.lock_or_recover()
        }

        fn save(&self, state: &SavedWindowState) -> Result<(), String> {
            if self.fail_saves {
                return Err("disk full".to_string());
            }
            *self.state.lock_or_recover() = Some(*state);
            self.saves.lock_or_recover().push(*state);
            Ok(())
        }
    }
}
