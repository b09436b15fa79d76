//! Usage: Seam between the application context and the windowing runtime.

use crate::domain::folder_bridge::FolderSink;
use crate::domain::geometry::{GeometryKeeper, MonitorRect};
use crate::domain::window_config::WindowConfig;
use std::path::PathBuf;
use std::sync::Arc;

pub trait Shell {
    type Window: ShellWindow;

    fn create_window(&self, config: &WindowConfig) -> Result<Self::Window, String>;
    fn window_count(&self) -> usize;
    fn monitors(&self) -> Vec<MonitorRect>;
    fn icon_path(&self) -> Option<PathBuf>;
}

pub trait ShellWindow {
    fn label(&self) -> &str;
    fn folder_sink(&self) -> Arc<dyn FolderSink>;
    /// Feed move/resize/close events into `keeper` for the lifetime of the window.
    fn track_geometry(&self, keeper: Arc<GeometryKeeper>);
    fn maximize(&self);
    fn open_devtools(&self);
}
