//! Usage: Owns the main window handle and runs the window build procedure.

use crate::app::lifecycle::{self, ExitDecision, Platform};
use crate::app::shell::{Shell, ShellWindow};
use crate::domain::folder_bridge::FolderBridge;
use crate::domain::geometry::{GeometryKeeper, GeometryStore};
use crate::domain::window_config::{self, WindowConfig, THEME_SETTING_KEY};
use crate::infra::settings::SettingsStore;
use std::sync::Arc;

pub struct AppContext<S: Shell> {
    shell: S,
    geometry: Arc<GeometryKeeper>,
    settings: Arc<dyn SettingsStore>,
    bridge: Arc<FolderBridge>,
    platform: Platform,
    open_devtools: bool,
    window: Option<S::Window>,
}

impl<S: Shell> AppContext<S> {
    pub fn new(
        shell: S,
        geometry: Arc<dyn GeometryStore>,
        settings: Arc<dyn SettingsStore>,
        bridge: Arc<FolderBridge>,
        platform: Platform,
    ) -> Self {
        Self {
            shell,
            geometry: Arc::new(GeometryKeeper::new(geometry)),
            settings,
            bridge,
            platform,
            open_devtools: cfg!(debug_assertions),
            window: None,
        }
    }

    pub fn with_devtools(mut self, open: bool) -> Self {
        self.open_devtools = open;
        self
    }

    pub fn window(&self) -> Option<&S::Window> {
        self.window.as_ref()
    }

    pub fn bridge(&self) -> &Arc<FolderBridge> {
        &self.bridge
    }

    pub fn window_config(&self) -> (WindowConfig, bool) {
        let placement = self.geometry.restore(&self.shell.monitors());
        let dark_theme = window_config::is_dark_theme(self.settings.get(THEME_SETTING_KEY).as_ref());
        let config = WindowConfig::from_placement(&placement, dark_theme, self.shell.icon_path());
        (config, placement.maximized)
    }

    /// Full build: restore bounds, create the window, keep its geometry, arm the bridge.
    pub fn build_ui(&mut self) -> Result<(), String> {
        let (config, maximized) = self.window_config();
        tracing::info!(
            width = config.size.width,
            height = config.size.height,
            centered = config.is_centered(),
            dark_theme = config.chrome.dark_theme,
            "building main window"
        );

        let window = self.shell.create_window(&config)?;
        self.geometry.manage(&window);
        if maximized {
            window.maximize();
        }
        if self.open_devtools {
            window.open_devtools();
        }
        self.bridge.arm(window.folder_sink());
        self.window = Some(window);
        Ok(())
    }

    pub fn on_all_windows_closed(&self) -> ExitDecision {
        let decision = lifecycle::on_all_windows_closed(self.platform);
        tracing::info!(?decision, "all windows closed");
        decision
    }

    /// Returns `true` when a new window was built.
    pub fn on_activated(&mut self) -> Result<bool, String> {
        if self.shell.window_count() > 0 {
            return Ok(false);
        }
        self.build_ui()?;
        Ok(true)
    }

    pub fn on_window_destroyed(&mut self, label: &str) {
        if self.window.as_ref().is_some_and(|w| w.label() == label) {
            self.window = None;
        }
    }
}
