//! Usage: Tauri implementations of the shell seam (window factory, folder dialog, event sink).

use crate::app::shell::{Shell, ShellWindow};
use crate::domain::folder_bridge::{
    FolderDialogOptions, FolderPicker, FolderSink, PickCallback, FOLDER_PATH_EVENT,
};
use crate::domain::geometry::{Geometry, GeometryKeeper, MonitorRect, WindowSnapshot};
use crate::domain::window_config::{Rgba, WindowConfig};
use crate::infra::app_paths;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tauri::image::Image;
use tauri::utils::config::Color;
use tauri::{AppHandle, Emitter, Manager, Theme, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_dialog::DialogExt;

const GEOMETRY_SAVE_DEBOUNCE: Duration = Duration::from_millis(400);

type Builder<'a> = WebviewWindowBuilder<'a, tauri::Wry, AppHandle>;

pub struct TauriShell {
    app: AppHandle,
}

impl TauriShell {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl Shell for TauriShell {
    type Window = TauriWindow;

    fn create_window(&self, config: &WindowConfig) -> Result<TauriWindow, String> {
        let builder = WebviewWindowBuilder::new(
            &self.app,
            config.label.as_str(),
            WebviewUrl::App(config.document.clone()),
        )
        .title(config.title.as_str())
        .inner_size(f64::from(config.size.width), f64::from(config.size.height))
        .min_inner_size(
            f64::from(config.size.min_width),
            f64::from(config.size.min_height),
        )
        .resizable(config.chrome.resizable)
        .transparent(config.chrome.transparent)
        .background_color(color(config.chrome.background))
        .theme(config.chrome.dark_theme.then_some(Theme::Dark))
        .devtools(config.web.devtools);

        let mut builder = match config.position {
            Some(p) => builder.position(f64::from(p.x), f64::from(p.y)),
            None => builder.center(),
        };

        if let Some(icon) = config.chrome.icon_path.as_deref().and_then(load_icon) {
            builder = builder
                .icon(icon)
                .map_err(|e| format!("failed to set window icon: {e}"))?;
        }

        let window = platform_chrome(builder, config)
            .build()
            .map_err(|e| format!("failed to build window `{}`: {e}", config.label))?;

        Ok(TauriWindow { window })
    }

    fn window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn monitors(&self) -> Vec<MonitorRect> {
        let monitors = match self.app.available_monitors() {
            Ok(monitors) => monitors,
            Err(err) => {
                tracing::warn!("failed to enumerate monitors: {}", err);
                return Vec::new();
            }
        };

        monitors
            .iter()
            .map(|m| {
                let scale = m.scale_factor();
                let position = m.position().to_logical::<i32>(scale);
                let size = m.size().to_logical::<u32>(scale);
                MonitorRect {
                    x: position.x,
                    y: position.y,
                    width: size.width,
                    height: size.height,
                }
            })
            .collect()
    }

    fn icon_path(&self) -> Option<PathBuf> {
        app_paths::icon_path(&self.app)
    }
}

fn color(rgba: Rgba) -> Color {
    Color(rgba.0, rgba.1, rgba.2, rgba.3)
}

fn load_icon(path: &Path) -> Option<Image<'static>> {
    match Image::from_path(path) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!("window icon {} unavailable: {}", path.display(), err);
            None
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_chrome<'a>(builder: Builder<'a>, config: &WindowConfig) -> Builder<'a> {
    use crate::domain::window_config::{TitleBarStyle, Vibrancy};
    use tauri::window::{Effect, EffectsBuilder};

    let builder = match config.chrome.title_bar {
        TitleBarStyle::HiddenInset => builder
            .title_bar_style(tauri::TitleBarStyle::Overlay)
            .hidden_title(true),
        TitleBarStyle::Visible => builder,
    };
    match config.chrome.vibrancy {
        Vibrancy::UltraDark => {
            builder.effects(EffectsBuilder::new().effect(Effect::HudWindow).build())
        }
        Vibrancy::None => builder,
    }
}

#[cfg(target_os = "windows")]
fn platform_chrome<'a>(builder: Builder<'a>, config: &WindowConfig) -> Builder<'a> {
    // Replaces the runtime defaults, so they are repeated here.
    const DEFAULT_ARGS: &str =
        "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection";

    if !config.web.experimental_features {
        return builder;
    }
    builder.additional_browser_args(&format!(
        "{DEFAULT_ARGS} --enable-experimental-web-platform-features"
    ))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_chrome<'a>(builder: Builder<'a>, _config: &WindowConfig) -> Builder<'a> {
    builder
}

pub struct TauriWindow {
    window: WebviewWindow,
}

impl ShellWindow for TauriWindow {
    fn label(&self) -> &str {
        self.window.label()
    }

    fn folder_sink(&self) -> Arc<dyn FolderSink> {
        Arc::new(WindowFolderSink {
            app: self.window.app_handle().clone(),
            label: self.window.label().to_string(),
        })
    }

    fn track_geometry(&self, keeper: Arc<GeometryKeeper>) {
        let window = self.window.clone();
        let seq = Arc::new(AtomicU64::new(0));

        self.window.on_window_event(move |event| match event {
            tauri::WindowEvent::Moved(_) | tauri::WindowEvent::Resized(_) => {
                let ticket = seq.fetch_add(1, Ordering::SeqCst) + 1;
                let seq = seq.clone();
                let window = window.clone();
                let keeper = keeper.clone();
                tauri::async_runtime::spawn(async move {
                    tokio::time::sleep(GEOMETRY_SAVE_DEBOUNCE).await;
                    if seq.load(Ordering::SeqCst) != ticket {
                        return;
                    }
                    record_snapshot(&window, &keeper);
                });
            }
            tauri::WindowEvent::CloseRequested { .. } => {
                seq.fetch_add(1, Ordering::SeqCst);
                record_snapshot(&window, &keeper);
            }
            _ => {}
        });
    }

    fn maximize(&self) {
        if let Err(err) = self.window.maximize() {
            tracing::warn!("failed to maximize restored window: {}", err);
        }
    }

    fn open_devtools(&self) {
        #[cfg(debug_assertions)]
        self.window.open_devtools();
    }
}

fn record_snapshot(window: &WebviewWindow, keeper: &GeometryKeeper) {
    match snapshot(window) {
        Ok(snapshot) => keeper.record(snapshot),
        Err(err) => tracing::debug!("skipping window state save: {}", err),
    }
}

fn snapshot(window: &WebviewWindow) -> Result<WindowSnapshot, String> {
    let scale = window
        .scale_factor()
        .map_err(|e| format!("scale_factor: {e}"))?;
    let position = window
        .outer_position()
        .map_err(|e| format!("outer_position: {e}"))?
        .to_logical::<i32>(scale);
    let size = window
        .inner_size()
        .map_err(|e| format!("inner_size: {e}"))?
        .to_logical::<u32>(scale);

    Ok(WindowSnapshot {
        geometry: Geometry {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        },
        maximized: window.is_maximized().unwrap_or(false),
        minimized: window.is_minimized().unwrap_or(false),
    })
}

struct WindowFolderSink {
    app: AppHandle,
    label: String,
}

impl FolderSink for WindowFolderSink {
    fn send_folder_paths(&self, paths: &[PathBuf]) -> Result<(), String> {
        if self.app.get_webview_window(&self.label).is_none() {
            return Err(format!("window `{}` no longer exists", self.label));
        }
        let payload: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        self.app
            .emit_to(self.label.as_str(), FOLDER_PATH_EVENT, payload)
            .map_err(|e| format!("{FOLDER_PATH_EVENT}: {e}"))
    }
}

pub struct DialogFolderPicker {
    app: AppHandle,
}

impl DialogFolderPicker {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl FolderPicker for DialogFolderPicker {
    // The dialog plugin has no package or alias switches; only the message and
    // directory creation are forwarded.
    fn pick_folder(&self, options: &FolderDialogOptions, done: PickCallback) {
        self.app
            .dialog()
            .file()
            .set_title(options.message.as_str())
            .set_can_create_directories(options.can_create_directories)
            .pick_folder(move |picked| {
                // Single selection; the UI still receives a list.
                let paths = picked.map(|file| match file.into_path() {
                    Ok(path) => vec![path],
                    Err(err) => {
                        tracing::warn!("dropping non-filesystem selection: {}", err);
                        Vec::new()
                    }
                });
                done(paths);
            });
    }
}
