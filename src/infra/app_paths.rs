//! Usage: Resolve per-user app data directory and related path helpers.

use std::path::{Path, PathBuf};

pub const APP_DOTDIR_NAME: &str = ".pixel-press";
const APP_DOTDIR_NAME_ENV: &str = "PIXEL_PRESS_DOTDIR_NAME";
pub const LOGS_DIR_NAME: &str = "logs";
pub const ICON_RESOURCE: &str = "icons/app-icon.png";

fn is_safe_dotdir_name(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if !name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

fn dotdir_name(override_value: Option<String>) -> String {
    override_value
        .map(|v| v.trim().to_string())
        .filter(|v| is_safe_dotdir_name(v))
        .unwrap_or_else(|| APP_DOTDIR_NAME.to_string())
}

pub fn app_data_dir_in(home_dir: &Path) -> Result<PathBuf, String> {
    let dir = home_dir.join(dotdir_name(std::env::var(APP_DOTDIR_NAME_ENV).ok()));
    std::fs::create_dir_all(&dir).map_err(|e| format!("failed to create app dir: {e}"))?;
    Ok(dir)
}

#[cfg(feature = "desktop")]
pub fn app_data_dir(app: &tauri::AppHandle) -> Result<PathBuf, String> {
    use tauri::Manager;

    let home_dir = app
        .path()
        .home_dir()
        .map_err(|e| format!("failed to resolve home dir: {e}"))?;
    app_data_dir_in(&home_dir)
}

#[cfg(feature = "desktop")]
pub fn icon_path(app: &tauri::AppHandle) -> Option<PathBuf> {
    use tauri::Manager;

    match app.path().resource_dir() {
        Ok(dir) => Some(dir.join(ICON_RESOURCE)),
        Err(err) => {
            tracing::warn!("failed to resolve resource dir: {}", err);
            None
        }
    }
}
