//! Usage: Declarative description of the main window, built once per window build.

use crate::domain::geometry::{Placement, Position};
use std::path::PathBuf;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const WINDOW_TITLE: &str = "Pixel Press";
pub const UI_DOCUMENT: &str = "index.html";

pub const DEFAULT_WIDTH: u32 = 996;
pub const DEFAULT_HEIGHT: u32 = 608;
pub const MIN_WIDTH: u32 = 760;
pub const MIN_HEIGHT: u32 = 480;

/// Settings key whose value selects the window theme.
pub const THEME_SETTING_KEY: &str = "appearance.theme";
pub const DARK_THEME_VALUE: &str = "ultra-dark";

/// Black at half alpha, so the vibrancy layer shows through.
pub const BACKGROUND_RGBA: Rgba = Rgba(0x00, 0x00, 0x00, 0x80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarStyle {
    /// Platform default decorations.
    Visible,
    /// Traffic lights inset into the content area, no title text (macOS).
    HiddenInset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibrancy {
    None,
    UltraDark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub resizable: bool,
    pub transparent: bool,
    pub background: Rgba,
    pub title_bar: TitleBarStyle,
    pub vibrancy: Vibrancy,
    pub dark_theme: bool,
    pub icon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebFeatures {
    pub experimental_features: bool,
    pub devtools: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub label: String,
    pub title: String,
    pub document: PathBuf,
    pub size: WindowSize,
    pub position: Option<Position>,
    pub chrome: Chrome,
    pub web: WebFeatures,
}

impl WindowConfig {
    pub fn from_placement(
        placement: &Placement,
        dark_theme: bool,
        icon_path: Option<PathBuf>,
    ) -> Self {
        Self {
            label: MAIN_WINDOW_LABEL.to_string(),
            title: WINDOW_TITLE.to_string(),
            document: PathBuf::from(UI_DOCUMENT),
            size: WindowSize {
                width: placement.width,
                height: placement.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            },
            position: placement.position,
            chrome: Chrome {
                resizable: true,
                transparent: true,
                background: BACKGROUND_RGBA,
                title_bar: TitleBarStyle::HiddenInset,
                vibrancy: Vibrancy::UltraDark,
                dark_theme,
                icon_path,
            },
            web: WebFeatures {
                experimental_features: true,
                devtools: true,
            },
        }
    }

    /// Windows without a remembered position open centred on the primary display.
    pub fn is_centered(&self) -> bool {
        self.position.is_none()
    }
}

pub fn is_dark_theme(theme: Option<&serde_json::Value>) -> bool {
    theme.and_then(|v| v.as_str()) == Some(DARK_THEME_VALUE)
}
