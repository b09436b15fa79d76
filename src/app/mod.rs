//! Usage: Application layer (context, shell seam, lifecycle, logging, Tauri wiring).

#[cfg(feature = "desktop")]
pub(crate) mod app_state;
pub mod context;
#[cfg(feature = "desktop")]
pub mod desktop;
pub mod lifecycle;
pub mod logging;
pub mod shell;
