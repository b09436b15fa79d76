//! Usage: Infrastructure adapters (filesystem paths, persisted settings and window state).

pub mod app_paths;
pub mod settings;
pub mod window_state;
