//! Usage: Window domain logic (configuration, geometry persistence, folder bridge).

pub mod folder_bridge;
pub mod geometry;
pub mod window_config;
