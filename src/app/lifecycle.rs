//! Usage: Process lifecycle decisions (last window closed, dock activation).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Apps stay resident with no windows until the user quits explicitly.
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Quit,
    StayResident,
}

pub fn on_all_windows_closed(platform: Platform) -> ExitDecision {
    match platform {
        Platform::MacOs => ExitDecision::StayResident,
        Platform::Other => ExitDecision::Quit,
    }
}
