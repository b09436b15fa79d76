//! Usage: One-shot folder picker round trip between the UI document and the host.
//!
//! - UI emits `request-folder` (no payload)
//! - host opens a native directory dialog
//! - host emits `get-folder-path` with the chosen absolute path as a one-element
//!   list (`[]` on cancel)
//!
//! The bridge answers one request per window build; `arm` is the only way back.

use crate::shared::mutex_ext::MutexExt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const REQUEST_FOLDER_EVENT: &str = "request-folder";
pub const FOLDER_PATH_EVENT: &str = "get-folder-path";

const EXPORT_FOLDER_MESSAGE: &str =
    "All optimized images will be automatically exported to the selected folder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderDialogOptions {
    pub message: String,
    pub can_create_directories: bool,
    pub treat_packages_as_directories: bool,
    pub resolve_aliases: bool,
}

impl FolderDialogOptions {
    pub fn export_folder() -> Self {
        Self {
            message: EXPORT_FOLDER_MESSAGE.to_string(),
            can_create_directories: true,
            treat_packages_as_directories: true,
            resolve_aliases: false,
        }
    }
}

/// Receives `None` when the dialog was dismissed.
pub type PickCallback = Box<dyn FnOnce(Option<Vec<PathBuf>>) + Send + 'static>;

pub trait FolderPicker: Send + Sync {
    fn pick_folder(&self, options: &FolderDialogOptions, done: PickCallback);
}

pub trait FolderSink: Send + Sync {
    fn send_folder_paths(&self, paths: &[PathBuf]) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Armed,
    Fired,
}

enum Slot {
    Armed(Arc<dyn FolderSink>),
    Fired,
}

pub struct FolderBridge {
    picker: Arc<dyn FolderPicker>,
    slot: Mutex<Slot>,
}

impl FolderBridge {
    /// A new bridge is fired until the first window build arms it.
    pub fn new(picker: Arc<dyn FolderPicker>) -> Self {
        Self {
            picker,
            slot: Mutex::new(Slot::Fired),
        }
    }

    pub fn arm(&self, sink: Arc<dyn FolderSink>) {
        *self.slot.lock_or_recover() = Slot::Armed(sink);
    }

    pub fn state(&self) -> BridgeState {
        match *self.slot.lock_or_recover() {
            Slot::Armed(_) => BridgeState::Armed,
            Slot::Fired => BridgeState::Fired,
        }
    }

    /// Returns `true` when the request opened a dialog.
    pub fn handle_request(&self) -> bool {
        let sink = {
            let mut slot = self.slot.lock_or_recover();
            match std::mem::replace(&mut *slot, Slot::Fired) {
                Slot::Armed(sink) => sink,
                Slot::Fired => {
                    tracing::debug!("folder request ignored: bridge already fired");
                    return false;
                }
            }
        };

        let options = FolderDialogOptions::export_folder();
        self.picker.pick_folder(
            &options,
            Box::new(move |picked: Option<Vec<PathBuf>>| {
                deliver(sink.as_ref(), picked.unwrap_or_default())
            }),
        );
        true
    }
}

fn deliver(sink: &dyn FolderSink, paths: Vec<PathBuf>) {
    tracing::info!(count = paths.len(), "folder dialog closed");
    if let Err(err) = sink.send_folder_paths(&paths) {
        tracing::error!("failed to deliver selected folder: {}", err);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Answers every dialog synchronously with a fixed result.
    pub(crate) struct ScriptedPicker {
        pub(crate) answer: Option<Vec<PathBuf>>,
        pub(crate) opened: Mutex<Vec<FolderDialogOptions>>,
    }

    impl ScriptedPicker {
        pub(crate) fn answering(answer: Option<Vec<PathBuf>>) -> Self {
            Self {
                answer,
                opened: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn opened(&self) -> usize {
            self.opened.lock_or_recover().len()
        }
    }

    impl FolderPicker for ScriptedPicker {
        fn pick_folder(&self, options: &FolderDialogOptions, done: PickCallback) {
            self.opened.lock_or_recover().push(options.clone());
            done(self.answer.clone());
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) sent: Mutex<Vec<Vec<PathBuf>>>,
        pub(crate) destroyed: bool,
    }

    impl FolderSink for RecordingSink {
        fn send_folder_paths(&self, paths: &[PathBuf]) -> Result<(), String> {
            if self.destroyed {
                return Err("window destroyed".to_string());
            }
            self.sent.lock_or_recover().push(paths.to_vec());
            Ok(())
        }
    }
}
