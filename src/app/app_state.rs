//! Usage: Tauri-managed state shared by run-loop handlers.

use crate::app::context::AppContext;
use crate::app::desktop::TauriShell;
use std::sync::Mutex;

pub(crate) struct MainContext(pub(crate) Mutex<AppContext<TauriShell>>);
