pub mod app;
pub mod domain;
pub mod infra;
mod shared;

#[cfg(feature = "desktop")]
pub use desktop_main::run;

#[cfg(feature = "desktop")]
mod desktop_main {
    use crate::app::app_state::MainContext;
    use crate::app::context::AppContext;
    use crate::app::desktop::{DialogFolderPicker, TauriShell};
    use crate::app::lifecycle::{ExitDecision, Platform};
    use crate::app::logging;
    use crate::domain::folder_bridge::{FolderBridge, REQUEST_FOLDER_EVENT};
    use crate::infra::app_paths;
    use crate::infra::settings::JsonSettingsStore;
    use crate::infra::window_state::JsonGeometryStore;
    use crate::shared::mutex_ext::MutexExt;
    use std::sync::{Arc, Mutex};
    use tauri::{Listener, Manager};

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        let app = tauri::Builder::default()
            .plugin(tauri_plugin_dialog::init())
            .setup(|app| {
                let handle = app.handle().clone();

                let data_dir = app_paths::app_data_dir(&handle);
                let logs_dir = data_dir
                    .as_ref()
                    .ok()
                    .map(|dir| dir.join(app_paths::LOGS_DIR_NAME));
                logging::init(logs_dir.as_deref());
                let data_dir = data_dir?;
                tracing::info!(dir = %data_dir.display(), "app data dir");

                let bridge = Arc::new(FolderBridge::new(Arc::new(DialogFolderPicker::new(
                    handle.clone(),
                ))));
                let mut ctx = AppContext::new(
                    TauriShell::new(handle.clone()),
                    Arc::new(JsonGeometryStore::in_dir(&data_dir)),
                    Arc::new(JsonSettingsStore::in_dir(&data_dir)),
                    bridge.clone(),
                    Platform::current(),
                );
                ctx.build_ui()?;

                handle.listen_any(REQUEST_FOLDER_EVENT, move |_| {
                    bridge.handle_request();
                });

                app.manage(MainContext(Mutex::new(ctx)));
                Ok(())
            })
            .build(tauri::generate_context!())
            .expect("error while building tauri application");

        app.run(on_run_event);
    }

    fn on_run_event(app: &tauri::AppHandle, event: tauri::RunEvent) {
        let Some(state) = app.try_state::<MainContext>() else {
            return;
        };

        match event {
            // `code: None` is the implicit exit after the last window closed.
            tauri::RunEvent::ExitRequested {
                code: None, api, ..
            } => {
                if state.0.lock_or_recover().on_all_windows_closed() == ExitDecision::StayResident
                {
                    api.prevent_exit();
                }
            }
            tauri::RunEvent::WindowEvent {
                label,
                event: tauri::WindowEvent::Destroyed,
                ..
            } => {
                state.0.lock_or_recover().on_window_destroyed(&label);
            }
            #[cfg(target_os = "macos")]
            tauri::RunEvent::Reopen { .. } => {
                if let Err(err) = state.0.lock_or_recover().on_activated() {
                    tracing::error!("failed to recreate main window: {}", err);
                }
            }
            _ => {}
        }
    }
}
