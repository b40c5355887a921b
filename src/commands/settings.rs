//! IPC access to the user preferences store.
//!
//! Writes run on the blocking pool so disk I/O never stalls the event loop.
//! Window-affecting preferences are applied to the main window as soon as
//! they are in memory, whether or not they reached the disk.

use log::warn;
use serde_json::Value;
use tauri::{async_runtime, AppHandle, Manager, State, Window};

use crate::constants::MAIN_WINDOW_LABEL;
use crate::errors::CommandError;
use crate::settings::SettingsDocument;
use crate::window_prefs::{self, preference_for};
use crate::ShellRuntime;

fn main_window(app: &AppHandle) -> Option<Window> {
    let window = app.get_window(MAIN_WINDOW_LABEL);
    if window.is_none() {
        warn!(
            "[settings] Main window '{}' not found, preference not applied",
            MAIN_WINDOW_LABEL
        );
    }
    window
}

#[tauri::command]
pub async fn get_setting(
    key: String,
    state: State<'_, ShellRuntime>,
) -> Result<Option<Value>, CommandError> {
    Ok(state.settings().get(&key))
}

/// `false` means the value is live for this session but was not written to disk.
#[tauri::command]
pub async fn set_setting(
    app: AppHandle,
    key: String,
    value: Value,
    state: State<'_, ShellRuntime>,
) -> Result<bool, CommandError> {
    let preference = preference_for(&key, &value);
    let store = state.settings_handle();
    let persisted = async_runtime::spawn_blocking(move || store.set(key, value)).await?;

    if let Some(preference) = preference {
        if let Some(window) = main_window(&app) {
            window_prefs::apply(&window, preference);
        }
    }
    Ok(persisted)
}

#[tauri::command]
pub async fn get_all_settings(
    state: State<'_, ShellRuntime>,
) -> Result<SettingsDocument, CommandError> {
    Ok(state.settings().get_all())
}

#[tauri::command]
pub async fn reset_settings(
    app: AppHandle,
    state: State<'_, ShellRuntime>,
) -> Result<bool, CommandError> {
    let store = state.settings_handle();
    let persisted = async_runtime::spawn_blocking(move || store.reset()).await?;

    if let Some(window) = main_window(&app) {
        window_prefs::apply_document(&window, &state.settings().get_all());
    }
    Ok(persisted)
}
