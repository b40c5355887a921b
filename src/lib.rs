//! Gemini Desktop: a thin native shell around the Gemini web app.
//!
//! The main window renders a custom titlebar; the chat service runs in a child
//! webview placed underneath it. User preferences live in a JSON file managed
//! by [`settings::SettingsStore`].

mod commands;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod path_provider;
pub mod settings;
mod window_prefs;
mod windows;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use log::{info, warn};
use serde_json::json;
use tauri::{AppHandle, Manager, WindowEvent};

use commands::settings::{get_all_settings, get_setting, reset_settings, set_setting};
use commands::webview::{create_gemini_webview, ChildBounds};
use constants::{
    DEFAULT_THEME, GEMINI_WEBVIEW_LABEL, MAIN_WINDOW_LABEL, SETTINGS_CONFIG_NAME,
    SETTING_ALWAYS_ON_TOP, SETTING_THEME,
};
use path_provider::{PlatformDataDir, TauriPathProvider};
use settings::{SettingsDocument, SettingsStore, StoreOptions};
use windows::options::create_options_window;

/// Values used whenever the preferences file is missing, corrupt, or reset.
pub fn default_settings() -> SettingsDocument {
    let mut defaults = SettingsDocument::new();
    defaults.insert(SETTING_THEME.to_string(), json!(DEFAULT_THEME));
    defaults.insert(SETTING_ALWAYS_ON_TOP.to_string(), json!(false));
    defaults
}

#[derive(Clone)]
pub(crate) struct ShellRuntime {
    settings: Arc<SettingsStore>,
}

impl ShellRuntime {
    fn initialize(app: &AppHandle) -> Self {
        let fallback = PlatformDataDir::new(app.config().identifier.clone());
        let provider = TauriPathProvider::new(app.clone(), fallback);
        let options = StoreOptions::new(SETTINGS_CONFIG_NAME).with_defaults(default_settings());
        let settings = SettingsStore::new(options, &provider);
        info!(
            "[desktop] Preferences loaded from {}",
            settings.path().display()
        );

        Self::with_store(settings)
    }

    fn with_store(settings: SettingsStore) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub(crate) fn settings(&self) -> &SettingsStore {
        self.settings.as_ref()
    }

    /// Owned handle for moving store I/O off the async command thread.
    pub(crate) fn settings_handle(&self) -> Arc<SettingsStore> {
        self.settings.clone()
    }
}

/// Applies stored window preferences and keeps the Gemini webview sized to
/// the area below the titlebar.
fn attach_main_window(app: &AppHandle, runtime: &ShellRuntime) -> Result<()> {
    let main_window = app
        .get_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| anyhow!("main window '{}' not found", MAIN_WINDOW_LABEL))?;

    window_prefs::apply_document(&main_window, &runtime.settings().get_all());

    let app_handle = app.clone();
    let window = main_window.clone();
    main_window.on_window_event(move |event| {
        let WindowEvent::Resized(size) = event else {
            return;
        };
        let Some(webview) = app_handle.get_webview(GEMINI_WEBVIEW_LABEL) else {
            return;
        };

        let scale_factor = window.scale_factor().unwrap_or(1.0);
        let bounds = ChildBounds::below_titlebar(*size, scale_factor);
        if let Err(err) = webview.set_bounds(bounds.rect()) {
            warn!("[webview] Failed to resize Gemini webview: {}", err);
        }
    });

    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(logging::plugin())
        .setup(|app| {
            let handle = app.handle().clone();
            let runtime = ShellRuntime::initialize(&handle);
            app.manage(runtime.clone());
            attach_main_window(&handle, &runtime)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            create_gemini_webview,
            create_options_window,
            get_setting,
            set_setting,
            get_all_settings,
            reset_settings
        ])
        .run(tauri::generate_context!())
        .expect("error while running Gemini Desktop");
}
