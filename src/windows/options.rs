//! The Options window.
//!
//! macOS keeps native decorations with an overlay titlebar so the traffic
//! lights stay usable; Windows and Linux get an undecorated window and the
//! frontend draws its own titlebar.

use log::{error, info, warn};
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::constants::{
    OPTIONS_WINDOW_HEIGHT, OPTIONS_WINDOW_LABEL, OPTIONS_WINDOW_MIN_HEIGHT,
    OPTIONS_WINDOW_MIN_WIDTH, OPTIONS_WINDOW_TITLE, OPTIONS_WINDOW_URL, OPTIONS_WINDOW_WIDTH,
};
use crate::errors::CommandError;

/// Focuses the Options window, creating it first if needed.
#[tauri::command]
pub async fn create_options_window(app: AppHandle) -> Result<(), CommandError> {
    if let Some(existing) = app.get_webview_window(OPTIONS_WINDOW_LABEL) {
        info!("[options] Window already open, focusing");

        if let Err(err) = existing.unminimize() {
            warn!("[options] Failed to unminimize: {}", err);
        }
        existing.set_focus().map_err(|err| {
            error!("[options] Failed to focus existing window: {}", err);
            CommandError::Tauri(err)
        })?;
        return Ok(());
    }

    let url = WebviewUrl::App(OPTIONS_WINDOW_URL.into());
    let builder = WebviewWindowBuilder::new(&app, OPTIONS_WINDOW_LABEL, url)
        .title(OPTIONS_WINDOW_TITLE)
        .inner_size(OPTIONS_WINDOW_WIDTH, OPTIONS_WINDOW_HEIGHT)
        .min_inner_size(OPTIONS_WINDOW_MIN_WIDTH, OPTIONS_WINDOW_MIN_HEIGHT)
        .resizable(true)
        .center()
        .decorations(cfg!(target_os = "macos"));

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);

    let window = builder.build().map_err(|err| {
        error!(
            "[options] Failed to create window '{}' ({}): {}",
            OPTIONS_WINDOW_LABEL, OPTIONS_WINDOW_URL, err
        );
        CommandError::Tauri(err)
    })?;

    window.set_focus().map_err(|err| {
        error!("[options] Window created but focus failed: {}", err);
        CommandError::Tauri(err)
    })?;

    info!(
        "[options] Window created ({}x{})",
        OPTIONS_WINDOW_WIDTH, OPTIONS_WINDOW_HEIGHT
    );
    Ok(())
}
