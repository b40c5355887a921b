//! Preferences that change how the main window behaves.

use log::{info, warn};
use serde_json::Value;
use tauri::{Runtime, Theme, Window};

use crate::constants::{SETTING_ALWAYS_ON_TOP, SETTING_THEME};
use crate::settings::SettingsDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowPreference {
    AlwaysOnTop(bool),
    /// `None` follows the system theme.
    Theme(Option<Theme>),
}

/// Window change implied by storing `value` under `key`, if any.
///
/// Unknown keys and non-boolean `alwaysOnTop` values change nothing. Any
/// theme other than `light` or `dark` means "follow the system".
pub(crate) fn preference_for(key: &str, value: &Value) -> Option<WindowPreference> {
    match key {
        SETTING_ALWAYS_ON_TOP => value.as_bool().map(WindowPreference::AlwaysOnTop),
        SETTING_THEME => Some(WindowPreference::Theme(match value.as_str() {
            Some("light") => Some(Theme::Light),
            Some("dark") => Some(Theme::Dark),
            _ => None,
        })),
        _ => None,
    }
}

pub(crate) fn apply<R: Runtime>(window: &Window<R>, preference: WindowPreference) {
    let result = match preference {
        WindowPreference::AlwaysOnTop(enabled) => window.set_always_on_top(enabled),
        WindowPreference::Theme(theme) => window.set_theme(theme),
    };
    match result {
        Ok(()) => info!("[desktop] Applied {:?} to '{}'", preference, window.label()),
        Err(err) => warn!(
            "[desktop] Failed to apply {:?} to '{}': {}",
            preference,
            window.label(),
            err
        ),
    }
}

pub(crate) fn apply_document<R: Runtime>(window: &Window<R>, document: &SettingsDocument) {
    for (key, value) in document {
        if let Some(preference) = preference_for(key, value) {
            apply(window, preference);
        }
    }
}
