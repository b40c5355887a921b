//! Window labels, sizes and other values shared by the shell.

/// Logical height of the custom titlebar drawn by the frontend.
pub const TITLEBAR_HEIGHT: f64 = 32.0;

pub const GEMINI_URL: &str = "https://gemini.google.com";

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const GEMINI_WEBVIEW_LABEL: &str = "gemini-webview";

pub const OPTIONS_WINDOW_LABEL: &str = "options";
pub const OPTIONS_WINDOW_TITLE: &str = "Options";
pub const OPTIONS_WINDOW_URL: &str = "options.html";
pub const OPTIONS_WINDOW_WIDTH: f64 = 600.0;
pub const OPTIONS_WINDOW_HEIGHT: f64 = 500.0;
pub const OPTIONS_WINDOW_MIN_WIDTH: f64 = 400.0;
pub const OPTIONS_WINDOW_MIN_HEIGHT: f64 = 300.0;

/// Name of the user preferences file inside the app data directory.
pub const SETTINGS_CONFIG_NAME: &str = "user-preferences";

pub const SETTING_THEME: &str = "theme";
pub const SETTING_ALWAYS_ON_TOP: &str = "alwaysOnTop";
pub const DEFAULT_THEME: &str = "system";
