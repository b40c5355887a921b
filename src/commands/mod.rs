pub mod settings;
pub mod webview;
