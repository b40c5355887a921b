use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error returned by IPC commands. The frontend receives the display string.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Window not found: {0}")]
    WindowNotFound(String),
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
