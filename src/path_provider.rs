//! Resolution of the per-user application data directory.
//!
//! The settings store never asks the windowing runtime for paths directly; it
//! receives a [`PathProvider`] so it can run against a temporary directory in
//! tests or against the platform data directory outside of a running app.

use std::path::PathBuf;

use log::warn;
use tauri::{AppHandle, Manager, Runtime};

pub trait PathProvider: Send + Sync {
    /// Writable per-user directory for application data, if one can be resolved.
    fn app_data_dir(&self) -> Option<PathBuf>;
}

impl<F> PathProvider for F
where
    F: Fn() -> Option<PathBuf> + Send + Sync,
{
    fn app_data_dir(&self) -> Option<PathBuf> {
        self()
    }
}

/// Always resolves to the wrapped directory.
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl PathProvider for FixedDir {
    fn app_data_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// `<platform data dir>/<app identifier>`, e.g. `~/.local/share/com.gemini-desktop.app`.
#[derive(Debug, Clone)]
pub struct PlatformDataDir {
    app_identifier: String,
}

impl PlatformDataDir {
    pub fn new(app_identifier: impl Into<String>) -> Self {
        Self {
            app_identifier: app_identifier.into(),
        }
    }
}

impl PathProvider for PlatformDataDir {
    fn app_data_dir(&self) -> Option<PathBuf> {
        let mut dir = dirs::data_dir()?;
        dir.push(&self.app_identifier);
        Some(dir)
    }
}

/// Delegates to the running application's path resolver, falling back to
/// the platform data directory when the resolver fails.
pub struct TauriPathProvider<R: Runtime> {
    app: AppHandle<R>,
    fallback: PlatformDataDir,
}

impl<R: Runtime> TauriPathProvider<R> {
    pub fn new(app: AppHandle<R>, fallback: PlatformDataDir) -> Self {
        Self { app, fallback }
    }
}

impl<R: Runtime> PathProvider for TauriPathProvider<R> {
    fn app_data_dir(&self) -> Option<PathBuf> {
        resolved_or_fallback(self.app.path().app_data_dir(), &self.fallback)
    }
}

fn resolved_or_fallback(
    resolved: tauri::Result<PathBuf>,
    fallback: &PlatformDataDir,
) -> Option<PathBuf> {
    match resolved {
        Ok(dir) => Some(dir),
        Err(err) => {
            warn!(
                "[settings] Failed to resolve app data directory: {}; trying platform data dir",
                err
            );
            fallback.app_data_dir()
        }
    }
}
