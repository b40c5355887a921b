//! File-backed key-value settings.
//!
//! The store loads `<app data dir>/<config name>.json` once at construction,
//! shallow-merges it over the caller's defaults and keeps the result in memory.
//! Every mutation rewrites the whole file. File-system problems never escape:
//! loading degrades to the defaults and writes report `false`.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::path_provider::PathProvider;

pub type SettingsDocument = Map<String, Value>;

/// Used when the caller supplies no usable config name.
pub const FALLBACK_CONFIG_NAME: &str = "settings";

pub const SETTINGS_FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub config_name: Option<String>,
    pub defaults: SettingsDocument,
}

impl StoreOptions {
    pub fn new(config_name: impl Into<String>) -> Self {
        Self {
            config_name: Some(config_name.into()),
            defaults: SettingsDocument::new(),
        }
    }

    pub fn with_defaults(mut self, defaults: SettingsDocument) -> Self {
        self.defaults = defaults;
        self
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
}

#[derive(Debug, Error)]
enum PersistError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not create directory: {0}")]
    CreateDir(#[source] io::Error),
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
    #[error("could not replace settings file: {0}")]
    Replace(#[source] io::Error),
}

#[derive(Debug)]
pub struct SettingsStore {
    config_name: String,
    path: PathBuf,
    defaults: SettingsDocument,
    document: Mutex<SettingsDocument>,
}

impl SettingsStore {
    pub fn new(options: StoreOptions, paths: &dyn PathProvider) -> Self {
        let config_name = match options.config_name {
            Some(name) if is_usable_config_name(&name) => name,
            Some(name) if !name.trim().is_empty() => {
                warn!(
                    "[settings] Config name '{}' contains a path separator, using '{}'",
                    name, FALLBACK_CONFIG_NAME
                );
                FALLBACK_CONFIG_NAME.to_string()
            }
            _ => {
                warn!(
                    "[settings] No config name provided, using '{}'",
                    FALLBACK_CONFIG_NAME
                );
                FALLBACK_CONFIG_NAME.to_string()
            }
        };

        let file_name = format!("{config_name}.{SETTINGS_FILE_EXTENSION}");
        let path = match paths.app_data_dir() {
            Some(dir) => dir.join(file_name),
            None => {
                warn!(
                    "[settings] App data directory unavailable, storing '{}' in the working directory",
                    file_name
                );
                PathBuf::from(file_name)
            }
        };

        let defaults = options.defaults;
        let document = match read_document(&path) {
            Ok(Some(loaded)) => merge_over(&defaults, loaded),
            Ok(None) => {
                info!(
                    "[settings] No settings file at {}, starting from defaults",
                    path.display()
                );
                defaults.clone()
            }
            Err(err) => {
                error!(
                    "[settings] Failed to load {}: {}; falling back to defaults",
                    path.display(),
                    err
                );
                defaults.clone()
            }
        };

        Self {
            config_name,
            path,
            defaults,
            document: Mutex::new(document),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.document.lock().get(key).cloned()
    }

    /// Stores `value` under `key` and rewrites the backing file.
    ///
    /// Returns `false` when the file could not be written. The in-memory
    /// value is kept either way.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let mut document = self.document.lock();
        document.insert(key.into(), value.into());
        self.persist(&document)
    }

    pub fn get_all(&self) -> SettingsDocument {
        self.document.lock().clone()
    }

    /// Drops every loaded or set value in favour of the defaults, then persists.
    pub fn reset(&self) -> bool {
        let mut document = self.document.lock();
        *document = self.defaults.clone();
        self.persist(&document)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    fn persist(&self, document: &SettingsDocument) -> bool {
        match write_document(&self.path, document) {
            Ok(()) => true,
            Err(err) => {
                error!(
                    "[settings] Failed to persist {}: {} (data: {})",
                    self.path.display(),
                    err,
                    serde_json::to_string(document).unwrap_or_default()
                );
                false
            }
        }
    }
}

/// A name must be non-blank and stay inside the data directory.
fn is_usable_config_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['/', '\\'])
}

/// Keys from `loaded` win; nested objects are replaced, not merged.
fn merge_over(defaults: &SettingsDocument, loaded: SettingsDocument) -> SettingsDocument {
    let mut merged = defaults.clone();
    merged.extend(loaded);
    merged
}

fn read_document(path: &Path) -> Result<Option<SettingsDocument>, LoadError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LoadError::Read(err)),
    };

    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(document) => Ok(Some(document)),
        _ => Err(LoadError::NotAnObject),
    }
}

/// Writes next to the target and renames over it, so an interrupted write
/// never leaves a truncated settings file behind.
fn write_document(path: &Path, document: &SettingsDocument) -> Result<(), PersistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(PersistError::CreateDir)?;
    }

    let bytes = serde_json::to_vec_pretty(document)?;
    let staging = staging_path(path);
    if let Err(err) = fs::write(&staging, bytes) {
        let _ = fs::remove_file(&staging);
        return Err(PersistError::Write(err));
    }

    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(PersistError::Replace(err));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(FALLBACK_CONFIG_NAME));
    name.push(".tmp");
    path.with_file_name(name)
}
