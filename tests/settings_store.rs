use std::fs;
use std::path::Path;

use gemini_desktop::path_provider::FixedDir;
use gemini_desktop::settings::{SettingsDocument, SettingsStore, StoreOptions};
use serde_json::{json, Value};
use tempfile::TempDir;

fn document(value: Value) -> SettingsDocument {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn open(dir: &Path, name: &str, defaults: SettingsDocument) -> SettingsStore {
    SettingsStore::new(
        StoreOptions::new(name).with_defaults(defaults),
        &FixedDir(dir.to_path_buf()),
    )
}

#[test]
fn test_first_run_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = document(json!({ "theme": "system", "zoom": 1.0 }));

    let store = open(temp_dir.path(), "user-preferences", defaults.clone());

    assert_eq!(store.get_all(), defaults);
    assert!(!store.path().exists());
}

#[test]
fn test_file_values_override_defaults_key_by_key() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("user-preferences.json"),
        r#"{ "theme": "dark", "sidebar": { "open": false } }"#,
    )
    .unwrap();
    let defaults = document(json!({
        "theme": "system",
        "zoom": 1.0,
        "sidebar": { "open": true, "width": 280 }
    }));

    let store = open(temp_dir.path(), "user-preferences", defaults);

    assert_eq!(
        Value::Object(store.get_all()),
        json!({
            "theme": "dark",
            "zoom": 1.0,
            "sidebar": { "open": false }
        })
    );
}

#[test]
fn test_malformed_file_falls_back_and_is_left_alone() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("user-preferences.json");
    fs::write(&path, "{not valid").unwrap();
    let defaults = document(json!({ "theme": "system" }));

    let store = open(temp_dir.path(), "user-preferences", defaults.clone());

    assert_eq!(store.get_all(), defaults);
    assert_eq!(fs::read_to_string(&path).unwrap(), "{not valid");
}

#[test]
fn test_set_is_visible_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(temp_dir.path(), "user-preferences", SettingsDocument::new());

    assert_eq!(store.get("theme"), None);
    assert!(store.set("theme", "dark"));
    assert_eq!(store.get("theme"), Some(json!("dark")));
}

#[test]
fn test_set_survives_a_fresh_instance() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = document(json!({ "theme": "system" }));

    let store = open(temp_dir.path(), "user-preferences", defaults);
    assert!(store.set("theme", "dark"));
    drop(store);

    let reopened = open(temp_dir.path(), "user-preferences", SettingsDocument::new());
    assert_eq!(reopened.get("theme"), Some(json!("dark")));
}

#[test]
fn test_reset_restores_exact_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = document(json!({ "theme": "system", "alwaysOnTop": false }));
    let store = open(temp_dir.path(), "user-preferences", defaults.clone());

    assert!(store.set("theme", "dark"));
    assert!(store.set("recent", json!(["a", "b"])));
    assert!(store.reset());

    assert_eq!(store.get_all(), defaults);
    assert_eq!(store.get("recent"), None);

    let reopened = open(temp_dir.path(), "user-preferences", SettingsDocument::new());
    assert_eq!(reopened.get_all(), defaults);
}

#[test]
fn test_unwritable_directory_reports_failure_but_keeps_value() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the data directory should be makes every write fail.
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let data_dir = blocker.join("app-data");

    let store = open(&data_dir, "user-preferences", SettingsDocument::new());

    assert!(!store.set("theme", "dark"));
    assert_eq!(store.get("theme"), Some(json!("dark")));
    assert!(!store.reset());
    assert_eq!(store.get("theme"), None);
}

#[test]
fn test_get_all_returns_an_independent_copy() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = document(json!({ "theme": "system" }));
    let store = open(temp_dir.path(), "user-preferences", defaults);

    let mut snapshot = store.get_all();
    snapshot.insert("theme".to_string(), json!("dark"));
    snapshot.insert("injected".to_string(), json!(true));

    assert_eq!(store.get("theme"), Some(json!("system")));
    assert_eq!(store.get("injected"), None);
}

#[test]
fn test_separate_config_names_use_separate_files() {
    let temp_dir = TempDir::new().unwrap();
    let first = open(temp_dir.path(), "window-state", SettingsDocument::new());
    let second = open(temp_dir.path(), "user-preferences", SettingsDocument::new());

    assert!(first.set("maximized", true));
    assert!(second.set("theme", "dark"));

    assert_eq!(first.path(), temp_dir.path().join("window-state.json"));
    assert_eq!(second.path(), temp_dir.path().join("user-preferences.json"));
    assert_eq!(
        open(temp_dir.path(), "window-state", SettingsDocument::new()).get("theme"),
        None
    );
}
