use std::fs;

use eqs_cli::config::{Settings, load_settings, save_settings};
use eqs_store::{AccessRole, CredentialVerifier};

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.store.endpoint = "https://example.invalid/exec".to_string();
    settings.store.timeout_secs = 5;
    settings.parse.quoted_fields = true;
    save_settings(&settings, &path).expect("save settings");

    let loaded = load_settings(Some(&path)).expect("load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[store]\nendpoint = \"https://example.invalid/exec\"\n").expect("write");

    let loaded = load_settings(Some(&path)).expect("load settings");
    assert_eq!(loaded.store.endpoint, "https://example.invalid/exec");
    assert_eq!(loaded.store.timeout_secs, 30);
    assert_eq!(loaded.accounts.len(), 2);
}

#[test]
fn configured_accounts_replace_stock_ones() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[[accounts]]\nlogin = \"Supervisor\"\npassword = \"s3nha\"\nrole = \"full\"\n",
    )
    .expect("write");

    let credentials = load_settings(Some(&path))
        .expect("load settings")
        .credentials();
    assert_eq!(
        credentials.verify(" supervisor", "s3nha"),
        Some(AccessRole::Full)
    );
    assert_eq!(credentials.verify("admin", "admin"), None);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[store\nendpoint = 1").expect("write");
    assert!(load_settings(Some(&path)).is_err());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
}
