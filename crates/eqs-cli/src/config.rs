//! Settings file.
//!
//! Settings live in `settings.toml` under the platform config folder
//! (see [`settings_path`]) unless `--config` names another file.
//!
//! A missing file means defaults. A malformed file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use eqs_ingest::ParseOptions;
use eqs_store::{Account, StaticCredentials, StoreConfig};
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "eqs";
const APP_NAME: &str = "Equipment Status";
const CONFIG_FILENAME: &str = "settings.toml";

/// Everything the CLI reads from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub parse: ParseSettings,
    pub accounts: Vec<Account>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            parse: ParseSettings::default(),
            accounts: Account::defaults(),
        }
    }
}

/// CSV upload options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    /// Honour double-quoted fields in uploads.
    pub quoted_fields: bool,
}

impl Settings {
    /// Parse options for an upload; `force_quoted` comes from `--quoted`.
    pub fn parse_options(&self, force_quoted: bool) -> ParseOptions {
        ParseOptions {
            quoted_fields: force_quoted || self.parse.quoted_fields,
        }
    }

    pub fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new(self.accounts.clone())
    }

    /// Replaces the endpoint when an override is given and not blank.
    pub fn apply_endpoint_override(&mut self, endpoint: Option<&str>) {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            tracing::debug!(endpoint, "store endpoint overridden");
            self.store.endpoint = endpoint.to_string();
        }
    }
}

/// Default settings file location.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Loads settings from `explicit`, or from the default location.
///
/// An explicit path must exist. The default location may be absent.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        return parse_settings(&content, path);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Ok(Settings::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content, &path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(e) => Err(e).with_context(|| format!("read settings file {}", path.display())),
    }
}

fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Writes settings to `path`, creating the parent directory if needed.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, content).with_context(|| format!("write settings file {}", path.display()))?;

    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}
