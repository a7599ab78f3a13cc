// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./selfhost.toml` > `~/.config/selfhost/selfhost.toml` >
//! `/etc/selfhost/selfhost.toml` with environment variable overrides via `SELFHOST_` prefix.
//! Settings changes are persisted back to a single TOML file.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::info;

use crate::diagnostic::ConfigError;
use crate::model::{SelfhostConfig, SettingsConfig};

const SYSTEM_CONFIG: &str = "/etc/selfhost/selfhost.toml";
const LOCAL_CONFIG: &str = "selfhost.toml";

/// Path of the per-user config file, where settings changes are saved.
pub fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("selfhost").join(LOCAL_CONFIG))
        .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/selfhost/selfhost.toml` (system-wide)
/// 3. `~/.config/selfhost/selfhost.toml` (user XDG config)
/// 4. `./selfhost.toml` (local directory)
/// 5. `SELFHOST_*` environment variables
pub fn load_config() -> Result<SelfhostConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SelfhostConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SelfhostConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SelfhostConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SelfhostConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SelfhostConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Write `config` to `path` as TOML, creating parent directories as needed.
pub fn save_config_to_path(config: &SelfhostConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config).map_err(|e| persist_error(path, e))?;
    write_config_file(path, &content)
}

/// Store `settings.<key>` from `settings` in the file at `path`.
///
/// Only that key is written: other keys already in the file are kept, and
/// values coming from other layers (`/etc`, `SELFHOST_*`) are never copied
/// into it. A key that serializes to nothing, such as an unset `api_key`,
/// is removed from the file.
pub fn save_setting_to_path(
    settings: &SettingsConfig,
    key: &str,
    path: &Path,
) -> Result<(), ConfigError> {
    let mut doc = match std::fs::read_to_string(path) {
        Ok(content) => content
            .parse::<toml::Table>()
            .map_err(|e| persist_error(path, e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => return Err(persist_error(path, e)),
    };

    let value = toml::Value::try_from(settings)
        .map_err(|e| persist_error(path, e))?
        .get(key)
        .cloned();

    let section = doc
        .entry("settings")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(section) = section.as_table_mut() else {
        return Err(persist_error(path, "`settings` is not a table"));
    };
    match value {
        Some(value) => {
            section.insert(key.to_string(), value);
        }
        None => {
            section.remove(key);
        }
    }

    let content = toml::to_string_pretty(&doc).map_err(|e| persist_error(path, e))?;
    write_config_file(path, &content)
}

fn write_config_file(path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| persist_error(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| persist_error(path, e))?;

    info!(path = %path.display(), "settings saved");
    Ok(())
}

fn persist_error(path: &Path, message: impl std::fmt::Display) -> ConfigError {
    ConfigError::Persist {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")`: `SELFHOST_SETTINGS_SYSTEM_MESSAGE` must
/// map to `settings.system_message`, not `settings.system.message`.
fn env_provider() -> Env {
    Env::prefixed("SELFHOST_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SELFHOST_SETTINGS_API_KEY -> "settings_api_key"
        let mapped = key
            .as_str()
            .replacen("app_", "app.", 1)
            .replacen("settings_", "settings.", 1)
            .replacen("cost_", "cost.", 1);
        mapped.into()
    })
}
