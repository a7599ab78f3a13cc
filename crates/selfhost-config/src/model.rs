// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for selfhost.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use selfhost_core::ModelId;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Environment variable consulted when resetting the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default system message, taken from OpenAI's chat guide.
pub const DEFAULT_SYSTEM_MESSAGE: &str =
    "You are GPT, a large language model trained by OpenAI. Answer as concisely as possible.";

/// Notice shown in a new chat when no API key is configured.
pub const NO_API_KEY_MESSAGE: &[&str] = &[
    "Please ensure you have entered your OpenAI APIKey in the settings",
    "found at the top left of the page.",
    "If self-hosting, ensure it is set in the .env file.",
];

/// Top-level selfhost configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SelfhostConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// User-editable chat settings.
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Spend reporting and context-limit warnings.
    #[serde(default)]
    pub cost: CostConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Title shown at the top of a new chat.
    #[serde(default = "default_title")]
    pub title: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "Self-Host GPT".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Colour theme of the chat UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// User-editable chat settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsConfig {
    /// Model used for new chat requests.
    #[serde(default = "default_model")]
    pub model: ModelId,

    /// OpenAI API key. `None` until the user enters one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base context sent as the first message of every chat.
    #[serde(default = "default_system_message")]
    pub system_message: String,

    /// UI colour theme.
    #[serde(default)]
    pub theme: Theme,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            system_message: default_system_message(),
            theme: Theme::default(),
        }
    }
}

fn default_model() -> ModelId {
    ModelId::Gpt35Turbo
}

fn default_system_message() -> String {
    DEFAULT_SYSTEM_MESSAGE.to_string()
}

impl SettingsConfig {
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    /// Set the API key. An empty string clears it.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        let api_key = api_key.into();
        self.api_key = if api_key.is_empty() { None } else { Some(api_key) };
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    /// Reset the API key to the value of [`API_KEY_ENV`], or clear it when unset.
    pub fn reset_api_key(&mut self) {
        self.reset_api_key_from(std::env::var(API_KEY_ENV).ok());
    }

    /// Reset the API key to an explicit environment value.
    pub fn reset_api_key_from(&mut self, env_value: Option<String>) {
        self.set_api_key(env_value.unwrap_or_default());
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn set_system_message(&mut self, message: impl Into<String>) {
        self.system_message = message.into();
    }

    pub fn reset_system_message(&mut self) {
        self.system_message = default_system_message();
    }
}

/// Spend reporting configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CostConfig {
    /// Report the USD cost of each completed response.
    #[serde(default = "default_show_cost")]
    pub show_cost: bool,

    /// Warn when a conversation exceeds the model's context window.
    #[serde(default = "default_warn_on_context_overflow")]
    pub warn_on_context_overflow: bool,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            show_cost: default_show_cost(),
            warn_on_context_overflow: default_warn_on_context_overflow(),
        }
    }
}

fn default_show_cost() -> bool {
    true
}

fn default_warn_on_context_overflow() -> bool {
    true
}
